use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use yelda_accounts_schema::accounts;
use yelda_core::sea_ext::DbErrExt as _;
use yelda_domain::code::Authority;
use yelda_domain::id::AccountId;

use crate::domain::repository::AccountRepository;
use crate::domain::types::{Account, AccountChanges, NewAccount};
use crate::error::AccountsServiceError;

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find account by id")?;
        model.map(account_from_model).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Account>, AccountsServiceError> {
        let models = accounts::Entity::find()
            .order_by_asc(accounts::Column::Id)
            .all(&self.db)
            .await
            .context("find all accounts")?;
        models.into_iter().map(account_from_model).collect()
    }

    async fn add(&self, account: NewAccount) -> Result<Account, AccountsServiceError> {
        let model = accounts::ActiveModel {
            id: NotSet,
            username: Set(account.username),
            nickname: Set(account.nickname),
            password_hash: Set(account.password_hash),
            email: Set(account.email),
            photo: Set(account.photo),
            authority: Set(account.authority.code()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_write_err(e, "insert account"))?;
        account_from_model(model)
    }

    async fn update_by_id(
        &self,
        id: AccountId,
        changes: AccountChanges,
    ) -> Result<u64, AccountsServiceError> {
        if changes.is_empty() {
            return Err(AccountsServiceError::MissingData);
        }
        let mut am = <accounts::ActiveModel as Default>::default();
        if let Some(username) = changes.username {
            am.username = Set(username);
        }
        if let Some(nickname) = changes.nickname {
            am.nickname = Set(nickname);
        }
        if let Some(password_hash) = changes.password_hash {
            am.password_hash = Set(password_hash);
        }
        if let Some(email) = changes.email {
            am.email = Set(email);
        }
        if let Some(photo) = changes.photo {
            am.photo = Set(photo);
        }
        if let Some(authority) = changes.authority {
            am.authority = Set(authority.code());
        }
        let result = accounts::Entity::update_many()
            .set(am)
            .filter(accounts::Column::Id.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| map_write_err(e, "update account"))?;
        Ok(result.rows_affected)
    }

    async fn delete_by_id(&self, id: AccountId) -> Result<u64, AccountsServiceError> {
        let result = accounts::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete account")?;
        Ok(result.rows_affected)
    }
}

/// Unique violations are the only write failure callers can act on.
fn map_write_err(err: DbErr, context: &'static str) -> AccountsServiceError {
    if err.is_unique_violation() {
        AccountsServiceError::UsernameTaken
    } else {
        anyhow::Error::new(err).context(context).into()
    }
}

fn account_from_model(model: accounts::Model) -> Result<Account, AccountsServiceError> {
    let authority = Authority::from_code(model.authority).with_context(|| {
        format!(
            "account {} has unregistered authority code {}",
            model.id, model.authority
        )
    })?;
    Ok(Account {
        id: AccountId(model.id),
        username: model.username,
        nickname: model.nickname,
        password_hash: model.password_hash,
        email: model.email,
        photo: model.photo,
        authority,
    })
}
