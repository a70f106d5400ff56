use yelda_auth_types::principal::Principal;
use yelda_domain::code::Authority;
use yelda_domain::id::AccountId;

use crate::domain::filename::{FilenamePolicy, secure_filename};
use crate::domain::policy::{
    authorize_delete, authorize_list, authorize_read, authorize_update, parse_code,
};
use crate::domain::repository::AccountRepository;
use crate::domain::types::{Account, AccountChanges, NewAccount};
use crate::domain::validation::{validate_nickname, validate_password, validate_username};
use crate::error::AccountsServiceError;
use crate::infra::password::hash_password;

fn check_shape(
    username: Option<&str>,
    password: Option<&str>,
    nickname: Option<&str>,
) -> Result<(), AccountsServiceError> {
    if !validate_username(username) {
        return Err(AccountsServiceError::InvalidUsername);
    }
    if !validate_password(password) {
        return Err(AccountsServiceError::InvalidPassword);
    }
    if !validate_nickname(nickname) {
        return Err(AccountsServiceError::InvalidNickname);
    }
    Ok(())
}

// ── GetAccount ───────────────────────────────────────────────────────────────

pub struct GetAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> GetAccountUseCase<R> {
    pub async fn execute(
        &self,
        caller: &Principal,
        id: AccountId,
    ) -> Result<Account, AccountsServiceError> {
        authorize_read(caller, id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)
    }
}

// ── ListAccounts ─────────────────────────────────────────────────────────────

pub struct ListAccountsUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> ListAccountsUseCase<R> {
    pub async fn execute(&self, caller: &Principal) -> Result<Vec<Account>, AccountsServiceError> {
        authorize_list(caller)?;
        self.repo.find_all().await
    }
}

// ── CreateAccount ────────────────────────────────────────────────────────────

pub struct CreateAccountInput {
    pub username: Option<String>,
    pub nickname: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
}

/// Open to unauthenticated callers. New accounts always start at
/// [`Authority::Empty`]; tiers are granted later by an admin.
pub struct CreateAccountUseCase<R: AccountRepository> {
    pub repo: R,
    pub filenames: FilenamePolicy,
}

impl<R: AccountRepository> CreateAccountUseCase<R> {
    pub async fn execute(&self, input: CreateAccountInput) -> Result<Account, AccountsServiceError> {
        let (Some(username), Some(password)) = (input.username, input.password) else {
            return Err(AccountsServiceError::MissingData);
        };
        check_shape(Some(&username), Some(&password), input.nickname.as_deref())?;

        let photo = input
            .photo
            .map(|p| secure_filename(&p, &self.filenames))
            .unwrap_or_default();
        let account = NewAccount {
            username,
            nickname: input.nickname.unwrap_or_default(),
            password_hash: hash_password(password).await?,
            email: input.email.unwrap_or_default(),
            photo,
            authority: Authority::Empty,
        };
        let created = self.repo.add(account).await?;
        tracing::info!(account_id = %created.id, username = %created.username, "account created");
        Ok(created)
    }
}

// ── UpdateAccount ────────────────────────────────────────────────────────────

pub struct UpdateAccountInput {
    pub username: Option<String>,
    pub nickname: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    /// Raw authority form value as submitted.
    pub authority: Option<String>,
}

pub struct UpdateAccountUseCase<R: AccountRepository> {
    pub repo: R,
    pub filenames: FilenamePolicy,
}

impl<R: AccountRepository> UpdateAccountUseCase<R> {
    /// Returns the sanitized photo reference that was stored, if one was submitted.
    pub async fn execute(
        &self,
        caller: &Principal,
        id: AccountId,
        input: UpdateAccountInput,
    ) -> Result<Option<String>, AccountsServiceError> {
        authorize_update(caller, input.authority.as_deref())?;

        check_shape(
            input.username.as_deref(),
            input.password.as_deref(),
            input.nickname.as_deref(),
        )?;
        let authority = input
            .authority
            .as_deref()
            .map(|raw| {
                parse_code(raw)
                    .and_then(Authority::from_code)
                    .ok_or(AccountsServiceError::InvalidAuthority)
            })
            .transpose()?;
        let password_hash = match input.password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };
        let photo = input.photo.map(|p| secure_filename(&p, &self.filenames));

        let changes = AccountChanges {
            username: input.username,
            nickname: input.nickname,
            password_hash,
            email: input.email,
            photo: photo.clone(),
            authority,
        };
        if changes.is_empty() {
            return Err(AccountsServiceError::MissingData);
        }
        match self.repo.update_by_id(id, changes).await? {
            0 => Err(AccountsServiceError::AccountNotFound),
            _ => Ok(photo),
        }
    }
}

// ── DeleteAccount ────────────────────────────────────────────────────────────

pub struct DeleteAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> DeleteAccountUseCase<R> {
    pub async fn execute(
        &self,
        caller: &Principal,
        id: AccountId,
    ) -> Result<(), AccountsServiceError> {
        authorize_delete(caller, id)?;
        match self.repo.delete_by_id(id).await? {
            0 => Err(AccountsServiceError::AccountNotFound),
            _ => {
                tracing::info!(account_id = %id, deleted_by = %caller.id, "account deleted");
                Ok(())
            }
        }
    }
}
