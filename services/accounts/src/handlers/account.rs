use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use yelda_auth_types::principal::Principal;
use yelda_domain::code::Authority;
use yelda_domain::id::AccountId;

use crate::domain::policy::parse_code;
use crate::domain::types::Account;
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::account::{
    CreateAccountInput, CreateAccountUseCase, DeleteAccountUseCase, GetAccountUseCase,
    ListAccountsUseCase, UpdateAccountInput, UpdateAccountUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Public view of an account. The password hash is never serialized.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: AccountId,
    pub username: String,
    pub nickname: String,
    pub email: String,
    pub photo: String,
    pub authority: Authority,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            nickname: account.nickname,
            email: account.email,
            photo: account.photo,
            authority: account.authority,
        }
    }
}

#[derive(Serialize)]
pub struct AccountWithMessage {
    #[serde(flatten)]
    pub account: AccountResponse,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct AccountListResponse {
    pub message: &'static str,
    pub data: Vec<AccountResponse>,
}

// ── GET /accounts/{account_id} ───────────────────────────────────────────────

pub async fn get_account(
    principal: Principal,
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<AccountWithMessage>, AccountsServiceError> {
    let usecase = GetAccountUseCase {
        repo: state.account_repo(),
    };
    let account = usecase.execute(&principal, account_id).await?;
    Ok(Json(AccountWithMessage {
        account: account.into(),
        message: "account retrieved",
    }))
}

// ── PUT /accounts/{account_id} ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateAccountRequest {
    pub username: Option<String>,
    pub nickname: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub authority: Option<String>,
}

/// Echo of the submitted fields, minus `password`.
#[derive(Serialize)]
pub struct UpdateAccountResponse {
    pub id: AccountId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<i32>,
    pub message: &'static str,
}

pub async fn update_account(
    principal: Principal,
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
    Form(body): Form<UpdateAccountRequest>,
) -> Result<Json<UpdateAccountResponse>, AccountsServiceError> {
    let usecase = UpdateAccountUseCase {
        repo: state.account_repo(),
        filenames: state.filenames.clone(),
    };
    let echo_username = body.username.clone();
    let echo_nickname = body.nickname.clone();
    let echo_email = body.email.clone();
    let echo_authority = body.authority.as_deref().and_then(parse_code);
    let stored_photo = usecase
        .execute(
            &principal,
            account_id,
            UpdateAccountInput {
                username: body.username,
                nickname: body.nickname,
                password: body.password,
                email: body.email,
                photo: body.photo,
                authority: body.authority,
            },
        )
        .await?;
    Ok(Json(UpdateAccountResponse {
        id: account_id,
        username: echo_username,
        nickname: echo_nickname,
        email: echo_email,
        photo: stored_photo,
        authority: echo_authority,
        message: "account updated",
    }))
}

// ── DELETE /accounts/{account_id} ────────────────────────────────────────────

pub async fn delete_account(
    principal: Principal,
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = DeleteAccountUseCase {
        repo: state.account_repo(),
    };
    usecase.execute(&principal, account_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /accounts/ ───────────────────────────────────────────────────────────

pub async fn list_accounts(
    principal: Principal,
    State(state): State<AppState>,
) -> Result<Json<AccountListResponse>, AccountsServiceError> {
    let usecase = ListAccountsUseCase {
        repo: state.account_repo(),
    };
    let accounts = usecase.execute(&principal).await?;
    Ok(Json(AccountListResponse {
        message: "accounts listed",
        data: accounts.into_iter().map(AccountResponse::from).collect(),
    }))
}

// ── POST /accounts/ ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAccountRequest {
    pub username: Option<String>,
    pub nickname: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
}

pub async fn create_account(
    State(state): State<AppState>,
    Form(body): Form<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountWithMessage>), AccountsServiceError> {
    let usecase = CreateAccountUseCase {
        repo: state.account_repo(),
        filenames: state.filenames.clone(),
    };
    let account = usecase
        .execute(CreateAccountInput {
            username: body.username,
            nickname: body.nickname,
            password: body.password,
            email: body.email,
            photo: body.photo,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AccountWithMessage {
            account: account.into(),
            message: "account created",
        }),
    ))
}
