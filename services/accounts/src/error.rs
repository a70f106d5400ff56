use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Accounts service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccountsServiceError {
    #[error("account not found")]
    AccountNotFound,
    #[error("username already exists")]
    UsernameTaken,
    #[error("invalid username")]
    InvalidUsername,
    #[error("invalid password")]
    InvalidPassword,
    #[error("invalid nickname")]
    InvalidNickname,
    #[error("invalid authority")]
    InvalidAuthority,
    #[error("missing data")]
    MissingData,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidNickname => "INVALID_NICKNAME",
            Self::InvalidAuthority => "INVALID_AUTHORITY",
            Self::MissingData => "MISSING_DATA",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Malformed input rejected before reaching the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidUsername
                | Self::InvalidPassword
                | Self::InvalidNickname
                | Self::InvalidAuthority
                | Self::MissingData
        )
    }
}

impl IntoResponse for AccountsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::AccountNotFound => StatusCode::NOT_FOUND,
            Self::UsernameTaken => StatusCode::CONFLICT,
            Self::InvalidUsername
            | Self::InvalidPassword
            | Self::InvalidNickname
            | Self::InvalidAuthority
            | Self::MissingData => StatusCode::BAD_REQUEST,
            // Existing clients treat authorization failures as 400.
            Self::Forbidden => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // TraceLayer records method, uri and status. The anyhow chain stays server-side.
        match &self {
            Self::Internal(e) => tracing::error!(error = ?e, kind = "INTERNAL", "internal error"),
            Self::Forbidden => tracing::debug!(kind = "FORBIDDEN", "authorization denied"),
            e if e.is_validation() => tracing::debug!(kind = e.kind(), "input rejected"),
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
