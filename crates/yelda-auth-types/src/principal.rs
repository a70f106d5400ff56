//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

use yelda_domain::code::Authority;
use yelda_domain::id::AccountId;

pub const ACCOUNT_ID_HEADER: &str = "x-yelda-account-id";
pub const AUTHORITY_HEADER: &str = "x-yelda-authority";

/// The authenticated caller, injected by the gateway via `x-yelda-account-id`
/// and `x-yelda-authority` headers.
///
/// Returns 401 if either header is absent, unparsable, or the authority is not a
/// registered code. Authorization decisions are made by use cases after extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: AccountId,
    pub authority: Authority,
}

impl Principal {
    pub fn new(id: impl Into<AccountId>, authority: Authority) -> Self {
        Self {
            id: id.into(),
            authority,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.authority.is_admin()
    }
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Values are read synchronously so the returned future does not borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let id = parts
            .headers
            .get(ACCOUNT_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<AccountId>().ok());

        let authority = parts
            .headers
            .get(AUTHORITY_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<i32>().ok())
            .and_then(Authority::from_code);

        async move {
            let id = id.ok_or(StatusCode::UNAUTHORIZED)?;
            let authority = authority.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { id, authority })
        }
    }
}
