//! Mock principal helpers for integration tests.
//!
//! Services behind the gateway receive `x-yelda-account-id` + `x-yelda-authority`
//! headers. In tests, `MockPrincipal` produces these headers directly so no real
//! gateway or session is needed.

use axum::http::{HeaderName, HeaderValue};

use yelda_auth_types::principal::{ACCOUNT_ID_HEADER, AUTHORITY_HEADER};
use yelda_domain::code::Authority;

/// Configurable identity injected into test requests.
#[derive(Debug, Clone, Copy)]
pub struct MockPrincipal {
    pub account_id: i32,
    pub authority: Authority,
}

impl MockPrincipal {
    pub fn new(account_id: i32, authority: Authority) -> Self {
        Self {
            account_id,
            authority,
        }
    }

    pub fn admin(account_id: i32) -> Self {
        Self::new(account_id, Authority::Admin)
    }

    /// Return header pairs as if the gateway injected them.
    pub fn headers(&self) -> [(HeaderName, HeaderValue); 2] {
        [
            (
                HeaderName::from_static(ACCOUNT_ID_HEADER),
                HeaderValue::from(self.account_id),
            ),
            (
                HeaderName::from_static(AUTHORITY_HEADER),
                HeaderValue::from(self.authority.code()),
            ),
        ]
    }
}
