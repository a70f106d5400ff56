//! Who may do what to which account.
//!
//! Admins may act on any account. Everyone else may read and delete only
//! their own account, and may update only while keeping their own authority tier.
//! Listing is admin-only. Creation is open.

use yelda_auth_types::principal::Principal;
use yelda_domain::id::AccountId;

use crate::error::AccountsServiceError;

pub fn authorize_read(caller: &Principal, target: AccountId) -> Result<(), AccountsServiceError> {
    owner_or_admin(caller, target)
}

pub fn authorize_delete(caller: &Principal, target: AccountId) -> Result<(), AccountsServiceError> {
    owner_or_admin(caller, target)
}

pub fn authorize_list(caller: &Principal) -> Result<(), AccountsServiceError> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(AccountsServiceError::Forbidden)
    }
}

/// `submitted_authority` is the raw form value, not yet parsed. An absent
/// value keeps the current tier and is always allowed. For non-admins anything
/// that does not parse to their own code, including garbage, is forbidden.
pub fn authorize_update(
    caller: &Principal,
    submitted_authority: Option<&str>,
) -> Result<(), AccountsServiceError> {
    if caller.is_admin() {
        return Ok(());
    }
    match submitted_authority {
        Some(raw) if parse_code(raw) != Some(caller.authority.code()) => {
            Err(AccountsServiceError::Forbidden)
        }
        _ => Ok(()),
    }
}

/// Numeric code from a form value. Surrounding whitespace is ignored.
pub fn parse_code(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn owner_or_admin(caller: &Principal, target: AccountId) -> Result<(), AccountsServiceError> {
    if caller.is_admin() || caller.id == target {
        Ok(())
    } else {
        Err(AccountsServiceError::Forbidden)
    }
}
