#![allow(async_fn_in_trait)]

use yelda_domain::id::AccountId;

use crate::domain::types::{Account, AccountChanges, NewAccount};
use crate::error::AccountsServiceError;

/// Repository for accounts.
///
/// A unique-index violation on `username` must surface as
/// [`AccountsServiceError::UsernameTaken`], never as `Internal`.
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountsServiceError>;
    async fn find_all(&self) -> Result<Vec<Account>, AccountsServiceError>;
    async fn add(&self, account: NewAccount) -> Result<Account, AccountsServiceError>;
    /// Returns the number of rows affected (0 or 1).
    async fn update_by_id(
        &self,
        id: AccountId,
        changes: AccountChanges,
    ) -> Result<u64, AccountsServiceError>;
    /// Returns the number of rows affected (0 or 1).
    async fn delete_by_id(&self, id: AccountId) -> Result<u64, AccountsServiceError>;
}
