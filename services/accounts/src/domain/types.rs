use yelda_domain::code::Authority;
use yelda_domain::id::AccountId;

/// Account owned by the accounts service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub nickname: String,
    pub password_hash: String,
    pub email: String,
    pub photo: String,
    pub authority: Authority,
}

/// Fields for a row about to be inserted. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub nickname: String,
    pub password_hash: String,
    pub email: String,
    pub photo: String,
    pub authority: Authority,
}

/// Partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub username: Option<String>,
    pub nickname: Option<String>,
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub authority: Option<Authority>,
}

impl AccountChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.nickname.is_none()
            && self.password_hash.is_none()
            && self.email.is_none()
            && self.photo.is_none()
            && self.authority.is_none()
    }
}
