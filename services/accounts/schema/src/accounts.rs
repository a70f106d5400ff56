use sea_orm::entity::prelude::*;

/// Account record owned by the accounts service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub nickname: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub email: String,
    /// Sanitized photo filename.
    pub photo: String,
    /// Authority code (1xx).
    pub authority: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
