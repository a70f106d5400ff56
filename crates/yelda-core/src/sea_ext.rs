use sea_orm::{DbErr, SqlErr};

/// Classification helpers over the store's native error codes.
pub trait DbErrExt {
    /// True when the statement violated a unique index
    /// (Postgres 23505, MySQL 1062, SQLite 2067/1555).
    fn is_unique_violation(&self) -> bool;
}

impl DbErrExt for DbErr {
    fn is_unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }
}
