use anyhow::Context as _;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

use crate::error::AccountsServiceError;

/// Hash `password` with Argon2id into a PHC string. Runs on the blocking pool.
pub async fn hash_password(password: String) -> Result<String, AccountsServiceError> {
    let hash = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| anyhow::anyhow!("argon2 hash: {e}"))
    })
    .await
    .context("join password hashing task")??;
    Ok(hash)
}
