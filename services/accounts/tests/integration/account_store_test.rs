use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordVerifier};
use yelda_accounts::domain::repository::AccountRepository;
use yelda_accounts::domain::types::{AccountChanges, NewAccount};
use yelda_accounts::error::AccountsServiceError;
use yelda_accounts::infra::db::DbAccountRepository;
use yelda_domain::code::Authority;
use yelda_domain::id::AccountId;

use crate::helpers::{signup, test_app, test_db};

fn new_account(username: &str) -> NewAccount {
    NewAccount {
        username: username.to_owned(),
        nickname: "Tester".to_owned(),
        password_hash: "$argon2id$placeholder".to_owned(),
        email: format!("{username}@example.com"),
        photo: String::new(),
        authority: Authority::Guest,
    }
}

#[tokio::test]
async fn should_assign_ids_and_find_rows() {
    let repo = DbAccountRepository { db: test_db().await };
    let alice = repo.add(new_account("alice123")).await.unwrap();
    let bob = repo.add(new_account("bob12345")).await.unwrap();
    assert_ne!(alice.id, bob.id);

    let found = repo.find_by_id(alice.id).await.unwrap().unwrap();
    assert_eq!(found, alice);
    assert!(repo.find_by_id(AccountId(9999)).await.unwrap().is_none());

    let all = repo.find_all().await.unwrap();
    assert_eq!(all, vec![alice, bob]);
}

#[tokio::test]
async fn should_surface_duplicate_username_as_taken() {
    let repo = DbAccountRepository { db: test_db().await };
    repo.add(new_account("alice123")).await.unwrap();
    let result = repo.add(new_account("alice123")).await;
    assert!(
        matches!(result, Err(AccountsServiceError::UsernameTaken)),
        "expected UsernameTaken, got {result:?}"
    );
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_count_affected_rows_on_update_and_delete() {
    let repo = DbAccountRepository { db: test_db().await };
    let alice = repo.add(new_account("alice123")).await.unwrap();

    let changes = AccountChanges {
        authority: Some(Authority::Doctor),
        ..Default::default()
    };
    assert_eq!(repo.update_by_id(alice.id, changes.clone()).await.unwrap(), 1);
    assert_eq!(repo.update_by_id(AccountId(404), changes).await.unwrap(), 0);
    let updated = repo.find_by_id(alice.id).await.unwrap().unwrap();
    assert_eq!(updated.authority, Authority::Doctor);
    assert_eq!(updated.nickname, "Tester");

    assert_eq!(repo.delete_by_id(alice.id).await.unwrap(), 1);
    assert_eq!(repo.delete_by_id(alice.id).await.unwrap(), 0);
}

#[tokio::test]
async fn should_surface_rename_collision_as_taken() {
    let repo = DbAccountRepository { db: test_db().await };
    repo.add(new_account("alice123")).await.unwrap();
    let bob = repo.add(new_account("bob12345")).await.unwrap();
    let result = repo
        .update_by_id(
            bob.id,
            AccountChanges {
                username: Some("alice123".to_owned()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AccountsServiceError::UsernameTaken)));
}

#[tokio::test]
async fn should_store_only_password_hash() {
    let app = test_app().await;
    let id = signup(&app, "alice123", "Passw0rd").await;
    let repo = DbAccountRepository { db: app.db.clone() };
    let stored = repo
        .find_by_id(AccountId(id as i32))
        .await
        .unwrap()
        .unwrap();
    assert_ne!(stored.password_hash, "Passw0rd");
    let parsed = PasswordHash::new(&stored.password_hash).unwrap();
    assert!(
        Argon2::default()
            .verify_password(b"Passw0rd", &parsed)
            .is_ok()
    );
}
