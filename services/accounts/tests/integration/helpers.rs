use axum_test::{TestRequest, TestServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use yelda_accounts::domain::filename::FilenamePolicy;
use yelda_accounts::router::build_router;
use yelda_accounts::state::AppState;
use yelda_accounts_migration::{Migrator, MigratorTrait};
use yelda_testing::auth::MockPrincipal;

// ── Database ─────────────────────────────────────────────────────────────────

/// Fresh in-memory SQLite database with the accounts schema applied.
/// A single pooled connection keeps the in-memory database alive.
pub async fn test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

// ── HTTP ─────────────────────────────────────────────────────────────────────

pub struct TestApp {
    pub server: TestServer,
    pub db: DatabaseConnection,
}

pub async fn test_app() -> TestApp {
    let db = test_db().await;
    let state = AppState {
        db: db.clone(),
        filenames: FilenamePolicy::default(),
    };
    let server = TestServer::new(build_router(state)).unwrap();
    TestApp { server, db }
}

/// Attach gateway identity headers for `who`.
pub fn as_principal(mut request: TestRequest, who: MockPrincipal) -> TestRequest {
    for (name, value) in who.headers() {
        request = request.add_header(name, value);
    }
    request
}

pub fn signup_form<'a>(username: &'a str, password: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("username", username),
        ("password", password),
        ("nickname", "Tester"),
        ("email", "tester@example.com"),
        ("photo", "avatar.png"),
    ]
}

/// Create an account through the public endpoint and return its id.
pub async fn signup(app: &TestApp, username: &str, password: &str) -> i64 {
    let response = app
        .server
        .post("/accounts/")
        .form(&signup_form(username, password))
        .await;
    assert_eq!(response.status_code(), 201, "signup {username} failed");
    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}
