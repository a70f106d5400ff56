use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use yelda_accounts::config::AccountsConfig;
use yelda_accounts::router::build_router;
use yelda_accounts::state::AppState;
use yelda_core::config::Config as _;
use yelda_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("yelda_accounts=info,tower_http=info,sea_orm=warn");

    let config = AccountsConfig::from_env().context("load accounts config")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    let state = AppState {
        db,
        filenames: config.filename_policy(),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("bind {http_addr}"))?;

    info!("accounts service listening on {http_addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
