use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(yelda_accounts_migration::Migrator).await;
}
