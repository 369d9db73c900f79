use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(scroll_migration::Migrator).await;
}
