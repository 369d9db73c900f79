//! The chunk proposer binary.

use alloy_provider::ProviderBuilder;
use alloy_rpc_client::RpcClient;
use clap::Parser;
use rollup_node_chunk_proposer::ChunkProposer;
use rollup_node_providers::L1BlockRangeOracle;
use scroll_db::Database;
use scroll_migration::{Migrator, MigratorTrait};
use std::{sync::Arc, time::Duration};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod args;
use args::ChunkProposerCli;

mod constants;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing();
    run(ChunkProposerCli::parse()).await
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(args: ChunkProposerCli) -> eyre::Result<()> {
    let config = args.chunk.config();

    // Connect to the database and run the migrations.
    let connection = sea_orm::Database::connect(&args.database.url).await?;
    Migrator::up(&connection, None).await?;
    let database = Arc::new(Database::from(connection));

    // Get a provider for the L1 view oracle.
    let client = RpcClient::builder().http(args.l1.url.clone());
    let provider = ProviderBuilder::new().connect_client(client);
    let oracle = L1BlockRangeOracle::new(provider, args.l1.view_oracle)?;

    let oracle_address = oracle.address();

    let mut proposer = ChunkProposer::new(database, oracle, config)?;
    tracing::info!(
        target: "scroll::chunk_proposer",
        oracle = %oracle_address,
        poll_interval = args.chunk.poll_interval,
        "Starting chunk proposer"
    );

    let mut interval = tokio::time::interval(Duration::from_millis(args.chunk.poll_interval));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                tracing::info!(target: "scroll::chunk_proposer", "Received shutdown signal, stopping chunk proposer");
                break
            }
            // Failed cycles are logged by the proposer and retried on the next tick.
            _ = async {
                interval.tick().await;
                proposer.try_propose_chunk().await
            } => {}
        }
    }

    Ok(())
}
