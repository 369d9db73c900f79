//! Test utilities for the database crate.

use super::Database;

use alloy_primitives::{Bytes, B256};
use rollup_node_primitives::{L2Block, L2Transaction, RowConsumption, SubCircuitRowUsage};
use scroll_migration::{Migrator, MigratorTrait};

/// Instantiates a new in-memory database and runs the migrations
/// to set up the schema.
pub async fn setup_test_db() -> Database {
    let database_url = "sqlite::memory:";
    let connection = sea_orm::Database::connect(database_url).await.unwrap();
    Migrator::up(&connection, None).await.unwrap();

    connection.into()
}

/// Returns an executed L2 block at the provided height, holding a single L2 transaction.
pub fn l2_block(number: u64, last_applied_l1_block: u64) -> L2Block {
    L2Block {
        number,
        hash: B256::left_padding_from(&number.to_be_bytes()) | B256::with_last_byte(1),
        parent_hash: B256::left_padding_from(&number.saturating_sub(1).to_be_bytes()),
        timestamp: 1_700_000_000 + number,
        gas_used: 21_000,
        gas_limit: 10_000_000,
        base_fee: Some(1_000_000),
        transactions: vec![L2Transaction::new(0x02, Bytes::from(number.to_be_bytes().to_vec()))],
        row_consumption: Some(RowConsumption::from(vec![SubCircuitRowUsage::new("evm", 100)])),
        last_applied_l1_block,
    }
}
