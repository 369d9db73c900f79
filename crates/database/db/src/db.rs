use super::{
    metrics::DatabaseMetrics, DatabaseConnectionProvider, ReadConnectionProvider, TXMut,
    WriteConnectionProvider,
};
use crate::error::DatabaseError;

use sea_orm::{Database as SeaOrmDatabase, DatabaseConnection, TransactionTrait};
use std::{sync::Arc, time::Instant};
use tokio::sync::Mutex;

/// The [`Database`] struct is responsible for interacting with the database.
///
/// The [`Database`] type wraps a [`sea_orm::DatabaseConnection`]. We implement
/// [`DatabaseConnectionProvider`] for [`Database`] such that it can be used to perform the
/// operations defined in [`crate::DatabaseReadOperations`] and
/// [`crate::DatabaseWriteOperations`]. Atomic operations can be performed using the
/// [`Database::tx_mut`] method which returns a [`TXMut`] that also implements the
/// [`DatabaseConnectionProvider`] trait. Write transactions are serialized through a mutex.
#[derive(Debug)]
pub struct Database {
    /// The underlying database connection.
    connection: DatabaseConnection,
    /// A mutex held by the inflight write transaction.
    write_lock: Arc<Mutex<()>>,
    /// The database metrics.
    metrics: DatabaseMetrics,
}

impl Database {
    /// Creates a new [`Database`] instance associated with the provided database URL.
    pub async fn new(database_url: &str) -> Result<Self, DatabaseError> {
        let connection = SeaOrmDatabase::connect(database_url).await?;
        Ok(connection.into())
    }

    /// Creates a new [`TXMut`] which can be used for atomic read and write operations.
    ///
    /// The transaction is rolled back if it is dropped before [`TXMut::commit`] is called.
    pub async fn tx_mut(&self) -> Result<TXMut, DatabaseError> {
        let started_at = Instant::now();
        let guard = self.write_lock.clone().lock_owned().await;
        self.metrics.write_lock_acquire_duration.record(started_at.elapsed().as_millis() as f64);

        Ok(TXMut::new(self.connection.begin().await?, guard))
    }
}

impl DatabaseConnectionProvider for Database {
    type Connection = DatabaseConnection;

    fn get_connection(&self) -> &Self::Connection {
        &self.connection
    }
}

impl ReadConnectionProvider for Database {}
impl WriteConnectionProvider for Database {}

impl From<DatabaseConnection> for Database {
    fn from(connection: DatabaseConnection) -> Self {
        Self {
            connection,
            write_lock: Arc::new(Mutex::new(())),
            metrics: DatabaseMetrics::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        test_utils::{l2_block, setup_test_db},
        DatabaseReadOperations, DatabaseWriteOperations,
    };
    use alloy_primitives::B256;
    use arbitrary::{Arbitrary, Unstructured};
    use rand::Rng;
    use rollup_node_primitives::{L2Block, RowConsumption, SubCircuitRowUsage};

    #[tokio::test]
    async fn test_database_round_trip_l2_block() {
        // Set up the test database.
        let db = setup_test_db().await;

        // Generate unstructured bytes.
        let mut bytes = [0u8; 1024];
        rand::rng().fill(bytes.as_mut_slice());
        let mut u = Unstructured::new(&bytes);

        // Generate a random block.
        let mut block = L2Block::arbitrary(&mut u).unwrap();
        block.number = 1;
        block.row_consumption =
            Some(RowConsumption::from(vec![SubCircuitRowUsage::new("keccak", 42)]));

        // Round trip the block through the database.
        db.insert_l2_blocks(vec![block.clone()]).await.unwrap();
        let blocks = db.get_l2_blocks_gte_height(1, 10).await.unwrap();
        assert_eq!(blocks, vec![block]);
    }

    #[tokio::test]
    async fn test_database_tx_rollback_on_drop() {
        // Setup the test database.
        let db = setup_test_db().await;

        // Insert the blocks in a transaction which is dropped before committing.
        {
            let tx = db.tx_mut().await.unwrap();
            tx.insert_l2_blocks(vec![l2_block(1, 100), l2_block(2, 100)]).await.unwrap();
        }
        assert!(db.get_l2_blocks_gte_height(1, 10).await.unwrap().is_empty());

        // Insert the blocks in a committed transaction.
        let tx = db.tx_mut().await.unwrap();
        tx.insert_l2_blocks(vec![l2_block(1, 100), l2_block(2, 100)]).await.unwrap();
        tx.commit().await.unwrap();

        let blocks = db.get_l2_blocks_gte_height(1, 10).await.unwrap();
        assert_eq!(blocks.iter().map(|b| b.number).collect::<Vec<_>>(), vec![1, 2]);
        assert!(blocks.iter().all(|b| b.hash != B256::ZERO));
    }
}
