use alloy_primitives::B256;

/// The error type for database operations.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// A database error occurred.
    #[error("database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),
    /// A block column could not be (de)serialized.
    #[error("failed to (de)serialize block data: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The chunk holds no block.
    #[error("cannot insert empty chunk {0}")]
    EmptyChunk(B256),
    /// The chunk assignment did not update the expected amount of blocks.
    #[error("chunk {hash} assignment updated {updated} blocks in [{start}, {end}]")]
    ChunkAssignmentMismatch {
        /// The hash of the chunk.
        hash: B256,
        /// The first block of the range.
        start: u64,
        /// The last block of the range.
        end: u64,
        /// The number of updated blocks.
        updated: u64,
    },
}
