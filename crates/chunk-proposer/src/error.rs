use rollup_node_providers::L1ProviderError;
use scroll_codec::CodecError;
use scroll_db::DatabaseError;
use std::fmt;

/// A resource limit of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkLimit {
    /// The number of transactions in the chunk.
    TxNum,
    /// The over-estimated L1 commit gas of the chunk.
    L1CommitGas,
    /// The L1 commit calldata size of the chunk.
    L1CommitCalldataSize,
    /// The row consumption of the busiest sub-circuit.
    RowConsumption,
}

impl ChunkLimit {
    /// Returns the name of the limit.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TxNum => "tx_num",
            Self::L1CommitGas => "l1_commit_gas",
            Self::L1CommitCalldataSize => "l1_commit_calldata_size",
            Self::RowConsumption => "row_consumption",
        }
    }
}

impl fmt::Display for ChunkLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error type for the chunk proposer.
#[derive(Debug, thiserror::Error)]
pub enum ChunkProposerError {
    /// The proposer encountered an error when interacting with the database.
    #[error("Encountered an error interacting with the database: {0}")]
    Database(#[from] DatabaseError),
    /// The proposer encountered an error when resolving the L1 block range hash.
    #[error("Encountered an error resolving the L1 block range hash: {0}")]
    L1Provider(#[from] L1ProviderError),
    /// The chunk could not be encoded.
    #[error("Encountered an error encoding the chunk: {0}")]
    Codec(#[from] CodecError),
    /// A block carries no row consumption.
    #[error("Missing row consumption")]
    MalformedRowConsumption,
    /// The first candidate block alone exceeds a chunk limit.
    #[error("The first block {block_number} exceeds the {limit} limit: {value} > {max}")]
    FirstBlockExceedsLimit {
        /// The exceeded limit.
        limit: ChunkLimit,
        /// The number of the block.
        block_number: u64,
        /// The value of the limited resource for the block.
        value: u64,
        /// The configured maximum.
        max: u64,
    },
    /// The proposer configuration is invalid.
    #[error("Invalid chunk proposer configuration: {0}")]
    InvalidConfig(&'static str),
}
