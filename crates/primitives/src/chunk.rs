use crate::{BlockInfo, L2Block};
use alloy_primitives::B256;

/// A [`Chunk`] is a contiguous series of L2 blocks that are proven by a single prover.
///
/// A collection of chunks is later grouped into a batch which is committed to L1. Every chunk is
/// bound to a range of L1 block hashes through its [`Chunk::l1_block_range_hash`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
    /// The blocks in the chunk, in ascending order.
    pub blocks: Vec<L2Block>,
    /// The last applied L1 block of the last block in the chunk.
    pub last_applied_l1_block: u64,
    /// The hash committing to the L1 block range of the chunk.
    pub l1_block_range_hash: B256,
}

impl Chunk {
    /// Returns the first block of the chunk.
    pub fn first_block(&self) -> Option<&L2Block> {
        self.blocks.first()
    }

    /// Returns the last block of the chunk.
    pub fn last_block(&self) -> Option<&L2Block> {
        self.blocks.last()
    }
}

/// The resource usage of a chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkStats {
    /// The number of transactions in the chunk.
    pub tx_num: u64,
    /// The estimated L1 commit gas of the chunk, without any over-estimation applied.
    pub l1_commit_gas: u64,
    /// The estimated L1 commit calldata size of the chunk.
    pub l1_commit_calldata_size: u64,
    /// The total gas used by the blocks of the chunk.
    pub total_gas_used: u64,
    /// The row consumption of the busiest sub-circuit.
    pub max_row_consumption: u64,
    /// The number of blocks in the chunk.
    pub block_num: u64,
}

/// A [`Chunk`] along with its hash and resource usage, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedChunk {
    /// The chunk.
    pub chunk: Chunk,
    /// The hash of the chunk.
    pub hash: B256,
    /// The resource usage of the chunk.
    pub stats: ChunkStats,
}

/// A chunk as persisted in the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkInfo {
    /// The index of the chunk.
    pub index: u64,
    /// The hash of the chunk.
    pub hash: B256,
    /// The first block of the chunk.
    pub start_block: BlockInfo,
    /// The last block of the chunk.
    pub end_block: BlockInfo,
    /// The timestamp of the first block of the chunk.
    pub start_block_time: u64,
    /// The resource usage of the chunk.
    pub stats: ChunkStats,
    /// The last applied L1 block of the chunk.
    pub last_applied_l1_block: u64,
    /// The hash committing to the L1 block range of the chunk.
    pub l1_block_range_hash: B256,
    /// The hash of the parent chunk, or the zero hash for the first chunk.
    pub parent_hash: B256,
}
