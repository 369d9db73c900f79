use crate::ChunkLimit;
use rollup_node_primitives::{ChunkStats, SealedChunk};

/// The condition which made a chunk ready to be proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkTrigger {
    /// The next candidate block would have breached the limit.
    LimitReached(ChunkLimit),
    /// The first block of the chunk is older than the chunk timeout.
    FirstBlockTimeout,
    /// The chunk holds the maximum number of blocks.
    MaxBlockNum,
}

/// The outcome of a chunk proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProposalOutcome {
    /// A chunk is ready to be persisted.
    Proposed {
        /// The sealed chunk, carrying its resource usage.
        chunk: SealedChunk,
        /// The condition which made the chunk ready.
        trigger: ChunkTrigger,
    },
    /// The unchunked blocks don't reach any limit and the chunk timeout isn't reached yet.
    NotEnoughBlocks {
        /// The resource usage of the unchunked blocks.
        stats: ChunkStats,
    },
    /// There are no unchunked blocks.
    NoBlocks,
}

impl ProposalOutcome {
    /// Returns the resource usage of the outcome, if any block was considered.
    pub const fn stats(&self) -> Option<&ChunkStats> {
        match self {
            Self::Proposed { chunk, .. } => Some(&chunk.stats),
            Self::NotEnoughBlocks { stats } => Some(stats),
            Self::NoBlocks => None,
        }
    }

    /// Returns the proposed chunk, if any.
    pub const fn chunk(&self) -> Option<&SealedChunk> {
        match self {
            Self::Proposed { chunk, .. } => Some(chunk),
            _ => None,
        }
    }
}
