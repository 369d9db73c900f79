//! Primitive types for the Rollup Node chunk proposer.

pub use block::{BlockInfo, L2Block, L2Transaction, L1_MESSAGE_TX_TYPE};
mod block;

pub use chunk::{Chunk, ChunkInfo, ChunkStats, SealedChunk};
mod chunk;

pub use row_consumption::{RowConsumption, SubCircuitRowUsage};
mod row_consumption;
