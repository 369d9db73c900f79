//! The codec implementation for Scroll chunks.
//!
//! Follows the V0 chunk codec:
//! <https://github.com/scroll-tech/scroll-contracts/blob/81f0db72ca5335e0dddfaa99cb415e3d1cee895f/src/libraries/codec/ChunkCodecV0.sol>

pub use block::BlockContext;
pub mod block;

pub use error::CodecError;
mod error;

pub mod estimate;

pub use hash::compute_chunk_hash;
mod hash;
