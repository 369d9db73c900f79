//! L1 commit cost estimations for blocks and chunks.
//!
//! The estimations over-approximate the cost of committing a chunk to the L1 rollup contract:
//! every calldata byte is priced as a non-zero byte.

use crate::BlockContext;
use rollup_node_primitives::L2Block;

/// The gas cost of a non-zero calldata byte.
pub const CALLDATA_NON_ZERO_BYTE_GAS: u64 = 16;

/// The gas cost of a warm storage read or call.
const WARM_ACCESS_GAS: u64 = 100;

/// The gas cost of a cold storage read.
const COLD_SLOAD_GAS: u64 = 2100;

/// The size of the length prefix for each L2 transaction payload in the chunk encoding.
const TX_PAYLOAD_LENGTH_BYTES: u64 = 4;

/// The number of bytes of the block context that enter the chunk hash.
const HASHED_BLOCK_CONTEXT_BYTES: u64 = BlockContext::BYTES_LENGTH as u64 - 2;

const BLOCK_CONTEXT_BYTES: u64 = BlockContext::BYTES_LENGTH as u64;

/// Returns the memory expansion cost for the provided memory size in bytes.
pub const fn memory_expansion_cost(size: u64) -> u64 {
    let words = size.div_ceil(32);
    words * words / 512 + 3 * words
}

/// Returns the gas cost of hashing `size` bytes with keccak256.
pub const fn keccak256_gas(size: u64) -> u64 {
    memory_expansion_cost(size) + 30 + 6 * size.div_ceil(32)
}

/// Returns the estimated L1 commit calldata size of the block.
pub fn block_l1_commit_calldata_size(block: &L2Block) -> u64 {
    let payloads = block
        .transactions
        .iter()
        .filter(|tx| !tx.is_l1_message())
        .map(|tx| tx.payload.len() as u64 + TX_PAYLOAD_LENGTH_BYTES)
        .sum::<u64>();
    BLOCK_CONTEXT_BYTES + payloads
}

/// Returns the estimated L1 commit gas of the block.
pub fn block_l1_commit_gas(block: &L2Block) -> u64 {
    let mut total = 0;
    let mut num_l1_messages = 0;
    for tx in &block.transactions {
        if tx.is_l1_message() {
            num_l1_messages += 1;
            continue
        }
        let payload_length = tx.payload.len() as u64;
        total += CALLDATA_NON_ZERO_BYTE_GAS * payload_length;
        total += CALLDATA_NON_ZERO_BYTE_GAS * TX_PAYLOAD_LENGTH_BYTES;
        // l2 transaction hash.
        total += keccak256_gas(payload_length);
    }

    total += CALLDATA_NON_ZERO_BYTE_GAS * BLOCK_CONTEXT_BYTES;
    // cold read of the message in the L1 message queue, the call to the queue and the warm
    // address access.
    total += (COLD_SLOAD_GAS + 2 * WARM_ACCESS_GAS) * num_l1_messages;
    total
}

/// Returns the estimated L1 commit gas of a chunk made of the provided blocks.
///
/// The chunk cost is not the sum of its blocks costs: the chunk encoding and the chunk hash
/// depend on the whole block set.
pub fn chunk_l1_commit_gas<'a>(blocks: impl IntoIterator<Item = &'a L2Block>) -> u64 {
    let mut total = 0;
    let mut num_blocks = 0;
    let mut num_transactions = 0;
    for block in blocks {
        total += block_l1_commit_gas(block);
        num_blocks += 1;
        num_transactions += block.transactions.len() as u64;
    }

    // warm reads for each block.
    total += WARM_ACCESS_GAS * num_blocks;
    // number of blocks field of the chunk encoding.
    total += CALLDATA_NON_ZERO_BYTE_GAS;
    // block contexts of the chunk encoding.
    total += CALLDATA_NON_ZERO_BYTE_GAS * BLOCK_CONTEXT_BYTES * num_blocks;
    // chunk hash.
    total += keccak256_gas(HASHED_BLOCK_CONTEXT_BYTES * num_blocks + 32 * num_transactions);
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Bytes;
    use rollup_node_primitives::{L2Transaction, L1_MESSAGE_TX_TYPE};

    fn l2_transaction(len: usize) -> L2Transaction {
        L2Transaction::new(0x02, Bytes::from(vec![0xaa; len]))
    }

    fn l1_message() -> L2Transaction {
        L2Transaction::new(L1_MESSAGE_TX_TYPE, Bytes::from(vec![0x7e; 90]))
    }

    #[test]
    fn test_keccak256_gas() {
        assert_eq!(keccak256_gas(0), 30);
        assert_eq!(keccak256_gas(32), 39);
        assert_eq!(keccak256_gas(100), 66);
        // memory expansion becomes quadratic.
        assert_eq!(memory_expansion_cost(32 * 1024), 1024 * 1024 / 512 + 3 * 1024);
    }

    #[test]
    fn test_empty_block_estimations() {
        let block = L2Block::default();

        assert_eq!(block_l1_commit_calldata_size(&block), 60);
        assert_eq!(block_l1_commit_gas(&block), 960);
    }

    #[test]
    fn test_block_estimations_ignore_l1_message_payloads() {
        let block =
            L2Block { transactions: vec![l2_transaction(100), l1_message()], ..Default::default() };

        assert_eq!(block_l1_commit_calldata_size(&block), 60 + 104);
        assert_eq!(block_l1_commit_gas(&block), 1600 + 64 + 66 + 960 + 2300);
    }

    #[test]
    fn test_chunk_gas_is_not_sum_of_blocks() {
        let block = L2Block::default();

        // single block: block gas, warm read, block count byte, block context, chunk hash.
        assert_eq!(chunk_l1_commit_gas([&block]), 960 + 100 + 16 + 960 + 48);

        let two_blocks = chunk_l1_commit_gas([&block, &block]);
        let single = chunk_l1_commit_gas([&block]);
        assert_ne!(two_blocks, 2 * single);
        assert_eq!(two_blocks, 2 * 960 + 200 + 16 + 2 * 960 + keccak256_gas(116));
    }
}
