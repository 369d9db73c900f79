use crate::RowConsumption;

use alloy_primitives::{keccak256, Bytes, B256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The EIP-2718 type byte of an L1 message transaction.
pub const L1_MESSAGE_TX_TYPE: u8 = 0x7e;

/// Information about a block.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct BlockInfo {
    /// The block number.
    pub number: u64,
    /// The block hash.
    pub hash: B256,
}

impl BlockInfo {
    /// Returns a new instance of [`BlockInfo`].
    pub const fn new(number: u64, hash: B256) -> Self {
        Self { number, hash }
    }
}

impl fmt::Display for BlockInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockInfo {{ number: {}, hash: {} }}", self.number, self.hash)
    }
}

/// A transaction included in an L2 block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct L2Transaction {
    /// The EIP-2718 transaction type.
    pub tx_type: u8,
    /// The EIP-2718 encoded transaction.
    pub payload: Bytes,
}

impl L2Transaction {
    /// Returns a new instance of an [`L2Transaction`].
    pub const fn new(tx_type: u8, payload: Bytes) -> Self {
        Self { tx_type, payload }
    }

    /// Returns true if the transaction is an L1 message.
    pub const fn is_l1_message(&self) -> bool {
        self.tx_type == L1_MESSAGE_TX_TYPE
    }

    /// Returns the hash of the transaction.
    pub fn hash(&self) -> B256 {
        keccak256(&self.payload)
    }
}

/// An executed L2 block, as handed over by the execution pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct L2Block {
    /// The block number.
    pub number: u64,
    /// The block hash.
    pub hash: B256,
    /// The parent block hash.
    pub parent_hash: B256,
    /// The block timestamp in seconds.
    pub timestamp: u64,
    /// The gas used by the block.
    pub gas_used: u64,
    /// The block gas limit.
    pub gas_limit: u64,
    /// The block base fee, if any.
    pub base_fee: Option<u64>,
    /// The transactions of the block.
    pub transactions: Vec<L2Transaction>,
    /// The per sub-circuit row consumption of the block. A missing value is treated as malformed
    /// input by the chunk proposer.
    pub row_consumption: Option<RowConsumption>,
    /// The height of the last L1 block applied at this block.
    pub last_applied_l1_block: u64,
}

impl L2Block {
    /// Returns the [`BlockInfo`] for the block.
    pub const fn block_info(&self) -> BlockInfo {
        BlockInfo { number: self.number, hash: self.hash }
    }

    /// Returns the number of L1 messages included in the block.
    pub fn num_l1_messages(&self) -> usize {
        self.transactions.iter().filter(|tx| tx.is_l1_message()).count()
    }

    /// Returns the number of L2 transactions included in the block, excluding L1 messages.
    pub fn num_l2_transactions(&self) -> usize {
        self.transactions.len() - self.num_l1_messages()
    }
}
