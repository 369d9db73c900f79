//! L2 block context implementation.

use crate::CodecError;

use alloy_primitives::{bytes::BufMut, U256};
use rollup_node_primitives::L2Block;

/// The block's context, as committed to L1 for every block of a chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockContext {
    /// The block number.
    pub number: u64,
    /// The block timestamp.
    pub timestamp: u64,
    /// The block base fee.
    pub base_fee: U256,
    /// The block gas limit.
    pub gas_limit: u64,
    /// The block's transaction count, including L1 messages.
    pub num_transactions: u16,
    /// The block's l1 message count.
    pub num_l1_messages: u16,
}

impl BlockContext {
    /// The length of the encoded block context.
    pub const BYTES_LENGTH: usize = 60;

    /// Returns the big endian encoding of the block context.
    pub fn to_be_bytes(&self) -> [u8; Self::BYTES_LENGTH] {
        let mut buf = [0u8; Self::BYTES_LENGTH];
        let mut slice = buf.as_mut_slice();
        slice.put_u64(self.number);
        slice.put_u64(self.timestamp);
        slice.put_slice(&self.base_fee.to_be_bytes::<32>());
        slice.put_u64(self.gas_limit);
        slice.put_u16(self.num_transactions);
        slice.put_u16(self.num_l1_messages);
        buf
    }
}

impl TryFrom<&L2Block> for BlockContext {
    type Error = CodecError;

    fn try_from(block: &L2Block) -> Result<Self, Self::Error> {
        let too_many = || CodecError::TooManyTransactions {
            number: block.number,
            count: block.transactions.len(),
        };
        Ok(Self {
            number: block.number,
            timestamp: block.timestamp,
            base_fee: U256::from(block.base_fee.unwrap_or_default()),
            gas_limit: block.gas_limit,
            num_transactions: block.transactions.len().try_into().map_err(|_| too_many())?,
            num_l1_messages: block.num_l1_messages().try_into().map_err(|_| too_many())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Bytes;
    use rollup_node_primitives::{L2Transaction, L1_MESSAGE_TX_TYPE};

    #[test]
    fn test_should_encode_block_context() {
        let block = L2Block {
            number: 0x0102,
            timestamp: 0x0304,
            base_fee: Some(0x05),
            gas_limit: 0x0607,
            transactions: vec![
                L2Transaction::new(L1_MESSAGE_TX_TYPE, Bytes::from_static(&[0x7e])),
                L2Transaction::new(0x02, Bytes::from_static(&[0x02])),
            ],
            ..Default::default()
        };
        let context = BlockContext::try_from(&block).unwrap();
        let bytes = context.to_be_bytes();

        assert_eq!(bytes[..8], 0x0102u64.to_be_bytes());
        assert_eq!(bytes[8..16], 0x0304u64.to_be_bytes());
        assert_eq!(bytes[16..48], U256::from(5).to_be_bytes::<32>());
        assert_eq!(bytes[48..56], 0x0607u64.to_be_bytes());
        assert_eq!(bytes[56..58], 2u16.to_be_bytes());
        assert_eq!(bytes[58..60], 1u16.to_be_bytes());
    }

    #[test]
    fn test_should_reject_oversized_block() {
        let block = L2Block {
            number: 7,
            transactions: vec![L2Transaction::default(); u16::MAX as usize + 1],
            ..Default::default()
        };

        assert!(matches!(
            BlockContext::try_from(&block),
            Err(CodecError::TooManyTransactions { number: 7, .. })
        ));
    }
}
