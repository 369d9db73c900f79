use crate::{BlockContext, CodecError};

use alloy_primitives::{bytes::BufMut, keccak256, B256};
use rollup_node_primitives::L2Block;

/// Computes the hash of the chunk made of the provided blocks.
///
/// The hash commits to the block contexts, without the trailing L1 message count, followed by the
/// L1 message hashes and L2 transaction hashes of each block.
pub fn compute_chunk_hash(blocks: &[L2Block]) -> Result<B256, CodecError> {
    if blocks.is_empty() {
        return Err(CodecError::EmptyChunk)
    }

    let tx_count = blocks.iter().map(|b| b.transactions.len()).sum::<usize>();
    let mut buf =
        Vec::with_capacity(blocks.len() * (BlockContext::BYTES_LENGTH - 2) + tx_count * 32);

    for block in blocks {
        let context = BlockContext::try_from(block)?.to_be_bytes();
        // we don't use the last 2 bytes.
        buf.put_slice(&context[..BlockContext::BYTES_LENGTH - 2]);
    }

    for block in blocks {
        let (l1_messages, l2_transactions): (Vec<_>, Vec<_>) =
            block.transactions.iter().partition(|tx| tx.is_l1_message());
        for tx in l1_messages.into_iter().chain(l2_transactions) {
            buf.put_slice(tx.hash().as_slice());
        }
    }

    Ok(keccak256(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Bytes;
    use rollup_node_primitives::{L2Transaction, L1_MESSAGE_TX_TYPE};

    #[test]
    fn test_should_reject_empty_chunk() {
        assert!(matches!(compute_chunk_hash(&[]), Err(CodecError::EmptyChunk)));
    }

    #[test]
    fn test_should_hash_l1_messages_first() {
        let l1_message = L2Transaction::new(L1_MESSAGE_TX_TYPE, Bytes::from_static(&[0x7e, 1]));
        let l2_transaction = L2Transaction::new(0x02, Bytes::from_static(&[0x02, 2]));
        let block = L2Block {
            number: 1,
            transactions: vec![l2_transaction.clone(), l1_message.clone()],
            ..Default::default()
        };

        let context = BlockContext::try_from(&block).unwrap().to_be_bytes();
        let mut expected = context[..58].to_vec();
        expected.extend_from_slice(l1_message.hash().as_slice());
        expected.extend_from_slice(l2_transaction.hash().as_slice());

        assert_eq!(compute_chunk_hash(&[block]).unwrap(), keccak256(expected));
    }

    #[test]
    fn test_hash_depends_on_every_block() {
        let first = L2Block { number: 1, timestamp: 10, ..Default::default() };
        let second = L2Block { number: 2, timestamp: 11, ..Default::default() };
        let other = L2Block { number: 2, timestamp: 12, ..Default::default() };

        assert_ne!(
            compute_chunk_hash(&[first.clone(), second]).unwrap(),
            compute_chunk_hash(&[first, other]).unwrap()
        );
    }
}
