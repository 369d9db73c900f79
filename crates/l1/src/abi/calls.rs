use alloy_sol_types::sol;

sol! {
    /// The L1 view oracle exposes commitments to ranges of L1 block hashes.
    #[derive(Debug)]
    interface L1ViewOracle {
        /// Returns the hash committing to the hashes of the L1 blocks in the `[from, to]` range.
        function blockRangeHash(uint256 from, uint256 to) external view returns (bytes32 hash);
    }
}

#[cfg(test)]
mod tests {
    use super::L1ViewOracle::blockRangeHashCall;

    use alloy_primitives::{b256, keccak256, U256};
    use alloy_sol_types::SolCall;

    #[test]
    fn test_block_range_hash_call_encoding() {
        let call = blockRangeHashCall { from: U256::from(101), to: U256::from(102) };
        let input = call.abi_encode();

        assert_eq!(input.len(), 4 + 2 * 32);
        assert_eq!(input[..4], keccak256("blockRangeHash(uint256,uint256)")[..4]);
        assert_eq!(input[4..36], U256::from(101).to_be_bytes::<32>());
        assert_eq!(input[36..], U256::from(102).to_be_bytes::<32>());
    }

    #[test]
    fn test_block_range_hash_return_decoding() {
        let hash = b256!("0x7c9d7f5e7a3b3c4e0a5b1f0e9d8c7b6a5f4e3d2c1b0a99887766554433221100");

        let decoded = blockRangeHashCall::abi_decode_returns(hash.as_slice()).unwrap();
        assert_eq!(decoded, hash);

        assert!(blockRangeHashCall::abi_decode_returns(&hash[..31]).is_err());
    }
}
