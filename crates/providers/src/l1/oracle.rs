use crate::{view_call, L1ProviderError, ViewCallProvider};

use alloy_primitives::{Address, B256, U256};
use scroll_l1::abi::calls::L1ViewOracle::blockRangeHashCall;

/// An instance of the trait resolves the hash committing to a range of L1 block hashes.
#[async_trait::async_trait]
#[auto_impl::auto_impl(&, Arc)]
pub trait L1BlockRangeHashProvider: Sync + Send {
    /// Returns the hash committing to the hashes of the L1 blocks in the `[from, to]` range.
    async fn l1_block_range_hash(&self, from: u64, to: u64) -> Result<B256, L1ProviderError>;
}

/// Client of the L1 view oracle contract.
///
/// The client holds no mutable state and can be shared between tasks.
#[derive(Debug, Clone)]
pub struct L1BlockRangeOracle<P> {
    /// The provider used to call the oracle.
    provider: P,
    /// The address of the oracle contract.
    address: Address,
}

impl<P> L1BlockRangeOracle<P> {
    /// Returns a new [`L1BlockRangeOracle`] for the oracle deployed at `address`.
    ///
    /// Errors if the address is the zero address.
    pub fn new(provider: P, address: Address) -> Result<Self, L1ProviderError> {
        if address.is_zero() {
            return Err(L1ProviderError::ZeroOracleAddress)
        }
        Ok(Self { provider, address })
    }

    /// Returns the address of the oracle contract.
    pub const fn address(&self) -> Address {
        self.address
    }
}

#[async_trait::async_trait]
impl<P: ViewCallProvider> L1BlockRangeHashProvider for L1BlockRangeOracle<P> {
    async fn l1_block_range_hash(&self, from: u64, to: u64) -> Result<B256, L1ProviderError> {
        tracing::trace!(target: "scroll::providers", from, to, oracle = %self.address, "Resolving L1 block range hash");
        let call = blockRangeHashCall { from: U256::from(from), to: U256::from(to) };
        view_call(&self.provider, self.address, call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockViewCallProvider;

    use alloy_primitives::{address, b256, Bytes};
    use alloy_sol_types::SolCall;

    #[test]
    fn test_should_reject_zero_oracle_address() {
        let res = L1BlockRangeOracle::new(MockViewCallProvider::default(), Address::ZERO);
        assert!(matches!(res, Err(L1ProviderError::ZeroOracleAddress)));
    }

    #[tokio::test]
    async fn test_should_resolve_range_hash() -> eyre::Result<()> {
        let oracle_address = address!("0x5300000000000000000000000000000000000011");
        let hash = b256!("0xabababababababababababababababababababababababababababababababab");
        let provider = MockViewCallProvider::default().with_output(hash.to_vec().into());
        let oracle = L1BlockRangeOracle::new(provider, oracle_address)?;

        assert_eq!(oracle.l1_block_range_hash(101, 102).await?, hash);

        let expected = blockRangeHashCall { from: U256::from(101), to: U256::from(102) };
        assert_eq!(
            oracle.provider.calls(),
            vec![(oracle_address, Bytes::from(expected.abi_encode()))]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_should_report_missing_oracle() -> eyre::Result<()> {
        let oracle_address = address!("0x5300000000000000000000000000000000000011");
        let oracle = L1BlockRangeOracle::new(
            MockViewCallProvider::default().with_output(Bytes::new()),
            oracle_address,
        )?;

        let err = oracle.l1_block_range_hash(0, 10).await.unwrap_err();
        assert!(matches!(err, L1ProviderError::ContractMissing(address) if address == oracle_address));
        assert_eq!(oracle.provider.code_requests(), vec![oracle_address]);

        Ok(())
    }
}
