use crate::L1ProviderError;

use alloy_primitives::{Address, Bytes};
use alloy_provider::Provider;
use alloy_rpc_types_eth::{TransactionInput, TransactionRequest};
use alloy_sol_types::SolCall;

/// Provides read-only access to L1 contracts.
#[async_trait::async_trait]
pub trait ViewCallProvider: Sync + Send {
    /// Executes a read-only call with the provided input against the contract at `to`, at the
    /// latest block, and returns the raw output.
    async fn call_raw(&self, to: Address, input: Bytes) -> Result<Bytes, L1ProviderError>;

    /// Returns the code deployed at the provided address.
    async fn code_at(&self, address: Address) -> Result<Bytes, L1ProviderError>;
}

#[async_trait::async_trait]
impl<P: Provider> ViewCallProvider for P {
    async fn call_raw(&self, to: Address, input: Bytes) -> Result<Bytes, L1ProviderError> {
        let request = TransactionRequest::default().to(to).input(TransactionInput::new(input));
        Ok(self.call(request).await?)
    }

    async fn code_at(&self, address: Address) -> Result<Bytes, L1ProviderError> {
        Ok(self.get_code_at(address).await?)
    }
}

/// Calls the view function described by `C` on the contract at `address` and decodes the typed
/// return value.
///
/// An empty output is ambiguous: it is either a legitimate empty return or a call to an address
/// without code. In the latter case, the call fails with [`L1ProviderError::ContractMissing`].
pub async fn view_call<P, C>(
    provider: &P,
    address: Address,
    call: C,
) -> Result<C::Return, L1ProviderError>
where
    P: ViewCallProvider + ?Sized,
    C: SolCall + Send,
{
    let input = call.abi_encode();
    let output = provider.call_raw(address, input.into()).await?;

    if output.is_empty() {
        let code = provider.code_at(address).await?;
        if code.is_empty() {
            tracing::error!(target: "scroll::providers", %address, function = C::SIGNATURE, "No contract code at called address");
            return Err(L1ProviderError::ContractMissing(address))
        }
    }

    Ok(C::abi_decode_returns(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockViewCallProvider;

    use alloy_primitives::{address, b256, U256};
    use scroll_l1::abi::calls::L1ViewOracle::blockRangeHashCall;

    const ORACLE: Address = address!("0x5300000000000000000000000000000000000011");

    #[tokio::test]
    async fn test_view_call_decodes_output() -> eyre::Result<()> {
        let hash = b256!("0x1111111111111111111111111111111111111111111111111111111111111111");
        let provider = MockViewCallProvider::default().with_output(hash.to_vec().into());

        let call = blockRangeHashCall { from: U256::from(1), to: U256::from(2) };
        let decoded = view_call(&provider, ORACLE, call.clone()).await?;

        assert_eq!(decoded, hash);
        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (ORACLE, Bytes::from(call.abi_encode())));

        Ok(())
    }

    #[tokio::test]
    async fn test_view_call_detects_missing_contract() {
        let provider = MockViewCallProvider::default().with_output(Bytes::new());

        let call = blockRangeHashCall { from: U256::from(1), to: U256::from(2) };
        let err = view_call(&provider, ORACLE, call).await.unwrap_err();

        assert!(matches!(err, L1ProviderError::ContractMissing(address) if address == ORACLE));
    }

    #[tokio::test]
    async fn test_view_call_fails_decoding_empty_output_with_code() {
        let provider = MockViewCallProvider::default()
            .with_output(Bytes::new())
            .with_code(Bytes::from_static(&[0x60, 0x80]));

        let call = blockRangeHashCall { from: U256::from(1), to: U256::from(2) };
        let err = view_call(&provider, ORACLE, call).await.unwrap_err();

        assert!(matches!(err, L1ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn test_view_call_propagates_transport_error() {
        let provider = MockViewCallProvider::default().with_transport_error();

        let call = blockRangeHashCall { from: U256::from(1), to: U256::from(2) };
        let err = view_call(&provider, ORACLE, call).await.unwrap_err();

        assert!(matches!(err, L1ProviderError::Rpc(_)));
        assert!(provider.code_requests().is_empty());
    }
}
