pub(crate) mod oracle;
pub(crate) mod view;

use alloy_primitives::Address;
use alloy_transport::{RpcError, TransportErrorKind};

/// An error occurring at an L1 provider.
#[derive(Debug, thiserror::Error)]
pub enum L1ProviderError {
    /// L1 RPC error.
    #[error(transparent)]
    Rpc(#[from] RpcError<TransportErrorKind>),
    /// The contract call returned data that could not be decoded.
    #[error("failed to decode contract call output: {0}")]
    Decode(#[from] alloy_sol_types::Error),
    /// No code is deployed at the called contract address.
    #[error("no contract deployed at address {0}")]
    ContractMissing(Address),
    /// The provided oracle address is the zero address.
    #[error("must pass a non-zero L1 view oracle address")]
    ZeroOracleAddress,
}
