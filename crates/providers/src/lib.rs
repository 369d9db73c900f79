//! The crate exposes the L1 providers used by the chunk proposer.

pub use l1::{
    oracle::{L1BlockRangeHashProvider, L1BlockRangeOracle},
    view::{view_call, ViewCallProvider},
    L1ProviderError,
};
mod l1;

/// Test utilities for the providers.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
