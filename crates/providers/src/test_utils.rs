use crate::{L1BlockRangeHashProvider, L1ProviderError, ViewCallProvider};

use alloy_primitives::{keccak256, Address, Bytes, B256};
use alloy_transport::TransportErrorKind;
use parking_lot::Mutex;
use std::collections::HashMap;

/// A mock implementation of the [`ViewCallProvider`] trait, returning the same output for every
/// call and recording the requests.
#[derive(Debug, Default)]
pub struct MockViewCallProvider {
    output: Bytes,
    code: Bytes,
    transport_error: bool,
    calls: Mutex<Vec<(Address, Bytes)>>,
    code_requests: Mutex<Vec<Address>>,
}

impl MockViewCallProvider {
    /// Sets the output returned by calls.
    pub fn with_output(mut self, output: Bytes) -> Self {
        self.output = output;
        self
    }

    /// Sets the code returned for any address.
    pub fn with_code(mut self, code: Bytes) -> Self {
        self.code = code;
        self
    }

    /// Fails every call with a transport error.
    pub fn with_transport_error(mut self) -> Self {
        self.transport_error = true;
        self
    }

    /// Returns the recorded calls.
    pub fn calls(&self) -> Vec<(Address, Bytes)> {
        self.calls.lock().clone()
    }

    /// Returns the recorded code requests.
    pub fn code_requests(&self) -> Vec<Address> {
        self.code_requests.lock().clone()
    }
}

#[async_trait::async_trait]
impl ViewCallProvider for MockViewCallProvider {
    async fn call_raw(&self, to: Address, input: Bytes) -> Result<Bytes, L1ProviderError> {
        if self.transport_error {
            return Err(TransportErrorKind::backend_gone().into())
        }
        self.calls.lock().push((to, input));
        Ok(self.output.clone())
    }

    async fn code_at(&self, address: Address) -> Result<Bytes, L1ProviderError> {
        self.code_requests.lock().push(address);
        Ok(self.code.clone())
    }
}

/// A mock implementation of the [`L1BlockRangeHashProvider`] trait.
///
/// Ranges without a configured hash resolve to the keccak256 hash of the range bounds.
#[derive(Debug, Default)]
pub struct MockL1BlockRangeHashProvider {
    hashes: Mutex<HashMap<(u64, u64), B256>>,
    requests: Mutex<Vec<(u64, u64)>>,
    unavailable: Mutex<bool>,
}

impl MockL1BlockRangeHashProvider {
    /// Sets the hash returned for the `[from, to]` range.
    pub fn set_hash(&self, from: u64, to: u64, hash: B256) {
        self.hashes.lock().insert((from, to), hash);
    }

    /// Makes the provider fail with a transport error if `unavailable` is true.
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock() = unavailable;
    }

    /// Returns the requested ranges.
    pub fn requests(&self) -> Vec<(u64, u64)> {
        self.requests.lock().clone()
    }

    /// Returns the default hash for the `[from, to]` range.
    pub fn default_hash(from: u64, to: u64) -> B256 {
        keccak256([from.to_be_bytes(), to.to_be_bytes()].concat())
    }
}

#[async_trait::async_trait]
impl L1BlockRangeHashProvider for MockL1BlockRangeHashProvider {
    async fn l1_block_range_hash(&self, from: u64, to: u64) -> Result<B256, L1ProviderError> {
        if *self.unavailable.lock() {
            return Err(TransportErrorKind::backend_gone().into())
        }
        self.requests.lock().push((from, to));
        Ok(self
            .hashes
            .lock()
            .get(&(from, to))
            .copied()
            .unwrap_or_else(|| Self::default_hash(from, to)))
    }
}
