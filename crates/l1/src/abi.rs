//! Contract interfaces.

/// The calls to the L1 contracts.
pub mod calls;
