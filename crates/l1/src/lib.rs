//! A library containing the contract interfaces required to interact with L1.

pub mod abi;
