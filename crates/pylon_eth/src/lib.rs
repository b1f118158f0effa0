#![warn(missing_docs)]

//! Ethereum domain types shared by the pylon JSON-RPC clients.
//!
//! The numeric and fixed-width byte types are re-exported from
//! `alloy-primitives` so that every client crate agrees on the same
//! representation of addresses, hashes, and quantities.

mod block_spec;
/// Types for filter-based RPC methods and subscriptions
pub mod filter;
/// Ethereum log types
pub mod log;
pub mod serde;

pub use alloy_primitives::{
    address, b256, bytes, hex, Address, Bloom, Bytes, B256, B64, U256, U64,
};

pub use self::block_spec::{BlockSpec, BlockTag, Eip1898BlockSpec, PreEip1898BlockSpec};
