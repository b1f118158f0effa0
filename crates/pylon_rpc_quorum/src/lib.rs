#![warn(missing_docs)]

//! Typed client for the private-transaction extension of
//! Ethereum-compatible nodes.
//!
//! Contract creation is a `eth_sendTransaction` variant; the confidential
//! flavor additionally names the recipients the payload is distributed to.

/// The typed private-transaction client
pub mod client;
mod contract;
mod request_methods;

pub use self::{
    client::QuorumRpcClient, contract::ContractCreationRequest, request_methods::RequestMethod,
};
