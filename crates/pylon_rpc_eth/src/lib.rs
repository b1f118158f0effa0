#![warn(missing_docs)]

//! Typed client for the `eth` JSON-RPC namespace.

/// Types for Ethereum JSON-RPC blocks
pub mod block;
/// Input type for `eth_call` and `eth_estimateGas`
mod call_request;
/// The typed `eth` namespace client
pub mod client;
/// Types for transaction receipts
pub mod receipt;
mod request_methods;
/// Types for the node synchronization status
pub mod sync;
mod transaction;
/// Input type for `eth_sendTransaction` and related methods
mod transaction_request;

pub use self::{
    call_request::CallRequest,
    request_methods::RequestMethod,
    transaction::{SignedTransaction, Transaction},
    transaction_request::TransactionRequest,
};
