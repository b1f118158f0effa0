#![warn(missing_docs)]

//! Typed client for the `istanbul` consensus JSON-RPC namespace.
//!
//! Nodes running a BFT consensus engine expose validator management on top
//! of the base protocol: proposing and unproposing authorization candidates,
//! and querying the validator set at a block.

/// The typed `istanbul` namespace client
pub mod client;
mod request_methods;

pub use self::{
    client::{IstanbulClientError, IstanbulRpcClient},
    request_methods::RequestMethod,
};
