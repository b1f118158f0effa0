#![warn(missing_docs)]

//! Typed client for the `admin` JSON-RPC namespace, plus the `miner`
//! start/stop toggles.
//!
//! Every operation here mutates or inspects node-local state (peer table,
//! served RPC endpoints, chain import/export); correctness of the remote
//! mutation is the node's responsibility.

/// The typed `admin` and `miner` clients
pub mod client;
/// Peer and node metadata types
pub mod node;
mod request_methods;

pub use self::{
    client::{AdminRpcClient, MinerRpcClient},
    node::{NodeInfo, NodePorts, PeerInfo, PeerNetworkInfo},
    request_methods::RequestMethod,
};
