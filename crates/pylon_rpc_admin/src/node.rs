use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata about one connected peer, as returned by `admin_peers`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerInfo {
    /// the enode URL of the peer, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enode: Option<String>,
    /// unique node identifier
    pub id: String,
    /// name of the node, including client type and version
    pub name: String,
    /// protocols advertised by this peer
    #[serde(default)]
    pub caps: Vec<String>,
    /// properties of the network connection
    pub network: PeerNetworkInfo,
    /// per-protocol metadata, kept untyped as its shape is
    /// protocol-specific
    #[serde(default)]
    pub protocols: HashMap<String, serde_json::Value>,
}

/// Connection-level properties of a peer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerNetworkInfo {
    /// local endpoint of the TCP connection
    pub local_address: String,
    /// remote endpoint of the TCP connection
    pub remote_address: String,
    /// whether the peer dialed us
    #[serde(default)]
    pub inbound: bool,
    /// whether the peer is a trusted peer
    #[serde(default)]
    pub trusted: bool,
    /// whether the peer is configured as a static peer
    #[serde(default, rename = "static")]
    pub static_node: bool,
}

/// Metadata about the host node, as returned by `admin_nodeInfo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    /// unique node identifier
    pub id: String,
    /// name of the node, including client type and version
    pub name: String,
    /// the enode URL under which the node is reachable
    pub enode: String,
    /// the Ethereum Node Record, when the node advertises one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enr: Option<String>,
    /// IP address of the node
    pub ip: String,
    /// the ports the node serves on
    pub ports: NodePorts,
    /// the listening address of the devp2p server
    pub listen_addr: String,
    /// per-protocol metadata, kept untyped as its shape is
    /// protocol-specific
    #[serde(default)]
    pub protocols: HashMap<String, serde_json::Value>,
}

/// The UDP and TCP ports of the host node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePorts {
    /// UDP discovery port
    pub discovery: u16,
    /// TCP listener port
    pub listener: u16,
}
