use serde::Serialize;

/// Methods for requests to a remote node's `admin` and `miner` namespaces.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "method", content = "params")]
pub enum RequestMethod {
    /// `admin_addPeer`
    #[serde(rename = "admin_addPeer", with = "pylon_eth::serde::sequence")]
    AddPeer(
        /// enode URL of the peer to connect to
        String,
    ),
    /// `admin_datadir`
    #[serde(rename = "admin_datadir", with = "pylon_eth::serde::empty_params")]
    Datadir(()),
    /// `admin_exportChain`
    #[serde(rename = "admin_exportChain", with = "pylon_eth::serde::sequence")]
    ExportChain(
        /// path of the file to export into, local to the node
        String,
    ),
    /// `admin_importChain`
    #[serde(rename = "admin_importChain", with = "pylon_eth::serde::sequence")]
    ImportChain(
        /// path of the file to import from, local to the node
        String,
    ),
    /// `admin_nodeInfo`
    #[serde(rename = "admin_nodeInfo", with = "pylon_eth::serde::empty_params")]
    NodeInfo(()),
    /// `admin_peers`
    #[serde(rename = "admin_peers", with = "pylon_eth::serde::empty_params")]
    Peers(()),
    /// `admin_removePeer`
    #[serde(rename = "admin_removePeer", with = "pylon_eth::serde::sequence")]
    RemovePeer(
        /// enode URL of the peer to disconnect from
        String,
    ),
    /// `admin_startRPC`. Absent arguments leave the node defaults in place
    #[serde(rename = "admin_startRPC")]
    StartRpc(
        Option<String>,
        Option<u16>,
        Option<String>,
        Option<String>,
    ),
    /// `admin_startWS`. Absent arguments leave the node defaults in place
    #[serde(rename = "admin_startWS")]
    StartWs(
        Option<String>,
        Option<u16>,
        Option<String>,
        Option<String>,
    ),
    /// `admin_stopRPC`
    #[serde(rename = "admin_stopRPC", with = "pylon_eth::serde::empty_params")]
    StopRpc(()),
    /// `admin_stopWS`
    #[serde(rename = "admin_stopWS", with = "pylon_eth::serde::empty_params")]
    StopWs(()),
    /// `miner_start`
    #[serde(
        rename = "miner_start",
        serialize_with = "pylon_eth::serde::optional_single_to_sequence"
    )]
    MinerStart(
        /// number of mining threads; the node picks when absent
        Option<u64>,
    ),
    /// `miner_stop`
    #[serde(rename = "miner_stop", with = "pylon_eth::serde::empty_params")]
    MinerStop(()),
}

impl pylon_rpc_client::RpcMethod for RequestMethod {
    fn name(&self) -> &'static str {
        match self {
            RequestMethod::AddPeer(_) => "admin_addPeer",
            RequestMethod::Datadir(_) => "admin_datadir",
            RequestMethod::ExportChain(_) => "admin_exportChain",
            RequestMethod::ImportChain(_) => "admin_importChain",
            RequestMethod::NodeInfo(_) => "admin_nodeInfo",
            RequestMethod::Peers(_) => "admin_peers",
            RequestMethod::RemovePeer(_) => "admin_removePeer",
            RequestMethod::StartRpc(_, _, _, _) => "admin_startRPC",
            RequestMethod::StartWs(_, _, _, _) => "admin_startWS",
            RequestMethod::StopRpc(_) => "admin_stopRPC",
            RequestMethod::StopWs(_) => "admin_stopWS",
            RequestMethod::MinerStart(_) => "miner_start",
            RequestMethod::MinerStop(_) => "miner_stop",
        }
    }
}
