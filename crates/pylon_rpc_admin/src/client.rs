use std::sync::Arc;

use pylon_rpc_client::RpcClient;
pub use pylon_rpc_client::{header, HeaderMap, RpcClientError};

use crate::{
    node::{NodeInfo, PeerInfo},
    request_methods::RequestMethod,
};

/// A typed client for the `admin` JSON-RPC namespace of a remote node.
#[derive(Clone, Debug)]
pub struct AdminRpcClient {
    transport: Arc<RpcClient>,
}

impl AdminRpcClient {
    /// Creates a new instance on top of an existing transport handle.
    pub fn new(transport: Arc<RpcClient>) -> Self {
        Self { transport }
    }

    /// Creates a new instance with its own transport handle, given a remote
    /// node URL.
    pub fn dial(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, RpcClientError> {
        let transport = Arc::new(RpcClient::new(url, extra_headers)?);
        Ok(Self::new(transport))
    }

    /// Calls `admin_addPeer`, connecting the node to the given enode URL.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn add_peer(&self, node_url: String) -> Result<bool, RpcClientError> {
        self.transport.call(RequestMethod::AddPeer(node_url)).await
    }

    /// Calls `admin_removePeer`, disconnecting the node from a remote peer
    /// if the connection exists.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn remove_peer(&self, node_url: String) -> Result<bool, RpcClientError> {
        self.transport
            .call(RequestMethod::RemovePeer(node_url))
            .await
    }

    /// Calls `admin_peers` and returns the connected peers.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn peers(&self) -> Result<Vec<PeerInfo>, RpcClientError> {
        self.transport.call(RequestMethod::Peers(())).await
    }

    /// Calls `admin_nodeInfo` and returns the metadata known about the host
    /// node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn node_info(&self) -> Result<NodeInfo, RpcClientError> {
        self.transport.call(RequestMethod::NodeInfo(())).await
    }

    /// Calls `admin_datadir` and returns the data directory the node is
    /// using.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn datadir(&self) -> Result<String, RpcClientError> {
        self.transport.call(RequestMethod::Datadir(())).await
    }

    /// Calls `admin_importChain`, importing a blockchain from a file local
    /// to the node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn import_chain(&self, file: String) -> Result<bool, RpcClientError> {
        self.transport.call(RequestMethod::ImportChain(file)).await
    }

    /// Calls `admin_exportChain`, exporting the current blockchain into a
    /// file local to the node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn export_chain(&self, file: String) -> Result<bool, RpcClientError> {
        self.transport.call(RequestMethod::ExportChain(file)).await
    }

    /// Calls `admin_startRPC`, starting the HTTP RPC server. Arguments left
    /// as `None` keep the node's defaults.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn start_rpc(
        &self,
        host: Option<String>,
        port: Option<u16>,
        cors: Option<String>,
        apis: Option<String>,
    ) -> Result<bool, RpcClientError> {
        self.transport
            .call(RequestMethod::StartRpc(host, port, cors, apis))
            .await
    }

    /// Calls `admin_stopRPC`, terminating an already running HTTP RPC
    /// server.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn stop_rpc(&self) -> Result<bool, RpcClientError> {
        self.transport.call(RequestMethod::StopRpc(())).await
    }

    /// Calls `admin_startWS`, starting the WebSocket RPC server. Arguments
    /// left as `None` keep the node's defaults.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn start_ws(
        &self,
        host: Option<String>,
        port: Option<u16>,
        allowed_origins: Option<String>,
        apis: Option<String>,
    ) -> Result<bool, RpcClientError> {
        self.transport
            .call(RequestMethod::StartWs(host, port, allowed_origins, apis))
            .await
    }

    /// Calls `admin_stopWS`, terminating an already running WebSocket RPC
    /// server.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn stop_ws(&self) -> Result<bool, RpcClientError> {
        self.transport.call(RequestMethod::StopWs(())).await
    }
}

/// A typed client for the `miner` start/stop toggles of a remote node.
#[derive(Clone, Debug)]
pub struct MinerRpcClient {
    transport: Arc<RpcClient>,
}

impl MinerRpcClient {
    /// Creates a new instance on top of an existing transport handle.
    pub fn new(transport: Arc<RpcClient>) -> Self {
        Self { transport }
    }

    /// Calls `miner_start`. When `threads` is `None` the node picks its own
    /// parallelism.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn start(&self, threads: Option<u64>) -> Result<(), RpcClientError> {
        let _: Option<serde_json::Value> = self
            .transport
            .call(RequestMethod::MinerStart(threads))
            .await?;
        Ok(())
    }

    /// Calls `miner_stop`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn stop(&self) -> Result<(), RpcClientError> {
        let _: Option<serde_json::Value> =
            self.transport.call(RequestMethod::MinerStop(())).await?;
        Ok(())
    }
}
