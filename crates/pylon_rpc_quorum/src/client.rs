use std::sync::Arc;

use pylon_eth::{Address, Bytes, U256};
use pylon_rpc_client::RpcClient;
pub use pylon_rpc_client::{header, HeaderMap, RpcClientError};

use crate::{contract::ContractCreationRequest, request_methods::RequestMethod};

/// A typed client for the private-transaction extension of a remote node.
#[derive(Clone, Debug)]
pub struct QuorumRpcClient {
    transport: Arc<RpcClient>,
}

impl QuorumRpcClient {
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

    async fn send_creation(
        &self,
        request: ContractCreationRequest,
    ) -> Result<String, RpcClientError> {
        let raw: Bytes = self
            .transport
            .call(RequestMethod::SendTransaction(request))
            .await?;
        Ok(raw.to_string())
    }

    /// Creates a contract with the given parameters and returns the
    /// transaction identifier extracted from the raw hex response.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn create_contract(
        &self,
        from: Address,
        bytecode: Bytes,
        gas: U256,
    ) -> Result<String, RpcClientError> {
        self.send_creation(ContractCreationRequest {
            from,
            gas,
            data: bytecode,
            private_for: None,
        })
        .await
    }

    /// Creates a confidential contract whose payload is distributed only to
    /// the given recipients, passed on verbatim and in order.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn create_private_contract(
        &self,
        from: Address,
        bytecode: Bytes,
        gas: U256,
        private_for: Vec<String>,
    ) -> Result<String, RpcClientError> {
        self.send_creation(ContractCreationRequest {
            from,
            gas,
            data: bytecode,
            private_for: Some(private_for),
        })
        .await
    }
}
