use std::sync::Arc;

use pylon_eth::{Address, BlockSpec};
use pylon_rpc_client::RpcClient;
pub use pylon_rpc_client::{header, HeaderMap, RpcClientError};

use crate::request_methods::RequestMethod;

/// Specialized error types
#[derive(Debug, thiserror::Error)]
pub enum IstanbulClientError {
    /// The queried validator set is empty, or the node rejected the proposed
    /// candidate
    #[error("validator not found")]
    NotFound,

    /// A transport or decoding failure, passed through unchanged
    #[error(transparent)]
    Rpc(#[from] RpcClientError),
}

/// A typed client for the `istanbul` JSON-RPC namespace of a remote node.
#[derive(Clone, Debug)]
pub struct IstanbulRpcClient {
    transport: Arc<RpcClient>,
}

impl IstanbulRpcClient {
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

    /// Calls `istanbul_propose`, injecting an authorization candidate that
    /// the validator will attempt to push through. `auth` selects between
    /// proposing (`true`) and unproposing (`false`) the address.
    ///
    /// A node-side error is reported as [`IstanbulClientError::NotFound`];
    /// transport and decoding failures pass through unchanged.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn propose_validator(
        &self,
        address: Address,
        auth: bool,
    ) -> Result<(), IstanbulClientError> {
        let result: Result<Option<serde_json::Value>, RpcClientError> = self
            .transport
            .call(RequestMethod::Propose(address, auth))
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(RpcClientError::JsonRpcError { .. }) => Err(IstanbulClientError::NotFound),
            Err(error) => Err(error.into()),
        }
    }

    /// Calls `istanbul_getValidators` and returns the validators authorized
    /// at the given block, or at the latest block when `None`.
    ///
    /// The returned list is sorted by the canonical text encoding of each
    /// address, so the ordering is deterministic and independent of the
    /// node's internal storage order. An empty validator set is reported as
    /// [`IstanbulClientError::NotFound`].
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_validators(
        &self,
        block_number: Option<u64>,
    ) -> Result<Vec<Address>, IstanbulClientError> {
        let block = block_number.map_or_else(BlockSpec::latest, BlockSpec::Number);

        let validators: Option<Vec<Address>> = self
            .transport
            .call(RequestMethod::GetValidators(block))
            .await?;

        let mut validators = validators.unwrap_or_default();
        if validators.is_empty() {
            return Err(IstanbulClientError::NotFound);
        }

        validators.sort_by(|a, b| a.to_string().cmp(&b.to_string()));

        Ok(validators)
    }
}
