use serde::Serialize;

use crate::ContractCreationRequest;

/// Methods used by the private-transaction extension. Contract creation
/// rides on the base protocol's `eth_sendTransaction`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "method", content = "params")]
pub enum RequestMethod {
    /// `eth_sendTransaction`
    #[serde(rename = "eth_sendTransaction", with = "pylon_eth::serde::sequence")]
    SendTransaction(ContractCreationRequest),
}

impl pylon_rpc_client::RpcMethod for RequestMethod {
    fn name(&self) -> &'static str {
        match self {
            RequestMethod::SendTransaction(_) => "eth_sendTransaction",
        }
    }
}
