use pylon_eth::{Address, BlockSpec};
use serde::Serialize;

/// Methods for requests to a remote node's `istanbul` namespace.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "method", content = "params")]
pub enum RequestMethod {
    /// `istanbul_getValidators`
    #[serde(
        rename = "istanbul_getValidators",
        with = "pylon_eth::serde::sequence"
    )]
    GetValidators(BlockSpec),
    /// `istanbul_propose`
    #[serde(rename = "istanbul_propose")]
    Propose(
        /// the authorization candidate
        Address,
        /// `true` to authorize, `false` to deauthorize
        bool,
    ),
}

impl pylon_rpc_client::RpcMethod for RequestMethod {
    fn name(&self) -> &'static str {
        match self {
            RequestMethod::GetValidators(_) => "istanbul_getValidators",
            RequestMethod::Propose(_, _) => "istanbul_propose",
        }
    }
}
