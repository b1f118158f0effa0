use pylon_eth::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// For specifying input to methods requiring a transaction object, like
/// `eth_call` and `eth_estimateGas`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// the address from which the call should be made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// the address the call is directed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// gas
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "alloy_serde::quantity::opt"
    )]
    pub gas: Option<u64>,
    /// gas price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// transferred value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// call data
    #[serde(alias = "input", skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
}
