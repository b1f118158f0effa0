use pylon_eth::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Input to `eth_sendTransaction`, `eth_signTransaction`, and `eth_resend`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// from address
    pub from: Address,
    /// to address. absent for contract creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
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
    /// value of the transaction in wei
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// any additional data sent
    #[serde(alias = "input", skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
    /// transaction nonce
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "alloy_serde::quantity::opt"
    )]
    pub nonce: Option<u64>,
}
