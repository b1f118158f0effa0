use pylon_eth::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// The named-field record sent as the single argument of the contract
/// creation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCreationRequest {
    /// the creating account
    pub from: Address,
    /// the gas limit, hex-encoded on the wire
    pub gas: U256,
    /// the contract bytecode
    pub data: Bytes,
    /// recipients of a confidential contract, verbatim and
    /// order-preserving. Omitted entirely for public creations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_for: Option<Vec<String>>,
}
