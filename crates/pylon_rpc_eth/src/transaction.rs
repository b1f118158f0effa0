use pylon_eth::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// RPC transaction
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// hash of the transaction
    pub hash: B256,
    /// the number of transactions made by the sender prior to this one
    #[serde(with = "alloy_serde::quantity")]
    pub nonce: u64,
    /// hash of the block where this transaction was in. null when pending
    pub block_hash: Option<B256>,
    /// block number where this transaction was in. null when pending
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub block_number: Option<u64>,
    /// integer of the transaction's index position in the block. null when
    /// pending
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub transaction_index: Option<u64>,
    /// address of the sender
    pub from: Address,
    /// address of the receiver. null when it is a contract creation
    /// transaction
    pub to: Option<Address>,
    /// value transferred in wei
    pub value: U256,
    /// gas price provided by the sender in wei
    pub gas_price: U256,
    /// gas provided by the sender
    pub gas: U256,
    /// the data sent along with the transaction
    pub input: Bytes,
    /// ECDSA recovery id
    #[serde(with = "alloy_serde::quantity")]
    pub v: u64,
    /// ECDSA signature r
    pub r: U256,
    /// ECDSA signature s
    pub s: U256,
    /// chain ID
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "alloy_serde::quantity::opt"
    )]
    pub chain_id: Option<u64>,
    /// integer of the transaction type, 0x0 for legacy transactions, 0x1 for
    /// access list types, 0x2 for dynamic fees
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        with = "alloy_serde::quantity::opt"
    )]
    pub transaction_type: Option<u64>,
    /// max fee per gas. only present for dynamic-fee transactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    /// max priority fee per gas. only present for dynamic-fee transactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
}

impl Transaction {
    /// Whether the transaction is a legacy transaction.
    pub fn is_legacy(&self) -> bool {
        matches!(self.transaction_type, None | Some(0)) && matches!(self.v, 27 | 28)
    }
}

/// An RLP-encoded signed transaction, as returned by `eth_signTransaction`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// the RLP-encoded signed transaction
    pub raw: Bytes,
    /// the decoded transaction
    pub tx: Transaction,
}
