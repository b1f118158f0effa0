use pylon_eth::{log::Log, Address, Bloom, B256, U256};
use serde::{Deserialize, Serialize};

/// Transaction receipt, as returned by `eth_getTransactionReceipt`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// hash of the transaction
    pub transaction_hash: B256,
    /// index of the transaction within the block
    #[serde(with = "alloy_serde::quantity")]
    pub transaction_index: u64,
    /// hash of the block containing the transaction
    pub block_hash: Option<B256>,
    /// number of the block containing the transaction
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub block_number: Option<u64>,
    /// address of the sender
    pub from: Address,
    /// address of the receiver. null for contract creation transactions
    pub to: Option<Address>,
    /// total gas used by the block up to and including this transaction
    #[serde(with = "alloy_serde::quantity")]
    pub cumulative_gas_used: u64,
    /// gas used by this transaction alone
    #[serde(with = "alloy_serde::quantity")]
    pub gas_used: u64,
    /// the contract address created, if the transaction was a contract
    /// creation
    pub contract_address: Option<Address>,
    /// the logs generated by this transaction
    pub logs: Vec<Log>,
    /// the bloom filter for the logs of this transaction
    pub logs_bloom: Bloom,
    /// post-transaction state root. only reported by pre-Byzantium nodes
    #[serde(default, rename = "root", skip_serializing_if = "Option::is_none")]
    pub state_root: Option<B256>,
    /// execution status, `0x1` for success. only reported post-Byzantium
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "alloy_serde::quantity::opt"
    )]
    pub status: Option<u64>,
    /// the effective gas price paid, post-EIP-1559
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_gas_price: Option<U256>,
    /// the transaction type
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        with = "alloy_serde::quantity::opt"
    )]
    pub transaction_type: Option<u64>,
}

impl TransactionReceipt {
    /// Whether the transaction executed successfully, when the node reports
    /// an execution status.
    pub fn succeeded(&self) -> Option<bool> {
        self.status.map(|status| status == 1)
    }
}
