use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// A log entry, as returned by `eth_getLogs` and carried in transaction
/// receipts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// address from which this log originated
    pub address: Address,
    /// array of 0 to 4 32-byte topics
    pub topics: Vec<B256>,
    /// non-indexed arguments of the log
    pub data: Bytes,
    /// hash of the block containing the log. `None` when pending
    pub block_hash: Option<B256>,
    /// number of the block containing the log. `None` when pending
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub block_number: Option<u64>,
    /// hash of the transaction that created the log. `None` when pending
    pub transaction_hash: Option<B256>,
    /// index of the transaction within the block. `None` when pending
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub transaction_index: Option<u64>,
    /// index of the log within the block. `None` when pending
    #[serde(default)]
    pub log_index: Option<U256>,
    /// whether the log was removed by a chain reorganization
    #[serde(default)]
    pub removed: bool,
}
