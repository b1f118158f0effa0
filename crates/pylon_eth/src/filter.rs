use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::BlockSpec;

/// Either a single value or a list of values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMore<T> {
    /// one value
    One(T),
    /// a list of values
    Many(Vec<T>),
}

/// Criteria for filter creation and `eth_getLogs` queries.
///
/// A block range and a block hash are mutually exclusive; the node rejects
/// requests that set both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilterOptions {
    /// beginning of the block range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockSpec>,
    /// end of the block range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockSpec>,
    /// a single block, by hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<B256>,
    /// the contract addresses to match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<OneOrMore<Address>>,
    /// per-position topic matchers; `None` matches any topic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Option<OneOrMore<B256>>>>,
}

/// The event classes a subscription can be created for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionType {
    /// new log events matching a filter
    #[serde(rename = "logs")]
    Logs,
    /// hashes of transactions entering the pending pool
    #[serde(rename = "newPendingTransactions")]
    NewPendingTransactions,
    /// headers of newly appended blocks
    #[serde(rename = "newHeads")]
    NewHeads,
}
