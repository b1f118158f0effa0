use pylon_eth::{Address, Bloom, Bytes, B256, B64, U256};
use serde::{Deserialize, Serialize};

/// Block object returned by `eth_getBlockBy*` and the uncle lookups.
///
/// `TX` is either [`B256`] for transaction hashes or
/// [`crate::Transaction`] when full transaction objects were requested.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block<TX> {
    /// hash of the block. `None` when pending
    pub hash: Option<B256>,
    /// hash of the parent block
    pub parent_hash: B256,
    /// SHA3 of the uncles data in the block
    pub sha3_uncles: B256,
    /// the root of the final state trie of the block
    pub state_root: B256,
    /// the root of the transaction trie of the block
    pub transactions_root: B256,
    /// the root of the receipts trie of the block
    pub receipts_root: B256,
    /// the block number. `None` when pending
    #[serde(default, with = "alloy_serde::quantity::opt")]
    pub number: Option<u64>,
    /// the total gas used by all transactions in this block
    #[serde(with = "alloy_serde::quantity")]
    pub gas_used: u64,
    /// the maximum gas allowed in this block
    #[serde(with = "alloy_serde::quantity")]
    pub gas_limit: u64,
    /// the "extra data" field of this block
    pub extra_data: Bytes,
    /// the bloom filter for the logs of the block
    pub logs_bloom: Bloom,
    /// the unix timestamp for when the block was collated
    #[serde(with = "alloy_serde::quantity")]
    pub timestamp: u64,
    /// integer of the difficulty for this block
    pub difficulty: U256,
    /// integer of the total difficulty of the chain until this block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_difficulty: Option<U256>,
    /// array of uncle hashes
    #[serde(default)]
    pub uncles: Vec<B256>,
    /// array of transaction objects, or 32-byte transaction hashes, depending
    /// on how the block was requested
    #[serde(default)]
    pub transactions: Vec<TX>,
    /// the length of the RLP encoding of this block in bytes
    #[serde(with = "alloy_serde::quantity")]
    pub size: u64,
    /// mix hash. `None` when pending
    pub mix_hash: Option<B256>,
    /// hash of the generated proof-of-work. `None` when pending
    pub nonce: Option<B64>,
    /// base fee per gas. only present post-EIP-1559
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<U256>,
    /// the address of the beneficiary to whom the mining rewards were given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miner: Option<Address>,
}
