use pylon_eth::{
    filter::{LogFilterOptions, SubscriptionType},
    Address, BlockSpec, Bytes, PreEip1898BlockSpec, B256, B64, U256,
};
use serde::Serialize;

use crate::{CallRequest, TransactionRequest};

/// Methods for requests to a remote Ethereum node's `eth` namespace.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "method", content = "params")]
pub enum RequestMethod {
    /// `eth_accounts`
    #[serde(rename = "eth_accounts", with = "pylon_eth::serde::empty_params")]
    Accounts(()),
    /// `eth_blockNumber`
    #[serde(rename = "eth_blockNumber", with = "pylon_eth::serde::empty_params")]
    BlockNumber(()),
    /// `eth_call`
    #[serde(rename = "eth_call")]
    Call(
        CallRequest,
        #[serde(skip_serializing_if = "Option::is_none")] Option<BlockSpec>,
    ),
    /// `eth_coinbase`
    #[serde(rename = "eth_coinbase", with = "pylon_eth::serde::empty_params")]
    Coinbase(()),
    /// `eth_estimateGas`
    #[serde(rename = "eth_estimateGas")]
    EstimateGas(
        CallRequest,
        #[serde(skip_serializing_if = "Option::is_none")] Option<BlockSpec>,
    ),
    /// `eth_etherbase`. A node-local alias of `eth_coinbase`
    #[serde(rename = "eth_etherbase", with = "pylon_eth::serde::empty_params")]
    Etherbase(()),
    /// `eth_gasPrice`
    #[serde(rename = "eth_gasPrice", with = "pylon_eth::serde::empty_params")]
    GasPrice(()),
    /// `eth_getBalance`
    #[serde(rename = "eth_getBalance")]
    GetBalance(
        Address,
        #[serde(skip_serializing_if = "Option::is_none")] Option<BlockSpec>,
    ),
    /// `eth_getBlockByHash`
    #[serde(rename = "eth_getBlockByHash")]
    GetBlockByHash(
        /// hash of the block
        B256,
        /// whether to include full transaction objects
        bool,
    ),
    /// `eth_getBlockByNumber`
    #[serde(rename = "eth_getBlockByNumber")]
    GetBlockByNumber(
        /// block number or tag
        PreEip1898BlockSpec,
        /// whether to include full transaction objects
        bool,
    ),
    /// `eth_getBlockTransactionCountByHash`
    #[serde(
        rename = "eth_getBlockTransactionCountByHash",
        with = "pylon_eth::serde::sequence"
    )]
    GetBlockTransactionCountByHash(B256),
    /// `eth_getBlockTransactionCountByNumber`
    #[serde(
        rename = "eth_getBlockTransactionCountByNumber",
        with = "pylon_eth::serde::sequence"
    )]
    GetBlockTransactionCountByNumber(PreEip1898BlockSpec),
    /// `eth_getCode`
    #[serde(rename = "eth_getCode")]
    GetCode(
        Address,
        #[serde(skip_serializing_if = "Option::is_none")] Option<BlockSpec>,
    ),
    /// `eth_getLogs`
    #[serde(rename = "eth_getLogs", with = "pylon_eth::serde::sequence")]
    GetLogs(LogFilterOptions),
    /// `eth_getRawTransactionByBlockHashAndIndex`
    #[serde(rename = "eth_getRawTransactionByBlockHashAndIndex")]
    GetRawTransactionByBlockHashAndIndex(B256, #[serde(with = "alloy_serde::quantity")] u64),
    /// `eth_getRawTransactionByBlockNumberAndIndex`
    #[serde(rename = "eth_getRawTransactionByBlockNumberAndIndex")]
    GetRawTransactionByBlockNumberAndIndex(
        PreEip1898BlockSpec,
        #[serde(with = "alloy_serde::quantity")] u64,
    ),
    /// `eth_getRawTransactionByHash`
    #[serde(
        rename = "eth_getRawTransactionByHash",
        with = "pylon_eth::serde::sequence"
    )]
    GetRawTransactionByHash(B256),
    /// `eth_getStorageAt`
    #[serde(rename = "eth_getStorageAt")]
    GetStorageAt(
        Address,
        /// position in the storage
        U256,
        #[serde(skip_serializing_if = "Option::is_none")] Option<BlockSpec>,
    ),
    /// `eth_getTransactionByBlockHashAndIndex`
    #[serde(rename = "eth_getTransactionByBlockHashAndIndex")]
    GetTransactionByBlockHashAndIndex(B256, #[serde(with = "alloy_serde::quantity")] u64),
    /// `eth_getTransactionByBlockNumberAndIndex`
    #[serde(rename = "eth_getTransactionByBlockNumberAndIndex")]
    GetTransactionByBlockNumberAndIndex(
        PreEip1898BlockSpec,
        #[serde(with = "alloy_serde::quantity")] u64,
    ),
    /// `eth_getTransactionByHash`
    #[serde(
        rename = "eth_getTransactionByHash",
        with = "pylon_eth::serde::sequence"
    )]
    GetTransactionByHash(B256),
    /// `eth_getTransactionCount`
    #[serde(rename = "eth_getTransactionCount")]
    GetTransactionCount(
        Address,
        #[serde(skip_serializing_if = "Option::is_none")] Option<BlockSpec>,
    ),
    /// `eth_getTransactionReceipt`
    #[serde(
        rename = "eth_getTransactionReceipt",
        with = "pylon_eth::serde::sequence"
    )]
    GetTransactionReceipt(B256),
    /// `eth_getUncleByBlockHashAndIndex`
    #[serde(rename = "eth_getUncleByBlockHashAndIndex")]
    GetUncleByBlockHashAndIndex(B256, #[serde(with = "alloy_serde::quantity")] u64),
    /// `eth_getUncleByBlockNumberAndIndex`
    #[serde(rename = "eth_getUncleByBlockNumberAndIndex")]
    GetUncleByBlockNumberAndIndex(
        PreEip1898BlockSpec,
        #[serde(with = "alloy_serde::quantity")] u64,
    ),
    /// `eth_getUncleCountByBlockHash`
    #[serde(
        rename = "eth_getUncleCountByBlockHash",
        with = "pylon_eth::serde::sequence"
    )]
    GetUncleCountByBlockHash(B256),
    /// `eth_getUncleCountByBlockNumber`
    #[serde(
        rename = "eth_getUncleCountByBlockNumber",
        with = "pylon_eth::serde::sequence"
    )]
    GetUncleCountByBlockNumber(PreEip1898BlockSpec),
    /// `eth_getWork`
    #[serde(rename = "eth_getWork", with = "pylon_eth::serde::empty_params")]
    GetWork(()),
    /// `eth_hashrate`
    #[serde(rename = "eth_hashrate", with = "pylon_eth::serde::empty_params")]
    Hashrate(()),
    /// `eth_mining`
    #[serde(rename = "eth_mining", with = "pylon_eth::serde::empty_params")]
    Mining(()),
    /// `eth_newBlockFilter`
    #[serde(rename = "eth_newBlockFilter", with = "pylon_eth::serde::empty_params")]
    NewBlockFilter(()),
    /// `eth_newFilter`
    #[serde(rename = "eth_newFilter", with = "pylon_eth::serde::sequence")]
    NewFilter(LogFilterOptions),
    /// `eth_newPendingTransactionFilter`
    #[serde(
        rename = "eth_newPendingTransactionFilter",
        with = "pylon_eth::serde::empty_params"
    )]
    NewPendingTransactionFilter(()),
    /// `eth_pendingTransactions`
    #[serde(
        rename = "eth_pendingTransactions",
        with = "pylon_eth::serde::empty_params"
    )]
    PendingTransactions(()),
    /// `eth_protocolVersion`
    #[serde(rename = "eth_protocolVersion", with = "pylon_eth::serde::empty_params")]
    ProtocolVersion(()),
    /// `eth_resend`
    #[serde(rename = "eth_resend")]
    Resend(
        TransactionRequest,
        /// the new gas price
        U256,
        /// the new gas limit
        U256,
    ),
    /// `eth_sendRawTransaction`
    #[serde(rename = "eth_sendRawTransaction", with = "pylon_eth::serde::sequence")]
    SendRawTransaction(Bytes),
    /// `eth_sendTransaction`
    #[serde(rename = "eth_sendTransaction", with = "pylon_eth::serde::sequence")]
    SendTransaction(TransactionRequest),
    /// `eth_sign`
    #[serde(rename = "eth_sign")]
    Sign(Address, Bytes),
    /// `eth_signTransaction`
    #[serde(rename = "eth_signTransaction", with = "pylon_eth::serde::sequence")]
    SignTransaction(TransactionRequest),
    /// `eth_submitHashrate`
    #[serde(rename = "eth_submitHashrate")]
    SubmitHashrate(
        /// the measured hash rate
        #[serde(with = "alloy_serde::quantity")]
        u64,
        /// a node-unique identifier for the miner
        B256,
    ),
    /// `eth_submitWork`
    #[serde(rename = "eth_submitWork")]
    SubmitWork(
        /// the nonce found
        B64,
        /// the header's pow-hash
        B256,
        /// the mix digest
        B256,
    ),
    /// `eth_subscribe`
    #[serde(rename = "eth_subscribe")]
    Subscribe(
        SubscriptionType,
        #[serde(skip_serializing_if = "Option::is_none")] Option<LogFilterOptions>,
    ),
    /// `eth_syncing`
    #[serde(rename = "eth_syncing", with = "pylon_eth::serde::empty_params")]
    Syncing(()),
}

impl pylon_rpc_client::RpcMethod for RequestMethod {
    fn name(&self) -> &'static str {
        match self {
            RequestMethod::Accounts(_) => "eth_accounts",
            RequestMethod::BlockNumber(_) => "eth_blockNumber",
            RequestMethod::Call(_, _) => "eth_call",
            RequestMethod::Coinbase(_) => "eth_coinbase",
            RequestMethod::EstimateGas(_, _) => "eth_estimateGas",
            RequestMethod::Etherbase(_) => "eth_etherbase",
            RequestMethod::GasPrice(_) => "eth_gasPrice",
            RequestMethod::GetBalance(_, _) => "eth_getBalance",
            RequestMethod::GetBlockByHash(_, _) => "eth_getBlockByHash",
            RequestMethod::GetBlockByNumber(_, _) => "eth_getBlockByNumber",
            RequestMethod::GetBlockTransactionCountByHash(_) => {
                "eth_getBlockTransactionCountByHash"
            }
            RequestMethod::GetBlockTransactionCountByNumber(_) => {
                "eth_getBlockTransactionCountByNumber"
            }
            RequestMethod::GetCode(_, _) => "eth_getCode",
            RequestMethod::GetLogs(_) => "eth_getLogs",
            RequestMethod::GetRawTransactionByBlockHashAndIndex(_, _) => {
                "eth_getRawTransactionByBlockHashAndIndex"
            }
            RequestMethod::GetRawTransactionByBlockNumberAndIndex(_, _) => {
                "eth_getRawTransactionByBlockNumberAndIndex"
            }
            RequestMethod::GetRawTransactionByHash(_) => "eth_getRawTransactionByHash",
            RequestMethod::GetStorageAt(_, _, _) => "eth_getStorageAt",
            RequestMethod::GetTransactionByBlockHashAndIndex(_, _) => {
                "eth_getTransactionByBlockHashAndIndex"
            }
            RequestMethod::GetTransactionByBlockNumberAndIndex(_, _) => {
                "eth_getTransactionByBlockNumberAndIndex"
            }
            RequestMethod::GetTransactionByHash(_) => "eth_getTransactionByHash",
            RequestMethod::GetTransactionCount(_, _) => "eth_getTransactionCount",
            RequestMethod::GetTransactionReceipt(_) => "eth_getTransactionReceipt",
            RequestMethod::GetUncleByBlockHashAndIndex(_, _) => "eth_getUncleByBlockHashAndIndex",
            RequestMethod::GetUncleByBlockNumberAndIndex(_, _) => {
                "eth_getUncleByBlockNumberAndIndex"
            }
            RequestMethod::GetUncleCountByBlockHash(_) => "eth_getUncleCountByBlockHash",
            RequestMethod::GetUncleCountByBlockNumber(_) => "eth_getUncleCountByBlockNumber",
            RequestMethod::GetWork(_) => "eth_getWork",
            RequestMethod::Hashrate(_) => "eth_hashrate",
            RequestMethod::Mining(_) => "eth_mining",
            RequestMethod::NewBlockFilter(_) => "eth_newBlockFilter",
            RequestMethod::NewFilter(_) => "eth_newFilter",
            RequestMethod::NewPendingTransactionFilter(_) => "eth_newPendingTransactionFilter",
            RequestMethod::PendingTransactions(_) => "eth_pendingTransactions",
            RequestMethod::ProtocolVersion(_) => "eth_protocolVersion",
            RequestMethod::Resend(_, _, _) => "eth_resend",
            RequestMethod::SendRawTransaction(_) => "eth_sendRawTransaction",
            RequestMethod::SendTransaction(_) => "eth_sendTransaction",
            RequestMethod::Sign(_, _) => "eth_sign",
            RequestMethod::SignTransaction(_) => "eth_signTransaction",
            RequestMethod::SubmitHashrate(_, _) => "eth_submitHashrate",
            RequestMethod::SubmitWork(_, _, _) => "eth_submitWork",
            RequestMethod::Subscribe(_, _) => "eth_subscribe",
            RequestMethod::Syncing(_) => "eth_syncing",
        }
    }
}
