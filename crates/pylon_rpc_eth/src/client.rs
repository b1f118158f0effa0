use std::sync::Arc;

use pylon_eth::{
    filter::{LogFilterOptions, SubscriptionType},
    log::Log,
    Address, BlockSpec, Bytes, PreEip1898BlockSpec, B256, B64, U256, U64,
};
use pylon_rpc_client::RpcClient;
pub use pylon_rpc_client::{header, HeaderMap, RpcClientError};

use crate::{
    block::Block, receipt::TransactionReceipt, request_methods::RequestMethod, sync::SyncStatus,
    CallRequest, SignedTransaction, Transaction, TransactionRequest,
};

/// A typed client for the `eth` JSON-RPC namespace of a remote node.
///
/// Each method performs exactly one remote call through the shared transport
/// handle and decodes the response into its declared result type.
#[derive(Clone, Debug)]
pub struct EthRpcClient {
    transport: Arc<RpcClient>,
}

impl EthRpcClient {
    /// Creates a new instance on top of an existing transport handle.
    pub fn new(transport: Arc<RpcClient>) -> Self {
        Self { transport }
    }

    /// Creates a new instance with its own transport handle, given a remote
    /// node URL.
    pub fn dial(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, RpcClientError> {
        let transport = Arc::new(RpcClient::new(url, extra_headers)?);
        Ok(Self::new(transport))
    }

    /// Calls `eth_accounts` and returns the accounts managed by the node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn accounts(&self) -> Result<Vec<Address>, RpcClientError> {
        self.transport.call(RequestMethod::Accounts(())).await
    }

    /// Calls `eth_blockNumber` and returns the block number of the chain
    /// head.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn block_number(&self) -> Result<u64, RpcClientError> {
        let block_number: U64 = self.transport.call(RequestMethod::BlockNumber(())).await?;
        Ok(block_number.as_limbs()[0])
    }

    /// Calls `eth_call` and returns the return value of the executed
    /// contract call.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn call(
        &self,
        request: CallRequest,
        block: Option<BlockSpec>,
    ) -> Result<Bytes, RpcClientError> {
        self.transport.call(RequestMethod::Call(request, block)).await
    }

    /// Calls `eth_coinbase` and returns the address mining rewards are sent
    /// to.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn coinbase(&self) -> Result<Address, RpcClientError> {
        self.transport.call(RequestMethod::Coinbase(())).await
    }

    /// Calls `eth_estimateGas` and returns the gas estimate.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn estimate_gas(
        &self,
        request: CallRequest,
        block: Option<BlockSpec>,
    ) -> Result<U256, RpcClientError> {
        self.transport
            .call(RequestMethod::EstimateGas(request, block))
            .await
    }

    /// Calls `eth_etherbase`, the node-local alias of [`Self::coinbase`].
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn etherbase(&self) -> Result<Address, RpcClientError> {
        self.transport.call(RequestMethod::Etherbase(())).await
    }

    /// Calls `eth_gasPrice` and returns the node's gas price suggestion.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn gas_price(&self) -> Result<U256, RpcClientError> {
        self.transport.call(RequestMethod::GasPrice(())).await
    }

    /// Calls `eth_getBalance`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_balance(
        &self,
        address: Address,
        block: Option<BlockSpec>,
    ) -> Result<U256, RpcClientError> {
        self.transport
            .call(RequestMethod::GetBalance(address, block))
            .await
    }

    /// Calls `eth_getBlockByHash` and returns the block with transaction
    /// hashes.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_hash(
        &self,
        hash: B256,
    ) -> Result<Option<Block<B256>>, RpcClientError> {
        self.transport
            .call(RequestMethod::GetBlockByHash(hash, false))
            .await
    }

    /// Calls `eth_getBlockByHash` and returns the block with full
    /// transaction objects.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_hash_with_transaction_data(
        &self,
        hash: B256,
    ) -> Result<Option<Block<Transaction>>, RpcClientError> {
        self.transport
            .call(RequestMethod::GetBlockByHash(hash, true))
            .await
    }

    /// Calls `eth_getBlockByNumber` and returns the block with transaction
    /// hashes.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_number(
        &self,
        spec: PreEip1898BlockSpec,
    ) -> Result<Option<Block<B256>>, RpcClientError> {
        self.transport
            .call(RequestMethod::GetBlockByNumber(spec, false))
            .await
    }

    /// Calls `eth_getBlockByNumber` and returns the block with full
    /// transaction objects.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_number_with_transaction_data(
        &self,
        spec: PreEip1898BlockSpec,
    ) -> Result<Option<Block<Transaction>>, RpcClientError> {
        self.transport
            .call(RequestMethod::GetBlockByNumber(spec, true))
            .await
    }

    /// Calls `eth_getBlockTransactionCountByHash`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_transaction_count_by_hash(
        &self,
        hash: B256,
    ) -> Result<Option<u64>, RpcClientError> {
        let count: Option<U64> = self
            .transport
            .call(RequestMethod::GetBlockTransactionCountByHash(hash))
            .await?;
        Ok(count.map(|count| count.as_limbs()[0]))
    }

    /// Calls `eth_getBlockTransactionCountByNumber`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_transaction_count_by_number(
        &self,
        spec: PreEip1898BlockSpec,
    ) -> Result<Option<u64>, RpcClientError> {
        let count: Option<U64> = self
            .transport
            .call(RequestMethod::GetBlockTransactionCountByNumber(spec))
            .await?;
        Ok(count.map(|count| count.as_limbs()[0]))
    }

    /// Calls `eth_getCode`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_code(
        &self,
        address: Address,
        block: Option<BlockSpec>,
    ) -> Result<Bytes, RpcClientError> {
        self.transport
            .call(RequestMethod::GetCode(address, block))
            .await
    }

    /// Calls `eth_getLogs` with the given filter criteria.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_logs(&self, options: LogFilterOptions) -> Result<Vec<Log>, RpcClientError> {
        self.transport.call(RequestMethod::GetLogs(options)).await
    }

    /// Calls `eth_getRawTransactionByBlockHashAndIndex`. Returns empty bytes
    /// when no transaction exists at the given position.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_raw_transaction_by_block_hash_and_index(
        &self,
        block_hash: B256,
        index: u64,
    ) -> Result<Bytes, RpcClientError> {
        let raw: Option<Bytes> = self
            .transport
            .call(RequestMethod::GetRawTransactionByBlockHashAndIndex(
                block_hash, index,
            ))
            .await?;
        Ok(raw.unwrap_or_default())
    }

    /// Calls `eth_getRawTransactionByBlockNumberAndIndex`. Returns empty
    /// bytes when no transaction exists at the given position.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_raw_transaction_by_block_number_and_index(
        &self,
        spec: PreEip1898BlockSpec,
        index: u64,
    ) -> Result<Bytes, RpcClientError> {
        let raw: Option<Bytes> = self
            .transport
            .call(RequestMethod::GetRawTransactionByBlockNumberAndIndex(
                spec, index,
            ))
            .await?;
        Ok(raw.unwrap_or_default())
    }

    /// Calls `eth_getRawTransactionByHash`. Returns empty bytes when the
    /// transaction is unknown.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_raw_transaction_by_hash(&self, hash: B256) -> Result<Bytes, RpcClientError> {
        let raw: Option<Bytes> = self
            .transport
            .call(RequestMethod::GetRawTransactionByHash(hash))
            .await?;
        Ok(raw.unwrap_or_default())
    }

    /// Calls `eth_getStorageAt`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_storage_at(
        &self,
        address: Address,
        position: U256,
        block: Option<BlockSpec>,
    ) -> Result<Option<U256>, RpcClientError> {
        self.transport
            .call(RequestMethod::GetStorageAt(address, position, block))
            .await
    }

    /// Calls `eth_getTransactionByBlockHashAndIndex`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_by_block_hash_and_index(
        &self,
        block_hash: B256,
        index: u64,
    ) -> Result<Option<Transaction>, RpcClientError> {
        self.transport
            .call(RequestMethod::GetTransactionByBlockHashAndIndex(
                block_hash, index,
            ))
            .await
    }

    /// Calls `eth_getTransactionByBlockNumberAndIndex`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_by_block_number_and_index(
        &self,
        spec: PreEip1898BlockSpec,
        index: u64,
    ) -> Result<Option<Transaction>, RpcClientError> {
        self.transport
            .call(RequestMethod::GetTransactionByBlockNumberAndIndex(
                spec, index,
            ))
            .await
    }

    /// Calls `eth_getTransactionByHash`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_by_hash(
        &self,
        hash: B256,
    ) -> Result<Option<Transaction>, RpcClientError> {
        self.transport
            .call(RequestMethod::GetTransactionByHash(hash))
            .await
    }

    /// Calls `eth_getTransactionCount` and returns the number of
    /// transactions the given address has sent.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_count(
        &self,
        address: Address,
        block: Option<BlockSpec>,
    ) -> Result<u64, RpcClientError> {
        let count: U64 = self
            .transport
            .call(RequestMethod::GetTransactionCount(address, block))
            .await?;
        Ok(count.as_limbs()[0])
    }

    /// Calls `eth_getTransactionReceipt`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, RpcClientError> {
        self.transport
            .call(RequestMethod::GetTransactionReceipt(hash))
            .await
    }

    /// Calls `eth_getUncleByBlockHashAndIndex`. Uncle blocks carry no
    /// transactions.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_uncle_by_block_hash_and_index(
        &self,
        block_hash: B256,
        index: u64,
    ) -> Result<Option<Block<B256>>, RpcClientError> {
        self.transport
            .call(RequestMethod::GetUncleByBlockHashAndIndex(
                block_hash, index,
            ))
            .await
    }

    /// Calls `eth_getUncleByBlockNumberAndIndex`. Uncle blocks carry no
    /// transactions.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_uncle_by_block_number_and_index(
        &self,
        spec: PreEip1898BlockSpec,
        index: u64,
    ) -> Result<Option<Block<B256>>, RpcClientError> {
        self.transport
            .call(RequestMethod::GetUncleByBlockNumberAndIndex(spec, index))
            .await
    }

    /// Calls `eth_getUncleCountByBlockHash`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_uncle_count_by_block_hash(
        &self,
        block_hash: B256,
    ) -> Result<Option<u64>, RpcClientError> {
        let count: Option<U64> = self
            .transport
            .call(RequestMethod::GetUncleCountByBlockHash(block_hash))
            .await?;
        Ok(count.map(|count| count.as_limbs()[0]))
    }

    /// Calls `eth_getUncleCountByBlockNumber`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_uncle_count_by_block_number(
        &self,
        spec: PreEip1898BlockSpec,
    ) -> Result<Option<u64>, RpcClientError> {
        let count: Option<U64> = self
            .transport
            .call(RequestMethod::GetUncleCountByBlockNumber(spec))
            .await?;
        Ok(count.map(|count| count.as_limbs()[0]))
    }

    /// Calls `eth_getWork` and returns the current work package: the header
    /// pow-hash, the seed hash, and the boundary condition.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_work(&self) -> Result<[String; 3], RpcClientError> {
        self.transport.call(RequestMethod::GetWork(())).await
    }

    /// Calls `eth_hashrate` and returns the node's proof-of-work hash rate.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn hashrate(&self) -> Result<u64, RpcClientError> {
        let hashrate: U64 = self.transport.call(RequestMethod::Hashrate(())).await?;
        Ok(hashrate.as_limbs()[0])
    }

    /// Calls `eth_mining` and returns whether the node is currently mining.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn mining(&self) -> Result<bool, RpcClientError> {
        self.transport.call(RequestMethod::Mining(())).await
    }

    /// Calls `eth_newBlockFilter` and returns the filter id.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn new_block_filter(&self) -> Result<U256, RpcClientError> {
        self.transport.call(RequestMethod::NewBlockFilter(())).await
    }

    /// Calls `eth_newFilter` with the given log criteria and returns the
    /// filter id.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn new_filter(&self, options: LogFilterOptions) -> Result<U256, RpcClientError> {
        self.transport.call(RequestMethod::NewFilter(options)).await
    }

    /// Calls `eth_newPendingTransactionFilter` and returns the filter id.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn new_pending_transaction_filter(&self) -> Result<U256, RpcClientError> {
        self.transport
            .call(RequestMethod::NewPendingTransactionFilter(()))
            .await
    }

    /// Calls `eth_pendingTransactions` and returns the pool transactions
    /// signed by accounts the node manages.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn pending_transactions(&self) -> Result<Vec<Transaction>, RpcClientError> {
        self.transport
            .call(RequestMethod::PendingTransactions(()))
            .await
    }

    /// Calls `eth_protocolVersion`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn protocol_version(&self) -> Result<u64, RpcClientError> {
        let version: U64 = self
            .transport
            .call(RequestMethod::ProtocolVersion(()))
            .await?;
        Ok(version.as_limbs()[0])
    }

    /// Calls `eth_resend`: removes the given transaction from the pool and
    /// reinserts it with the new gas price and limit. Returns the new
    /// transaction hash.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn resend(
        &self,
        request: TransactionRequest,
        gas_price: U256,
        gas_limit: U256,
    ) -> Result<B256, RpcClientError> {
        self.transport
            .call(RequestMethod::Resend(request, gas_price, gas_limit))
            .await
    }

    /// Calls `eth_sendRawTransaction` and returns the transaction hash.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn send_raw_transaction(&self, raw: Bytes) -> Result<B256, RpcClientError> {
        self.transport
            .call(RequestMethod::SendRawTransaction(raw))
            .await
    }

    /// Calls `eth_sendTransaction` and returns the transaction hash.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn send_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<B256, RpcClientError> {
        self.transport
            .call(RequestMethod::SendTransaction(request))
            .await
    }

    /// Calls `eth_sign`. The account must be managed and unlocked by the
    /// node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn sign(&self, address: Address, data: Bytes) -> Result<Bytes, RpcClientError> {
        self.transport
            .call(RequestMethod::Sign(address, data))
            .await
    }

    /// Calls `eth_signTransaction`. The `from` account must be managed and
    /// unlocked by the node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn sign_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<SignedTransaction, RpcClientError> {
        self.transport
            .call(RequestMethod::SignTransaction(request))
            .await
    }

    /// Calls `eth_submitHashrate` with a remote miner's hash rate and
    /// node-unique identifier.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn submit_hashrate(&self, hashrate: u64, id: B256) -> Result<bool, RpcClientError> {
        self.transport
            .call(RequestMethod::SubmitHashrate(hashrate, id))
            .await
    }

    /// Calls `eth_submitWork` with an external miner's proof-of-work
    /// solution. The result indicates acceptance, not validity.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn submit_work(
        &self,
        nonce: B64,
        pow_hash: B256,
        mix_digest: B256,
    ) -> Result<bool, RpcClientError> {
        self.transport
            .call(RequestMethod::SubmitWork(nonce, pow_hash, mix_digest))
            .await
    }

    /// Calls `eth_subscribe` and returns the subscription id. Notification
    /// delivery is the transport's concern; this method only issues the
    /// creation call.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn subscribe(
        &self,
        subscription: SubscriptionType,
        options: Option<LogFilterOptions>,
    ) -> Result<U256, RpcClientError> {
        self.transport
            .call(RequestMethod::Subscribe(subscription, options))
            .await
    }

    /// Calls `eth_syncing` and returns the node's synchronization status.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn syncing(&self) -> Result<SyncStatus, RpcClientError> {
        self.transport.call(RequestMethod::Syncing(())).await
    }
}
