use std::str::FromStr;

use pylon_eth::{
    filter::{LogFilterOptions, OneOrMore, SubscriptionType},
    Address, BlockSpec, Bytes, PreEip1898BlockSpec, B256, U256,
};
use pylon_rpc_client::RpcClientError;
use pylon_rpc_eth::{client::EthRpcClient, CallRequest, TransactionRequest};
use serde_json::json;

fn dai_address() -> Address {
    Address::from_str("0x6b175474e89094c44da98b954eedeac495271d0f")
        .expect("failed to parse address")
}

#[tokio::test]
async fn block_number_decodes_quantity() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "eth_blockNumber",
            "params": [],
        })))
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":"0xa74fde"}"#)
        .create_async()
        .await;

    let client = EthRpcClient::dial(&server.url(), None)?;
    assert_eq!(client.block_number().await?, 0xa74fde);

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn get_balance_sends_address_and_block_spec() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "eth_getBalance",
            "params": ["0x6b175474e89094c44da98b954eedeac495271d0f", "0xf78ab0"],
        })))
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":"0x0234c8a3397aab58"}"#)
        .create_async()
        .await;

    let client = EthRpcClient::dial(&server.url(), None)?;
    let balance = client
        .get_balance(dai_address(), Some(BlockSpec::Number(0xf78ab0)))
        .await?;
    assert_eq!(balance, U256::from(0x0234c8a3397aab58_u64));

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn get_balance_omits_absent_block_spec() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "eth_getBalance",
            "params": ["0x6b175474e89094c44da98b954eedeac495271d0f"],
        })))
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":"0x0"}"#)
        .create_async()
        .await;

    let client = EthRpcClient::dial(&server.url(), None)?;
    client.get_balance(dai_address(), None).await?;

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn get_block_by_number_decodes_block_with_transaction_hashes() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "eth_getBlockByNumber",
            "params": ["latest", false],
        })))
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"result":{
                "hash":"0x71d5e7c8ff9ea737034c16e333a75575a4a94d29482e0c2b88f0a6a8369c1812",
                "parentHash":"0x88fadbb673928c61b9ede3694ae0589ac77ae38ec90a24a6e12e83f42f18c7e8",
                "sha3Uncles":"0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
                "stateRoot":"0x0000000000000000000000000000000000000000000000000000000000000001",
                "transactionsRoot":"0x0000000000000000000000000000000000000000000000000000000000000002",
                "receiptsRoot":"0x0000000000000000000000000000000000000000000000000000000000000003",
                "number":"0xa74fde",
                "gasUsed":"0x56c81b",
                "gasLimit":"0x1c9c380",
                "extraData":"0x",
                "logsBloom":"0x00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
                "timestamp":"0x61bd4b4b",
                "difficulty":"0x1",
                "totalDifficulty":"0x2",
                "uncles":[],
                "transactions":["0xc008e9f9bb92057dd0035496fbf4fb54f66b4b18b370928e46d6603933054d5a"],
                "size":"0x220",
                "mixHash":"0x0000000000000000000000000000000000000000000000000000000000000000",
                "nonce":"0x0000000000000000",
                "miner":"0x7d97fcdb98632a91be79d3122b4eb99c0c4223ee"
            }}"#,
        )
        .create_async()
        .await;

    let client = EthRpcClient::dial(&server.url(), None)?;
    let block = client
        .get_block_by_number(PreEip1898BlockSpec::latest())
        .await?
        .expect("block exists");

    assert_eq!(block.number, Some(0xa74fde));
    assert_eq!(block.transactions.len(), 1);
    assert_eq!(block.gas_used, 0x56c81b);
    assert_eq!(
        block.miner,
        Some(Address::from_str("0x7d97fcdb98632a91be79d3122b4eb99c0c4223ee").unwrap())
    );

    Ok(())
}

#[tokio::test]
async fn get_transaction_by_hash_decodes_null_as_none() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let hash = B256::from_str("0xc008e9f9bb92057dd0035496fbf4fb54f66b4b18b370928e46d6603933054d5a")
        .expect("failed to parse hash from string");

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "eth_getTransactionByHash",
            "params": ["0xc008e9f9bb92057dd0035496fbf4fb54f66b4b18b370928e46d6603933054d5a"],
        })))
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":null}"#)
        .create_async()
        .await;

    let client = EthRpcClient::dial(&server.url(), None)?;
    assert_eq!(client.get_transaction_by_hash(hash).await?, None);

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn get_transaction_by_hash_decodes_full_transaction() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let hash = B256::from_str("0xc008e9f9bb92057dd0035496fbf4fb54f66b4b18b370928e46d6603933054d5a")
        .expect("failed to parse hash from string");

    let _mock = server
        .mock("POST", "/")
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"result":{
                "hash":"0xc008e9f9bb92057dd0035496fbf4fb54f66b4b18b370928e46d6603933054d5a",
                "nonce":"0x653b",
                "blockHash":"0x88fadbb673928c61b9ede3694ae0589ac77ae38ec90a24a6e12e83f42f18c7e8",
                "blockNumber":"0xa74fde",
                "transactionIndex":"0x88",
                "from":"0x7d97fcdb98632a91be79d3122b4eb99c0c4223ee",
                "to":"0xdac17f958d2ee523a2206206994597c13d831ec7",
                "value":"0x0",
                "gasPrice":"0x1e449a99b8",
                "gas":"0x30d40",
                "input":"0xa9059cbb",
                "v":"0x1c",
                "r":"0xeb56df45bd355e182fba854506bc73737df275af5a323d30f98db13fdf44393a",
                "s":"0x2c6efcd210cdc7b3d3191360f796ca84cab25a52ed8f72efff1652adaabc1c83"
            }}"#,
        )
        .create_async()
        .await;

    let client = EthRpcClient::dial(&server.url(), None)?;
    let transaction = client
        .get_transaction_by_hash(hash)
        .await?
        .expect("transaction exists");

    assert_eq!(transaction.hash, hash);
    assert_eq!(transaction.nonce, 0x653b);
    assert_eq!(transaction.block_number, Some(0xa74fde));
    assert_eq!(transaction.transaction_index, Some(0x88));
    assert_eq!(transaction.v, 0x1c);
    assert!(transaction.is_legacy());

    Ok(())
}

#[tokio::test]
async fn get_transaction_receipt_decodes_status() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let hash = B256::from_str("0xc008e9f9bb92057dd0035496fbf4fb54f66b4b18b370928e46d6603933054d5a")
        .expect("failed to parse hash from string");

    let _mock = server
        .mock("POST", "/")
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"result":{
                "transactionHash":"0xc008e9f9bb92057dd0035496fbf4fb54f66b4b18b370928e46d6603933054d5a",
                "transactionIndex":"0x88",
                "blockHash":"0x88fadbb673928c61b9ede3694ae0589ac77ae38ec90a24a6e12e83f42f18c7e8",
                "blockNumber":"0xa74fde",
                "from":"0x7d97fcdb98632a91be79d3122b4eb99c0c4223ee",
                "to":"0xdac17f958d2ee523a2206206994597c13d831ec7",
                "cumulativeGasUsed":"0x56c81b",
                "gasUsed":"0xa0f9",
                "contractAddress":null,
                "logs":[],
                "logsBloom":"0x00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
                "status":"0x1",
                "type":"0x0"
            }}"#,
        )
        .create_async()
        .await;

    let client = EthRpcClient::dial(&server.url(), None)?;
    let receipt = client
        .get_transaction_receipt(hash)
        .await?
        .expect("receipt exists");

    assert_eq!(receipt.gas_used, 0xa0f9);
    assert_eq!(receipt.contract_address, None);
    assert_eq!(receipt.succeeded(), Some(true));
    assert_eq!(receipt.transaction_type, Some(0));

    Ok(())
}

#[tokio::test]
async fn send_transaction_sends_named_record() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "eth_sendTransaction",
            "params": [{
                "from": "0x7d97fcdb98632a91be79d3122b4eb99c0c4223ee",
                "to": "0xdac17f958d2ee523a2206206994597c13d831ec7",
                "gas": "0x5208",
                "value": "0xde0b6b3a7640000",
            }],
        })))
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"result":"0x0000000000000000000000000000000000000000000000000000000000000001"}"#,
        )
        .create_async()
        .await;

    let request = TransactionRequest {
        from: Address::from_str("0x7d97fcdb98632a91be79d3122b4eb99c0c4223ee")?,
        to: Some(Address::from_str("0xdac17f958d2ee523a2206206994597c13d831ec7")?),
        gas: Some(21_000),
        value: Some(U256::from(1_000_000_000_000_000_000_u64)),
        ..TransactionRequest::default()
    };

    let client = EthRpcClient::dial(&server.url(), None)?;
    let hash = client.send_transaction(request).await?;
    assert_eq!(hash, B256::with_last_byte(1));

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn get_logs_sends_filter_object() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "eth_getLogs",
            "params": [{
                "fromBlock": "0xa01749",
                "toBlock": "0xa01749",
                "address": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            }],
        })))
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":[]}"#)
        .create_async()
        .await;

    let client = EthRpcClient::dial(&server.url(), None)?;
    let logs = client
        .get_logs(LogFilterOptions {
            from_block: Some(BlockSpec::Number(10_491_721)),
            to_block: Some(BlockSpec::Number(10_491_721)),
            address: Some(OneOrMore::One(Address::from_str(
                "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            )?)),
            ..LogFilterOptions::default()
        })
        .await?;
    assert!(logs.is_empty());

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn subscribe_sends_subscription_kind() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "eth_subscribe",
            "params": ["newHeads"],
        })))
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":"0xcd0c3e8af590364c09d0fa6a1210faf5"}"#)
        .create_async()
        .await;

    let client = EthRpcClient::dial(&server.url(), None)?;
    let id = client.subscribe(SubscriptionType::NewHeads, None).await?;
    assert_ne!(id, U256::ZERO);

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn call_passes_request_and_decodes_return_data() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "eth_call",
            "params": [
                {
                    "to": "0xdac17f958d2ee523a2206206994597c13d831ec7",
                    "data": "0x70a08231",
                },
                "latest",
            ],
        })))
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":"0x01"}"#)
        .create_async()
        .await;

    let request = CallRequest {
        to: Some(Address::from_str("0xdac17f958d2ee523a2206206994597c13d831ec7")?),
        data: Some(Bytes::from_str("0x70a08231")?),
        ..CallRequest::default()
    };

    let client = EthRpcClient::dial(&server.url(), None)?;
    let output = client.call(request, Some(BlockSpec::latest())).await?;
    assert_eq!(output, Bytes::from_str("0x01")?);

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn syncing_decodes_false() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":false}"#)
        .create_async()
        .await;

    let client = EthRpcClient::dial(&server.url(), None)?;
    assert!(!client.syncing().await?.is_syncing());

    Ok(())
}

#[tokio::test]
async fn transport_errors_pass_through_unchanged() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"error":{"code":-32000,"message":"header not found"}}"#,
        )
        .create_async()
        .await;

    let client = EthRpcClient::dial(&server.url(), None)?;
    let error = client
        .get_balance(dai_address(), None)
        .await
        .expect_err("node reported an error");

    match error {
        RpcClientError::JsonRpcError { error, .. } => {
            assert_eq!(error.code, -32000);
            assert_eq!(error.message, "header not found");
        }
        other => panic!("expected JsonRpcError, got: {other}"),
    }

    Ok(())
}
