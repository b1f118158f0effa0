use std::str::FromStr;

use pylon_eth::{Address, Bytes, U256};
use pylon_rpc_quorum::QuorumRpcClient;
use serde_json::json;

fn sender() -> Address {
    Address::from_str("0x7d97fcdb98632a91be79d3122b4eb99c0c4223ee")
        .expect("failed to parse address")
}

#[tokio::test]
async fn create_contract_sends_named_record_and_returns_transaction_id() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "eth_sendTransaction",
            "params": [{
                "from": "0x7d97fcdb98632a91be79d3122b4eb99c0c4223ee",
                "gas": "0x5208",
                "data": "0x600160005401",
            }],
        })))
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"result":"0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef"}"#,
        )
        .create_async()
        .await;

    let client = QuorumRpcClient::dial(&server.url(), None)?;
    let transaction_id = client
        .create_contract(
            sender(),
            Bytes::from_str("0x600160005401")?,
            U256::from(21_000),
        )
        .await?;

    assert_eq!(
        transaction_id,
        "0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef"
    );

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn create_private_contract_adds_recipient_list_verbatim() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "eth_sendTransaction",
            "params": [{
                "from": "0x7d97fcdb98632a91be79d3122b4eb99c0c4223ee",
                "gas": "0x5208",
                "data": "0x600160005401",
                "privateFor": [
                    "ROAZBWtSacxXQrOe3FGAqJDyJjFePR5ce4TSIzmJ0Bc=",
                    "QfeDAys9MPDs2XHExtc84jKGHxZg/aj52DTh0vtA3Xc=",
                ],
            }],
        })))
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"result":"0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef"}"#,
        )
        .create_async()
        .await;

    let client = QuorumRpcClient::dial(&server.url(), None)?;
    let transaction_id = client
        .create_private_contract(
            sender(),
            Bytes::from_str("0x600160005401")?,
            U256::from(21_000),
            vec![
                "ROAZBWtSacxXQrOe3FGAqJDyJjFePR5ce4TSIzmJ0Bc=".to_string(),
                "QfeDAys9MPDs2XHExtc84jKGHxZg/aj52DTh0vtA3Xc=".to_string(),
            ],
        )
        .await?;

    assert_eq!(
        transaction_id,
        "0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef"
    );

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn create_contract_passes_node_errors_through() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"error":{"code":-32000,"message":"intrinsic gas too low"}}"#,
        )
        .create_async()
        .await;

    let client = QuorumRpcClient::dial(&server.url(), None)?;
    let error = client
        .create_contract(
            sender(),
            Bytes::from_str("0x600160005401")?,
            U256::from(21_000),
        )
        .await
        .expect_err("node rejected the transaction");

    assert!(matches!(
        error,
        pylon_rpc_client::RpcClientError::JsonRpcError { .. }
    ));

    Ok(())
}
