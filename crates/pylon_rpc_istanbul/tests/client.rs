use std::str::FromStr;

use pylon_eth::Address;
use pylon_rpc_client::RpcClientError;
use pylon_rpc_istanbul::{IstanbulClientError, IstanbulRpcClient};
use serde_json::json;

#[tokio::test]
async fn get_validators_sorts_by_canonical_text_encoding() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    // unsorted on the wire; one mock per request id
    let mut mocks = Vec::new();
    for id in 0..2 {
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::PartialJson(json!({
                "method": "istanbul_getValidators",
                "params": ["latest"],
                "id": id,
            })))
            .with_body(format!(
                r#"{{"jsonrpc":"2.0","id":{id},"result":[
                    "0xdac17f958d2ee523a2206206994597c13d831ec7",
                    "0x6b175474e89094c44da98b954eedeac495271d0f",
                    "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
                ]}}"#
            ))
            .create_async()
            .await;
        mocks.push(mock);
    }

    let client = IstanbulRpcClient::dial(&server.url(), None)?;
    let validators = client.get_validators(None).await?;

    let expected: Vec<Address> = {
        let mut addresses = vec![
            Address::from_str("0xdac17f958d2ee523a2206206994597c13d831ec7")?,
            Address::from_str("0x6b175474e89094c44da98b954eedeac495271d0f")?,
            Address::from_str("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2")?,
        ];
        addresses.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
        addresses
    };
    assert_eq!(validators, expected);

    // deterministic across repeated calls with the same wire order
    let validators_again = client.get_validators(None).await?;
    assert_eq!(validators_again, validators);

    for mock in mocks {
        mock.assert_async().await;
    }

    Ok(())
}

#[tokio::test]
async fn get_validators_maps_block_number_to_hex_quantity() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "istanbul_getValidators",
            "params": ["0x2a"],
        })))
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"result":["0x6b175474e89094c44da98b954eedeac495271d0f"]}"#,
        )
        .create_async()
        .await;

    let client = IstanbulRpcClient::dial(&server.url(), None)?;
    let validators = client.get_validators(Some(42)).await?;
    assert_eq!(validators.len(), 1);

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn get_validators_reports_empty_set_as_not_found() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":[]}"#)
        .create_async()
        .await;

    let client = IstanbulRpcClient::dial(&server.url(), None)?;
    let error = client
        .get_validators(None)
        .await
        .expect_err("empty validator set");
    assert!(matches!(error, IstanbulClientError::NotFound));

    Ok(())
}

#[tokio::test]
async fn get_validators_reports_null_result_as_not_found() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":null}"#)
        .create_async()
        .await;

    let client = IstanbulRpcClient::dial(&server.url(), None)?;
    let error = client
        .get_validators(None)
        .await
        .expect_err("null validator set");
    assert!(matches!(error, IstanbulClientError::NotFound));

    Ok(())
}

#[tokio::test]
async fn get_validators_passes_transport_errors_through() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_status(503)
        .create_async()
        .await;

    let client = IstanbulRpcClient::dial(&server.url(), None)?;
    let error = client
        .get_validators(None)
        .await
        .expect_err("server is unavailable");

    assert!(matches!(
        error,
        IstanbulClientError::Rpc(RpcClientError::HttpStatus(_))
    ));

    Ok(())
}

#[tokio::test]
async fn propose_validator_sends_address_and_auth_flag() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "method": "istanbul_propose",
            "params": ["0x6b175474e89094c44da98b954eedeac495271d0f", true],
        })))
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":null}"#)
        .create_async()
        .await;

    let client = IstanbulRpcClient::dial(&server.url(), None)?;
    client
        .propose_validator(
            Address::from_str("0x6b175474e89094c44da98b954eedeac495271d0f")?,
            true,
        )
        .await?;

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn propose_validator_translates_node_errors_to_not_found() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"error":{"code":-32000,"message":"unknown candidate"}}"#,
        )
        .create_async()
        .await;

    let client = IstanbulRpcClient::dial(&server.url(), None)?;
    let error = client
        .propose_validator(
            Address::from_str("0x6b175474e89094c44da98b954eedeac495271d0f")?,
            false,
        )
        .await
        .expect_err("node rejected the candidate");
    assert!(matches!(error, IstanbulClientError::NotFound));

    Ok(())
}
