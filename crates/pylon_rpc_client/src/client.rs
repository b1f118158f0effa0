use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use hyper::header::HeaderValue;
pub use hyper::{header, HeaderMap};
use reqwest::Client as HttpClient;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{jsonrpc, ReqwestError};

/// Trait for request types that invoke one named JSON-RPC method.
///
/// Implementors are serde enums tagged by `method` with `params` content, so
/// that serializing a value produces the `method` and `params` keys of the
/// request envelope. The name is the wire string and doubles as the log
/// label.
pub trait RpcMethod: Serialize {
    /// The method name as it appears on the wire.
    fn name(&self) -> &'static str;
}

/// Specialized error types
#[derive(Debug, thiserror::Error)]
pub enum RpcClientError {
    /// The message could not be sent to the remote node
    #[error(transparent)]
    FailedToSend(ReqwestError),

    /// The remote node failed to reply with the body of the response
    #[error("The response text was corrupted: {0}.")]
    CorruptedResponse(ReqwestError),

    /// The server returned an error status code.
    #[error("The HTTP server returned error status code: {0}")]
    HttpStatus(ReqwestError),

    /// The request cannot be serialized as JSON.
    #[error(transparent)]
    InvalidJsonRequest(serde_json::Error),

    /// The server returned an invalid JSON-RPC response.
    #[error("Response '{response}' failed to parse with expected type '{expected_type}', due to error: '{error}'")]
    InvalidResponse {
        /// The response text
        response: String,
        /// The expected type of the response
        expected_type: &'static str,
        /// The parse error
        error: serde_json::Error,
    },

    /// The server returned an invalid JSON-RPC id.
    #[error("The server returned an invalid id: '{id:?}' in response: '{response}'")]
    InvalidId {
        /// The response text
        response: String,
        /// The invalid id
        id: jsonrpc::Id,
    },

    /// Invalid URL format
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    /// The JSON-RPC call returned an error.
    #[error("{error}. Request: {request}")]
    JsonRpcError {
        /// The JSON-RPC error
        error: jsonrpc::Error,
        /// The request JSON
        request: String,
    },

    /// The connection handle was closed before the call was issued.
    #[error("The JSON-RPC connection handle has been closed")]
    Closed,
}

/// A client for executing JSON-RPC methods on a remote Ethereum-compatible
/// node.
///
/// One instance owns one HTTP connection pool and may be shared by any number
/// of method groups. Each call is a single request/response round trip; there
/// are no retries. Cancellation follows Rust future semantics: dropping a
/// pending `call` future aborts the in-flight request.
#[derive(Debug)]
pub struct RpcClient {
    url: url::Url,
    client: HttpClient,
    next_id: AtomicU64,
    closed: AtomicBool,
}

impl RpcClient {
    /// Creates a new instance, given a remote node URL and optional extra
    /// headers to send with every request.
    pub fn new(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, RpcClientError> {
        let mut headers = extra_headers.unwrap_or_default();
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.append(
            header::USER_AGENT,
            HeaderValue::from_str(&format!("pylon {}", env!("CARGO_PKG_VERSION")))
                .expect("Version string is valid header value"),
        );

        let client = HttpClient::builder()
            .default_headers(headers)
            .build()
            .expect("Default construction nor setting default headers can cause an error");

        Ok(RpcClient {
            url: url.parse()?,
            client,
            next_id: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        })
    }

    /// The URL the client was dialed with.
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Closes the handle. Every subsequent call through it fails with
    /// [`RpcClientError::Closed`]. Idempotent.
    ///
    /// Only the owner of the handle should close it; borrowers issuing calls
    /// must leave this to whoever created the client.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    /// Whether [`Self::close`] has been called on this handle.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn parse_response_str<SuccessT: DeserializeOwned>(
        response: &str,
    ) -> Result<jsonrpc::Response<SuccessT>, RpcClientError> {
        serde_json::from_str(response).map_err(|error| RpcClientError::InvalidResponse {
            response: response.to_string(),
            expected_type: std::any::type_name::<jsonrpc::Response<SuccessT>>(),
            error,
        })
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    async fn send_request_body(
        &self,
        request_body: &SerializedRequest,
    ) -> Result<String, RpcClientError> {
        self.client
            .post(self.url.clone())
            .body(request_body.to_json_string())
            .send()
            .await
            .map_err(|err| RpcClientError::FailedToSend(err.into()))?
            .error_for_status()
            .map_err(|err| RpcClientError::HttpStatus(err.into()))?
            .text()
            .await
            .map_err(|err| RpcClientError::CorruptedResponse(err.into()))
    }

    async fn send_request_and_extract_result<SuccessT: DeserializeOwned>(
        &self,
        id: &jsonrpc::Id,
        request: SerializedRequest,
    ) -> Result<SuccessT, RpcClientError> {
        let response_text = self.send_request_body(&request).await?;
        let response = Self::parse_response_str::<SuccessT>(&response_text)?;

        if response.id != *id {
            return Err(RpcClientError::InvalidId {
                response: response_text,
                id: response.id,
            });
        }

        response
            .data
            .into_result()
            .map_err(|error| RpcClientError::JsonRpcError {
                error,
                request: request.to_json_string(),
            })
    }

    fn serialize_request<MethodT: RpcMethod>(
        &self,
        method: &MethodT,
    ) -> Result<(jsonrpc::Id, SerializedRequest), RpcClientError> {
        let id = jsonrpc::Id::Num(self.next_id.fetch_add(1, Ordering::Relaxed));
        let request = Self::serialize_request_with_id(method, id.clone())?;
        Ok((id, request))
    }

    fn serialize_request_with_id<MethodT: RpcMethod>(
        method: &MethodT,
        id: jsonrpc::Id,
    ) -> Result<SerializedRequest, RpcClientError> {
        let request = serde_json::to_value(jsonrpc::Request {
            version: jsonrpc::Version::V2_0,
            method,
            id,
        })
        .map_err(RpcClientError::InvalidJsonRequest)?;

        Ok(SerializedRequest(request))
    }

    /// Calls the provided JSON-RPC method and returns the decoded result.
    ///
    /// Transport and decoding failures are returned unchanged; no retries are
    /// attempted.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub async fn call<MethodT: RpcMethod, SuccessT: DeserializeOwned>(
        &self,
        method: MethodT,
    ) -> Result<SuccessT, RpcClientError> {
        if self.is_closed() {
            return Err(RpcClientError::Closed);
        }

        log::trace!("calling {}", method.name());

        let (id, request) = self.serialize_request(&method)?;
        self.send_request_and_extract_result(&id, request).await
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
struct SerializedRequest(serde_json::Value);

impl SerializedRequest {
    fn to_json_string(&self) -> String {
        self.0.to_string()
    }
}
