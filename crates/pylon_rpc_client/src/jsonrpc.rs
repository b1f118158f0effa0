use std::fmt;

use serde::{Deserialize, Serialize};

/// The JSON-RPC protocol version marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    /// `"2.0"`, the only version this crate speaks
    #[serde(rename = "2.0")]
    V2_0,
}

/// A request identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// a numeric id
    Num(u64),
    /// a string id
    Str(String),
}

/// A request envelope. `MethodT` is expected to flatten into `method` and
/// `params` keys, which the serde method enums of the namespace crates do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Request<MethodT> {
    /// the protocol version
    #[serde(rename = "jsonrpc")]
    pub version: Version,
    /// the method invocation
    #[serde(flatten)]
    pub method: MethodT,
    /// the request id
    pub id: Id,
}

/// An error object returned by the remote node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    /// the error code
    pub code: i64,
    /// the error message
    pub message: String,
    /// optional additional payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

/// The payload of a response: either a decoded result or an error object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData<T> {
    /// a failure reported by the node
    Error {
        /// the error object
        error: Error,
    },
    /// a successful result
    Success {
        /// the decoded result
        result: T,
    },
}

impl<T> ResponseData<T> {
    /// Converts the payload into a `Result`.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            ResponseData::Success { result } => Ok(result),
            ResponseData::Error { error } => Err(error),
        }
    }
}

/// A response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    /// the protocol version
    pub jsonrpc: Version,
    /// the id of the request this responds to
    pub id: Id,
    /// result or error
    #[serde(flatten)]
    pub data: ResponseData<T>,
}
