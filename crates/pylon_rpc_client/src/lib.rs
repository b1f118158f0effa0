#![warn(missing_docs)]

//! JSON-RPC client for Ethereum-compatible nodes.
//!
//! This crate owns the transport: dialing an endpoint, issuing one
//! request/response round trip per call, and closing the connection handle.
//! The typed method groups live in the namespace crates built on top.

mod client;
mod reqwest_error;

/// Types specific to the JSON-RPC 2.0 envelope
pub mod jsonrpc;

pub use client::{header, HeaderMap, RpcClient, RpcClientError, RpcMethod};
pub use reqwest_error::ReqwestError;
