//! JSON-RPC 2.0 client for NEAR nodes.
//!
//! Implements the [`connector_types::NearRpc`] capability over HTTP POST via
//! `reqwest`. The framing here is only the standard JSON-RPC envelope; all
//! method semantics live on the node side.

pub mod client;
pub mod envelope;

pub use client::{HttpRpcProvider, JsonRpcClient};
