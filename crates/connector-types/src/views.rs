//! Typed views of the RPC responses this repo consumes.
//!
//! Shapes follow the node's JSON-RPC result objects. Access-key change
//! payloads vary by cause and key permission, so the inner `change` stays a
//! raw JSON value rather than a full type tree.

use crate::common::CryptoHash;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of the `gas_price` query. The price is a yoctoNEAR amount, kept as
/// a decimal string because it exceeds u64 range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasPriceView {
	pub gas_price: String,
}

/// Result of a state-changes query: the block the changes landed in plus the
/// change list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateChangesView {
	pub block_hash: CryptoHash,
	pub changes: Vec<StateChange>,
}

/// One recorded state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
	pub cause: ChangeCause,
	#[serde(rename = "type")]
	pub kind: String,
	pub change: Value,
}

/// What triggered a state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCause {
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tx_hash: Option<CryptoHash>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub receipt_hash: Option<CryptoHash>,
}
