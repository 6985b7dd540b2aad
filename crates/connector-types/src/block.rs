//! Block identification types.
//!
//! A query against the NEAR node targets a ledger state identified either by
//! an explicit block id (height or hash) or by a finality tag. The serialized
//! forms here match the node's JSON-RPC wire format, so these values can be
//! merged straight into request params.

use crate::common::{BlockHeight, CryptoHash};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Explicit block identifier: a height or a base58 hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockId {
	Height(BlockHeight),
	Hash(CryptoHash),
}

impl fmt::Display for BlockId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BlockId::Height(h) => write!(f, "{}", h),
			BlockId::Hash(h) => write!(f, "{}", h),
		}
	}
}

/// Finality tag selecting which ledger state a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finality {
	#[serde(rename = "optimistic")]
	Optimistic,
	#[serde(rename = "near-final")]
	NearFinal,
	#[serde(rename = "final")]
	Final,
}

impl fmt::Display for Finality {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			Finality::Optimistic => "optimistic",
			Finality::NearFinal => "near-final",
			Finality::Final => "final",
		};
		write!(f, "{}", s)
	}
}

/// Discriminated block reference as the RPC client expects it.
///
/// Serializes to `{"block_id": …}` or `{"finality": "…"}`, which is exactly
/// the key the node expects inside request params.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReference {
	#[serde(rename = "block_id")]
	BlockId(BlockId),
	#[serde(rename = "finality")]
	Finality(Finality),
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_block_id_untagged_forms() {
		let height: BlockId = serde_json::from_value(json!(17821130)).unwrap();
		assert_eq!(height, BlockId::Height(17821130));

		let hash: BlockId =
			serde_json::from_value(json!("4kvqE1PsA6ic1LG7S5SqymSEhvjqGqumKjAxnVdNN3ZH")).unwrap();
		assert_eq!(
			hash,
			BlockId::Hash("4kvqE1PsA6ic1LG7S5SqymSEhvjqGqumKjAxnVdNN3ZH".to_string())
		);
	}

	#[test]
	fn test_block_reference_wire_shape() {
		let by_height = BlockReference::BlockId(BlockId::Height(100));
		assert_eq!(
			serde_json::to_value(&by_height).unwrap(),
			json!({ "block_id": 100 })
		);

		let by_finality = BlockReference::Finality(Finality::Final);
		assert_eq!(
			serde_json::to_value(&by_finality).unwrap(),
			json!({ "finality": "final" })
		);
	}

	#[test]
	fn test_finality_tags() {
		assert_eq!(
			serde_json::to_value(Finality::NearFinal).unwrap(),
			json!("near-final")
		);
		assert_eq!(Finality::Optimistic.to_string(), "optimistic");
	}
}
