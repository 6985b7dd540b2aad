//! Shared input fields and resolvers used by every connector.

use connector_types::{
	BlockId, BlockReference, FieldType, Finality, InputField, NearNetwork, NetworkSettings,
	Result,
};
use serde::Deserialize;

/// Network-related inputs shared by connectors that resolve an endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkInput {
	#[serde(default)]
	pub network: Option<NearNetwork>,
	/// Explicit endpoint override; wins over the named network when set.
	#[serde(default)]
	pub rpc_url: Option<String>,
}

/// Resolve the endpoint URL for one invocation.
///
/// An explicit `rpc_url` override always wins; otherwise the named network
/// is looked up, falling back to the configured default network.
pub fn resolve_endpoint(settings: &NetworkSettings, input: &NetworkInput) -> Result<String> {
	if let Some(url) = &input.rpc_url {
		return Ok(url.clone());
	}
	match input.network {
		Some(network) => Ok(settings.endpoint(network)?.to_string()),
		None => Ok(settings.default_endpoint()?.to_string()),
	}
}

/// Resolve a bundle's block id / finality pair into the discriminated value
/// the RPC client expects.
///
/// An explicit block id takes precedence over finality; with neither present
/// the query targets the final block, matching upstream near-api-js
/// behavior.
pub fn block_reference(block_id: Option<BlockId>, finality: Option<Finality>) -> BlockReference {
	match (block_id, finality) {
		(Some(id), _) => BlockReference::BlockId(id),
		(None, Some(finality)) => BlockReference::Finality(finality),
		(None, None) => BlockReference::Finality(Finality::Final),
	}
}

pub fn network_select_field() -> InputField {
	InputField::new("network")
		.label("Network")
		.field_type(FieldType::String)
		.choices(["mainnet", "testnet"])
		.default_value("testnet")
		.help_text("Network to query.")
}

pub fn rpc_url_field() -> InputField {
	InputField::new("rpc_url")
		.label("RPC URL")
		.field_type(FieldType::String)
		.help_text("Explicit RPC endpoint; overrides the selected network when set.")
}

pub fn block_id_field() -> InputField {
	InputField::new("block_id")
		.label("Block ID")
		.help_text("Block height or base58 block hash.")
}

pub fn finality_field() -> InputField {
	InputField::new("finality")
		.label("Finality")
		.field_type(FieldType::String)
		.choices(["optimistic", "near-final", "final"])
		.help_text("Used when no block ID is given.")
}

pub fn account_ids_field() -> InputField {
	InputField::new("account_ids")
		.label("Account IDs")
		.field_type(FieldType::String)
		.list()
		.required()
		.help_text("One or more account IDs to query.")
}
