//! Access-key changes search connector.

use crate::common::{
	account_ids_field, block_id_field, block_reference, finality_field, network_select_field,
	resolve_endpoint, rpc_url_field, NetworkInput,
};
use async_trait::async_trait;
use connector_types::{
	output_record, AccountId, BlockId, Bundle, ConnectorDefinition, Context, Finality, Result,
	SearchConnector,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct AccessKeyChangesInput {
	#[serde(flatten)]
	pub network: NetworkInput,
	pub account_ids: Vec<AccountId>,
	#[serde(default)]
	pub block_id: Option<BlockId>,
	#[serde(default)]
	pub finality: Option<Finality>,
}

/// Search action listing changes to all access keys of the given accounts at
/// one block. Always yields exactly one record wrapping the node's change
/// payload.
pub struct AccessKeyChangesConnector {
	definition: ConnectorDefinition,
}

impl AccessKeyChangesConnector {
	pub fn new() -> Self {
		let definition = ConnectorDefinition::search(
			"view_access_key_changes_all",
			"Access Key Changes (All)",
		)
		.display(
			"View access key changes (all)",
			"Returns changes to all access keys of a specific block. Multiple accounts can be \
			 queried by passing an array of account_ids.",
		)
		.input_field(network_select_field())
		.input_field(rpc_url_field())
		.input_field(block_id_field())
		.input_field(finality_field())
		.input_field(account_ids_field())
		.sample(json!({
			"id": "1",
			"block_hash": "4kvqE1PsA6ic1LG7S5SqymSEhvjqGqumKjAxnVdNN3ZH",
			"changes": [
				{
					"cause": {
						"type": "transaction_processing",
						"tx_hash": "HshPyqddLxsganFxHHeH9LtkGekXDCuAt6axVgJLboXV",
					},
					"type": "access_key_update",
					"change": {
						"account_id": "example-acct.testnet",
						"public_key": "ed25519:25KEc7t7MQohAJ4EDThd2vkksKkwangnuJFzcoiXj9oM",
						"access_key": { "nonce": 1, "permission": "FullAccess" },
					},
				},
				{
					"cause": {
						"type": "receipt_processing",
						"receipt_hash": "CetXstu7bdqyUyweRqpY9op5U1Kqzd8pq8T1kqfcgBv2",
					},
					"type": "access_key_update",
					"change": {
						"account_id": "example-acct.testnet",
						"public_key": "ed25519:96pj2aVJH9njmAxakjvUMnNvdB3YUeSAMjbz9aRNU6XY",
						"access_key": { "nonce": 0, "permission": "FullAccess" },
					},
				},
			],
		}))
		.build();
		Self { definition }
	}
}

impl Default for AccessKeyChangesConnector {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl SearchConnector for AccessKeyChangesConnector {
	fn definition(&self) -> &ConnectorDefinition {
		&self.definition
	}

	async fn search(&self, ctx: &Context, bundle: &Bundle) -> Result<Vec<Value>> {
		let input: AccessKeyChangesInput = bundle.input()?;
		info!(
			"Getting access keys' changes with input data: {}",
			bundle.input_data
		);

		let endpoint = resolve_endpoint(&ctx.networks, &input.network)?;
		let rpc = ctx.rpc.connect(&endpoint)?;

		let block = block_reference(input.block_id, input.finality);
		let view = rpc.access_key_changes(&input.account_ids, block).await?;
		info!("Got access keys' changes successfully");

		Ok(vec![output_record(&view)?])
	}
}
