//! Gas price resource connector.

use crate::common::block_id_field;
use async_trait::async_trait;
use connector_types::{
	output_record, BlockId, Bundle, ConnectorDefinition, Context, ResourceConnector, Result,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GasPriceInput {
	/// Block to price at; absent means the latest block.
	#[serde(default)]
	pub block_id: Option<BlockId>,
}

/// Single-result action returning `{ id, gas_price }` for a block.
pub struct GasPriceConnector {
	definition: ConnectorDefinition,
}

impl GasPriceConnector {
	pub fn new() -> Self {
		let definition = ConnectorDefinition::resource("gas_price", "Gas Price")
			.display("Gas Price", "Gets gas price by block ID.")
			.input_field(block_id_field())
			.sample(json!({ "id": "0", "gas_price": "1" }))
			.build();
		Self { definition }
	}
}

impl Default for GasPriceConnector {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl ResourceConnector for GasPriceConnector {
	fn definition(&self) -> &ConnectorDefinition {
		&self.definition
	}

	async fn perform(&self, ctx: &Context, bundle: &Bundle) -> Result<Value> {
		let input: GasPriceInput = bundle.input()?;
		debug!("Getting gas price with input data: {}", bundle.input_data);

		// No network field on this action; the configured default endpoint
		// serves every invocation.
		let endpoint = ctx.networks.default_endpoint()?;
		let rpc = ctx.rpc.connect(endpoint)?;

		let view = rpc.gas_price(input.block_id).await?;
		info!("Got gas price successfully");

		output_record(&view)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{mock_context, MockRpc, RecordedCall};
	use chrono::DateTime;
	use connector_types::{ConnectorError, GasPriceView};

	fn priced_mock(gas_price: &str) -> MockRpc {
		MockRpc {
			gas_price_view: Some(GasPriceView {
				gas_price: gas_price.to_string(),
			}),
			..MockRpc::default()
		}
	}

	#[tokio::test]
	async fn test_returns_rpc_gas_price_with_timestamp_id() {
		let (ctx, _, _) = mock_context(priced_mock("5000000000"));
		let connector = GasPriceConnector::new();

		let record = connector
			.perform(&ctx, &Bundle::new(json!({})))
			.await
			.unwrap();

		assert_eq!(record["gas_price"], "5000000000");
		assert!(DateTime::parse_from_rfc3339(record["id"].as_str().unwrap()).is_ok());
	}

	#[tokio::test]
	async fn test_absent_block_id_queries_latest() {
		let (ctx, rpc, _) = mock_context(priced_mock("1"));
		let connector = GasPriceConnector::new();

		connector
			.perform(&ctx, &Bundle::new(json!({})))
			.await
			.unwrap();

		assert_eq!(
			rpc.calls.lock().unwrap().as_slice(),
			&[RecordedCall::GasPrice { block_id: None }]
		);
	}

	#[tokio::test]
	async fn test_block_id_passes_through_by_height_and_hash() {
		let (ctx, rpc, _) = mock_context(priced_mock("1"));
		let connector = GasPriceConnector::new();

		connector
			.perform(&ctx, &Bundle::new(json!({ "block_id": 17824600 })))
			.await
			.unwrap();
		connector
			.perform(
				&ctx,
				&Bundle::new(json!({ "block_id": "AXa8CHDQSA8RdFCt12rtpFraVq4fDUgJbLPxwbaZcZrj" })),
			)
			.await
			.unwrap();

		let calls = rpc.calls.lock().unwrap();
		assert_eq!(
			calls[0],
			RecordedCall::GasPrice {
				block_id: Some(BlockId::Height(17824600)),
			}
		);
		assert_eq!(
			calls[1],
			RecordedCall::GasPrice {
				block_id: Some(BlockId::Hash(
					"AXa8CHDQSA8RdFCt12rtpFraVq4fDUgJbLPxwbaZcZrj".to_string()
				)),
			}
		);
	}

	#[tokio::test]
	async fn test_uses_default_network_endpoint() {
		let (ctx, _, provider) = mock_context(priced_mock("1"));
		let connector = GasPriceConnector::new();

		connector
			.perform(&ctx, &Bundle::new(json!({})))
			.await
			.unwrap();

		assert_eq!(
			provider.endpoints.lock().unwrap().as_slice(),
			&["https://rpc.testnet.near.org".to_string()]
		);
	}

	#[tokio::test]
	async fn test_rpc_error_propagates() {
		let (ctx, _, _) = mock_context(MockRpc {
			fail_with: Some((-32000, "UNKNOWN_BLOCK".to_string())),
			..MockRpc::default()
		});
		let connector = GasPriceConnector::new();

		let err = connector
			.perform(&ctx, &Bundle::new(json!({ "block_id": 1 })))
			.await
			.unwrap_err();
		assert!(matches!(err, ConnectorError::Rpc { code: -32000, .. }));
	}

	#[test]
	fn test_definition_manifest() {
		let connector = GasPriceConnector::new();
		let manifest = connector.definition().manifest();
		assert_eq!(manifest["key"], "gas_price");
		assert_eq!(manifest["noun"], "Gas Price");
		assert_eq!(
			manifest["operation"]["inputFields"],
			json!([{ "key": "block_id", "label": "Block ID",
			         "helpText": "Block height or base58 block hash." }])
		);
	}
}
