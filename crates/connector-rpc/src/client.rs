//! The reqwest-backed RPC client and its provider.

use crate::envelope::{JsonRpcRequest, JsonRpcResponse};
use async_trait::async_trait;
use connector_types::{
	AccountId, BlockId, BlockReference, ConnectorError, GasPriceView, NearRpc, Result,
	RpcProvider, StateChangesView,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10000);

/// Params for the `gas_price` method: a one-element positional array, `null`
/// meaning the latest block.
pub fn gas_price_params(block_id: Option<BlockId>) -> Value {
	json!([block_id])
}

/// Params for `EXPERIMENTAL_changes` filtered to all access-key changes.
pub fn access_key_changes_params(account_ids: &[AccountId], block: &BlockReference) -> Result<Value> {
	let mut params = json!({
		"changes_type": "all_access_key_changes",
		"account_ids": account_ids,
	});

	// BlockReference serializes to a single-key object; fold that key into
	// the params object as the node expects.
	let block_value = serde_json::to_value(block)?;
	if let (Value::Object(params_map), Value::Object(block_map)) = (&mut params, block_value) {
		params_map.extend(block_map);
	}

	Ok(params)
}

/// JSON-RPC client bound to one endpoint URL.
pub struct JsonRpcClient {
	endpoint: String,
	http: reqwest::Client,
	next_id: AtomicU64,
}

impl JsonRpcClient {
	pub fn new(endpoint: impl Into<String>) -> Result<Self> {
		Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
	}

	pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
		let http = reqwest::Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| ConnectorError::Network(format!("Failed to build HTTP client: {}", e)))?;

		Ok(Self {
			endpoint: endpoint.into(),
			http,
			next_id: AtomicU64::new(1),
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	async fn call(&self, method: &str, params: Value) -> Result<Value> {
		let request = JsonRpcRequest::new(
			self.next_id.fetch_add(1, Ordering::Relaxed),
			method,
			params,
		);
		debug!("Calling {} on {}", method, self.endpoint);

		let response = self
			.http
			.post(&self.endpoint)
			.json(&request)
			.send()
			.await
			.map_err(|e| ConnectorError::Network(format!("RPC request failed: {}", e)))?;

		let envelope: JsonRpcResponse = response
			.json()
			.await
			.map_err(|e| ConnectorError::Network(format!("Invalid RPC response: {}", e)))?;

		envelope.into_result()
	}
}

#[async_trait]
impl NearRpc for JsonRpcClient {
	async fn gas_price(&self, block_id: Option<BlockId>) -> Result<GasPriceView> {
		let result = self.call("gas_price", gas_price_params(block_id)).await?;
		Ok(serde_json::from_value(result)?)
	}

	async fn access_key_changes(
		&self,
		account_ids: &[AccountId],
		block: BlockReference,
	) -> Result<StateChangesView> {
		let params = access_key_changes_params(account_ids, &block)?;
		let result = self.call("EXPERIMENTAL_changes", params).await?;
		Ok(serde_json::from_value(result)?)
	}
}

/// Provider handing out HTTP clients per resolved endpoint.
pub struct HttpRpcProvider {
	timeout: Duration,
}

impl HttpRpcProvider {
	pub fn new() -> Self {
		Self {
			timeout: DEFAULT_TIMEOUT,
		}
	}

	pub fn with_timeout(timeout: Duration) -> Self {
		Self { timeout }
	}
}

impl Default for HttpRpcProvider {
	fn default() -> Self {
		Self::new()
	}
}

impl RpcProvider for HttpRpcProvider {
	fn connect(&self, endpoint: &str) -> Result<Arc<dyn NearRpc>> {
		info!("Connecting RPC client to {}", endpoint);
		Ok(Arc::new(JsonRpcClient::with_timeout(endpoint, self.timeout)?))
	}
}
