//! Registry for connector definitions and dispatch.

use connector_types::{
	Bundle, ConnectorError, Context, ResourceConnector, Result, SearchConnector,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of every connector exposed to the host platform.
///
/// Definitions are immutable once registered and live for the process; the
/// registry itself holds no per-invocation state.
#[derive(Default)]
pub struct ConnectorRegistry {
	resources: HashMap<String, Arc<dyn ResourceConnector>>,
	searches: HashMap<String, Arc<dyn SearchConnector>>,
}

impl ConnectorRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a resource connector.
	pub fn register_resource(&mut self, connector: Arc<dyn ResourceConnector>) -> Result<()> {
		let key = connector.definition().key.clone();
		if self.resources.contains_key(&key) {
			return Err(ConnectorError::Config(format!(
				"Resource connector {} already registered",
				key
			)));
		}
		debug!("Registered resource connector: {}", key);
		self.resources.insert(key, connector);
		Ok(())
	}

	/// Register a search connector.
	pub fn register_search(&mut self, connector: Arc<dyn SearchConnector>) -> Result<()> {
		let key = connector.definition().key.clone();
		if self.searches.contains_key(&key) {
			return Err(ConnectorError::Config(format!(
				"Search connector {} already registered",
				key
			)));
		}
		debug!("Registered search connector: {}", key);
		self.searches.insert(key, connector);
		Ok(())
	}

	pub fn resource(&self, key: &str) -> Option<Arc<dyn ResourceConnector>> {
		self.resources.get(key).cloned()
	}

	pub fn search(&self, key: &str) -> Option<Arc<dyn SearchConnector>> {
		self.searches.get(key).cloned()
	}

	/// Definition objects for the host platform's action listing, grouped by
	/// kind and sorted by key for a stable manifest.
	pub fn manifest(&self) -> Value {
		let mut resources: Vec<_> = self.resources.values().collect();
		resources.sort_by_key(|c| c.definition().key.clone());
		let mut searches: Vec<_> = self.searches.values().collect();
		searches.sort_by_key(|c| c.definition().key.clone());

		json!({
			"resources": resources
				.iter()
				.map(|c| c.definition().manifest())
				.collect::<Vec<_>>(),
			"searches": searches
				.iter()
				.map(|c| c.definition().manifest())
				.collect::<Vec<_>>(),
		})
	}

	/// Invoke a resource connector by key.
	pub async fn perform_resource(
		&self,
		key: &str,
		ctx: &Context,
		bundle: &Bundle,
	) -> Result<Value> {
		let connector = self
			.resource(key)
			.ok_or_else(|| ConnectorError::Input(format!("Unknown resource connector: {}", key)))?;
		connector.perform(ctx, bundle).await
	}

	/// Invoke a search connector by key.
	pub async fn perform_search(
		&self,
		key: &str,
		ctx: &Context,
		bundle: &Bundle,
	) -> Result<Vec<Value>> {
		let connector = self
			.search(key)
			.ok_or_else(|| ConnectorError::Input(format!("Unknown search connector: {}", key)))?;
		connector.search(ctx, bundle).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::connectors::{AccessKeyChangesConnector, GasPriceConnector};
	use crate::testing::{mock_context, MockRpc};
	use connector_types::GasPriceView;
	use serde_json::json;

	fn registry() -> ConnectorRegistry {
		let mut registry = ConnectorRegistry::new();
		registry
			.register_resource(Arc::new(GasPriceConnector::new()))
			.unwrap();
		registry
			.register_search(Arc::new(AccessKeyChangesConnector::new()))
			.unwrap();
		registry
	}

	#[test]
	fn test_duplicate_key_rejected() {
		let mut registry = registry();
		let err = registry
			.register_resource(Arc::new(GasPriceConnector::new()))
			.unwrap_err();
		assert!(matches!(err, ConnectorError::Config(_)));
	}

	#[test]
	fn test_manifest_groups_by_kind() {
		let manifest = registry().manifest();
		assert_eq!(manifest["resources"].as_array().unwrap().len(), 1);
		assert_eq!(manifest["searches"].as_array().unwrap().len(), 1);
		assert_eq!(
			manifest["searches"][0]["display"]["label"],
			"View access key changes (all)"
		);
	}

	#[tokio::test]
	async fn test_dispatch_by_key() {
		let (ctx, _, _) = mock_context(MockRpc {
			gas_price_view: Some(GasPriceView {
				gas_price: "42".to_string(),
			}),
			..MockRpc::default()
		});

		let record = registry()
			.perform_resource("gas_price", &ctx, &Bundle::new(json!({})))
			.await
			.unwrap();
		assert_eq!(record["gas_price"], "42");
	}

	#[tokio::test]
	async fn test_unknown_key_is_an_input_error() {
		let (ctx, _, _) = mock_context(MockRpc::default());
		let err = registry()
			.perform_search("no_such_search", &ctx, &Bundle::new(json!({})))
			.await
			.unwrap_err();
		assert!(matches!(err, ConnectorError::Input(_)));
	}
}
