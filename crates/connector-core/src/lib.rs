//! Connector runtime: shared fields, resolvers, the registry, and the
//! concrete NEAR read connectors.

pub mod common;
pub mod connectors;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use registry::ConnectorRegistry;

use connector_types::Result;
use connectors::{AccessKeyChangesConnector, GasPriceConnector};
use std::sync::Arc;

/// Registry wired with every connector this repo ships.
pub fn default_registry() -> Result<ConnectorRegistry> {
	let mut registry = ConnectorRegistry::new();
	registry.register_resource(Arc::new(GasPriceConnector::new()))?;
	registry.register_search(Arc::new(AccessKeyChangesConnector::new()))?;
	Ok(registry)
}
