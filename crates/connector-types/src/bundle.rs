//! Per-invocation state: the input bundle and the execution context.

use crate::errors::{ConnectorError, Result};
use crate::network::NetworkSettings;
use crate::rpc::RpcProvider;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// User-supplied field values for one invocation. Constructed by the host
/// platform per call; consumed once.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
	pub input_data: Value,
}

impl Bundle {
	pub fn new(input_data: Value) -> Self {
		Self { input_data }
	}

	/// Deserialize the input data into the connector's typed input struct.
	pub fn input<T: DeserializeOwned>(&self) -> Result<T> {
		serde_json::from_value(self.input_data.clone())
			.map_err(|e| ConnectorError::Input(format!("Invalid input data: {}", e)))
	}
}

/// Capabilities handed to a connector by the runtime.
///
/// Carries the injected RPC provider and the resolved endpoint table; holds
/// no per-invocation state, so one context serves many independent calls.
#[derive(Clone)]
pub struct Context {
	pub rpc: Arc<dyn RpcProvider>,
	pub networks: NetworkSettings,
}

impl Context {
	pub fn new(rpc: Arc<dyn RpcProvider>, networks: NetworkSettings) -> Self {
		Self { rpc, networks }
	}
}
