//! Named networks and the runtime endpoint table.

use crate::errors::{ConnectorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Closed set of networks a connector can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NearNetwork {
	Mainnet,
	Testnet,
}

impl NearNetwork {
	/// Public RPC endpoint for this network.
	pub fn default_rpc_url(&self) -> &'static str {
		match self {
			NearNetwork::Mainnet => "https://rpc.mainnet.near.org",
			NearNetwork::Testnet => "https://rpc.testnet.near.org",
		}
	}
}

impl fmt::Display for NearNetwork {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NearNetwork::Mainnet => write!(f, "mainnet"),
			NearNetwork::Testnet => write!(f, "testnet"),
		}
	}
}

impl FromStr for NearNetwork {
	type Err = ConnectorError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"mainnet" => Ok(NearNetwork::Mainnet),
			"testnet" => Ok(NearNetwork::Testnet),
			other => Err(ConnectorError::Input(format!("Unknown network: {}", other))),
		}
	}
}

/// Resolved endpoint table handed to connectors at runtime.
///
/// Built from defaults or from `connector-config`; the endpoint resolver in
/// `connector-core` consults this when a bundle names a network.
#[derive(Debug, Clone)]
pub struct NetworkSettings {
	endpoints: HashMap<NearNetwork, String>,
	pub default_network: NearNetwork,
}

impl Default for NetworkSettings {
	fn default() -> Self {
		let mut endpoints = HashMap::new();
		for network in [NearNetwork::Mainnet, NearNetwork::Testnet] {
			endpoints.insert(network, network.default_rpc_url().to_string());
		}
		Self {
			endpoints,
			// The original integration pointed at testnet out of the box.
			default_network: NearNetwork::Testnet,
		}
	}
}

impl NetworkSettings {
	pub fn new(endpoints: HashMap<NearNetwork, String>, default_network: NearNetwork) -> Self {
		Self {
			endpoints,
			default_network,
		}
	}

	/// Endpoint URL for a named network.
	pub fn endpoint(&self, network: NearNetwork) -> Result<&str> {
		self.endpoints
			.get(&network)
			.map(|s| s.as_str())
			.ok_or_else(|| {
				ConnectorError::Config(format!("No endpoint configured for network {}", network))
			})
	}

	/// Endpoint URL for the configured default network.
	pub fn default_endpoint(&self) -> Result<&str> {
		self.endpoint(self.default_network)
	}
}
