//! Configuration types for the connector runtime.

use connector_types::{NearNetwork, NetworkSettings};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete connector configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectorsConfig {
	/// Per-network endpoint entries, keyed by network name.
	pub networks: HashMap<NearNetwork, NetworkEntry>,
	/// Network used when a bundle names none.
	pub default_network: NearNetwork,
	/// RPC transport settings.
	pub rpc: RpcSettings,
}

/// Endpoint entry for one named network.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkEntry {
	/// RPC endpoint URL.
	pub rpc_url: String,
}

/// Transport settings for the RPC client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcSettings {
	/// Per-request timeout in milliseconds.
	pub timeout_ms: u64,
}

impl Default for RpcSettings {
	fn default() -> Self {
		Self { timeout_ms: 10000 }
	}
}

impl Default for ConnectorsConfig {
	fn default() -> Self {
		let mut networks = HashMap::new();
		for network in [NearNetwork::Mainnet, NearNetwork::Testnet] {
			networks.insert(
				network,
				NetworkEntry {
					rpc_url: network.default_rpc_url().to_string(),
				},
			);
		}
		Self {
			networks,
			default_network: NearNetwork::Testnet,
			rpc: RpcSettings::default(),
		}
	}
}

impl ConnectorsConfig {
	/// Resolved endpoint table handed to the connector runtime.
	pub fn network_settings(&self) -> NetworkSettings {
		let endpoints = self
			.networks
			.iter()
			.map(|(network, entry)| (*network, entry.rpc_url.clone()))
			.collect();
		NetworkSettings::new(endpoints, self.default_network)
	}
}
