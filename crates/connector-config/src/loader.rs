//! Configuration loading from files.

use crate::types::ConnectorsConfig;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
	/// Load configuration from file, dispatching on extension.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ConnectorsConfig> {
		let path = path.as_ref();
		info!("Loading configuration from {:?}", path);

		let contents = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {:?}", path))?;

		let config = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml(&contents)?,
			Some("json") => Self::from_json(&contents)?,
			Some("yaml") | Some("yml") => Self::from_yaml(&contents)?,
			_ => anyhow::bail!("Unsupported config format: {:?}", path),
		};

		Self::validate_config(&config)?;
		Ok(config)
	}

	/// Load from TOML string
	pub fn from_toml(contents: &str) -> Result<ConnectorsConfig> {
		toml::from_str(contents).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))
	}

	/// Load from JSON string
	pub fn from_json(contents: &str) -> Result<ConnectorsConfig> {
		serde_json::from_str(contents).context("Failed to parse JSON")
	}

	/// Load from YAML string
	pub fn from_yaml(contents: &str) -> Result<ConnectorsConfig> {
		serde_yaml::from_str(contents).context("Failed to parse YAML")
	}

	/// Validate configuration
	fn validate_config(config: &ConnectorsConfig) -> Result<()> {
		if config.networks.is_empty() {
			anyhow::bail!("At least one network must be configured");
		}

		for (network, entry) in &config.networks {
			if !entry.rpc_url.starts_with("http://") && !entry.rpc_url.starts_with("https://") {
				anyhow::bail!(
					"Invalid RPC URL for network {}: {}",
					network,
					entry.rpc_url
				);
			}
		}

		if !config.networks.contains_key(&config.default_network) {
			anyhow::bail!(
				"Default network {} has no configured endpoint",
				config.default_network
			);
		}

		if config.rpc.timeout_ms == 0 {
			anyhow::bail!("RPC timeout must be non-zero");
		}

		Ok(())
	}
}
