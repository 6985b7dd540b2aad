//! Error types for the connector system.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConnectorError>;

#[derive(Error, Debug)]
pub enum ConnectorError {
	#[error("Input error: {0}")]
	Input(String),

	#[error("Configuration error: {0}")]
	Config(String),

	#[error("Network error: {0}")]
	Network(String),

	#[error("RPC error {code}: {message}")]
	Rpc { code: i64, message: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl ConnectorError {
	/// True when the error originated on the remote node rather than in
	/// this process.
	pub fn is_remote(&self) -> bool {
		matches!(self, ConnectorError::Rpc { .. } | ConnectorError::Network(_))
	}
}
