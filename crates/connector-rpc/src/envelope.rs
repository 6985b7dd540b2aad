//! JSON-RPC 2.0 request/response envelopes.

use connector_types::{ConnectorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outgoing request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
	pub jsonrpc: &'static str,
	pub id: u64,
	pub method: String,
	pub params: Value,
}

impl JsonRpcRequest {
	pub fn new(id: u64, method: impl Into<String>, params: Value) -> Self {
		Self {
			jsonrpc: "2.0",
			id,
			method: method.into(),
			params,
		}
	}
}

/// Error object as returned by the node.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcErrorObject {
	pub code: i64,
	pub message: String,
	#[serde(default)]
	pub data: Option<Value>,
}

/// Incoming response envelope. Exactly one of `result`/`error` is present
/// on a conforming node.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
	#[serde(default)]
	pub result: Option<Value>,
	#[serde(default)]
	pub error: Option<JsonRpcErrorObject>,
}

impl JsonRpcResponse {
	/// Extract the result, mapping a node error object to
	/// [`ConnectorError::Rpc`].
	pub fn into_result(self) -> Result<Value> {
		if let Some(error) = self.error {
			let message = match &error.data {
				Some(data) => format!("{} ({})", error.message, data),
				None => error.message.clone(),
			};
			return Err(ConnectorError::Rpc {
				code: error.code,
				message,
			});
		}
		self.result.ok_or_else(|| {
			ConnectorError::Network("RPC response carried neither result nor error".to_string())
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_request_wire_shape() {
		let request = JsonRpcRequest::new(7, "gas_price", json!([null]));
		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			json!({
				"jsonrpc": "2.0",
				"id": 7,
				"method": "gas_price",
				"params": [null],
			})
		);
	}

	#[test]
	fn test_result_extraction() {
		let response: JsonRpcResponse =
			serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 1, "result": { "gas_price": "1" } }))
				.unwrap();
		assert_eq!(response.into_result().unwrap(), json!({ "gas_price": "1" }));
	}

	#[test]
	fn test_error_object_maps_to_rpc_error() {
		let response: JsonRpcResponse = serde_json::from_value(json!({
			"jsonrpc": "2.0",
			"id": 1,
			"error": { "code": -32000, "message": "Server error", "data": "UNKNOWN_BLOCK" },
		}))
		.unwrap();

		match response.into_result().unwrap_err() {
			ConnectorError::Rpc { code, message } => {
				assert_eq!(code, -32000);
				assert!(message.contains("UNKNOWN_BLOCK"));
			}
			other => panic!("expected Rpc error, got {:?}", other),
		}
	}

	#[test]
	fn test_empty_response_is_a_network_error() {
		let response: JsonRpcResponse =
			serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 1 })).unwrap();
		assert!(matches!(
			response.into_result().unwrap_err(),
			ConnectorError::Network(_)
		));
	}
}
