//! Output record construction.
//!
//! Every connector result is a flat JSON object carrying a synthetic `id`:
//! the RFC 3339 timestamp of the call. The id has no relation to chain state
//! and is generated fresh per invocation.

use crate::errors::{ConnectorError, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Current UTC time in the millisecond RFC 3339 form used for record ids.
pub fn record_id() -> String {
	Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serialize a payload and merge a fresh `id` into it.
pub fn output_record<T: Serialize>(payload: &T) -> Result<Value> {
	let value = serde_json::to_value(payload)?;
	let mut object = match value {
		Value::Object(map) => map,
		other => {
			return Err(ConnectorError::Other(anyhow::anyhow!(
				"Output payload must be a JSON object, got {}",
				other
			)))
		}
	};

	let mut record = Map::with_capacity(object.len() + 1);
	record.insert("id".to_string(), Value::String(record_id()));
	record.append(&mut object);
	Ok(Value::Object(record))
}
