//! Connector definition objects and the traits the registry dispatches on.
//!
//! A definition is a static record built once at registration time; the host
//! platform consumes its JSON manifest form for action listing. The perform
//! side lives behind `ResourceConnector`/`SearchConnector` trait objects.

use crate::bundle::{Bundle, Context};
use crate::errors::Result;
use crate::fields::InputField;
use async_trait::async_trait;
use serde_json::{json, Value};

/// User-facing label and description for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorDisplay {
	pub label: String,
	pub description: String,
}

/// Whether an action yields one record or a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
	Resource,
	Search,
}

impl ConnectorKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ConnectorKind::Resource => "resource",
			ConnectorKind::Search => "search",
		}
	}
}

/// Static definition record shared by every connector.
///
/// Immutable once registered; created at registry build, lives for the
/// process.
#[derive(Debug, Clone)]
pub struct ConnectorDefinition {
	pub key: String,
	pub noun: String,
	pub kind: ConnectorKind,
	pub display: ConnectorDisplay,
	pub input_fields: Vec<InputField>,
	pub sample: Value,
}

impl ConnectorDefinition {
	pub fn resource(key: impl Into<String>, noun: impl Into<String>) -> DefinitionBuilder {
		DefinitionBuilder::new(key, noun, ConnectorKind::Resource)
	}

	pub fn search(key: impl Into<String>, noun: impl Into<String>) -> DefinitionBuilder {
		DefinitionBuilder::new(key, noun, ConnectorKind::Search)
	}

	/// The definition object shape the host platform expects for listing.
	pub fn manifest(&self) -> Value {
		json!({
			"key": self.key,
			"noun": self.noun,
			"display": {
				"label": self.display.label,
				"description": self.display.description,
			},
			"operation": {
				"inputFields": self.input_fields,
				"sample": self.sample,
			},
		})
	}
}

/// Builder for [`ConnectorDefinition`].
pub struct DefinitionBuilder {
	key: String,
	noun: String,
	kind: ConnectorKind,
	label: String,
	description: String,
	input_fields: Vec<InputField>,
	sample: Value,
}

impl DefinitionBuilder {
	fn new(key: impl Into<String>, noun: impl Into<String>, kind: ConnectorKind) -> Self {
		Self {
			key: key.into(),
			noun: noun.into(),
			kind,
			label: String::new(),
			description: String::new(),
			input_fields: Vec::new(),
			sample: Value::Null,
		}
	}

	pub fn display(mut self, label: impl Into<String>, description: impl Into<String>) -> Self {
		self.label = label.into();
		self.description = description.into();
		self
	}

	pub fn input_field(mut self, field: InputField) -> Self {
		self.input_fields.push(field);
		self
	}

	pub fn sample(mut self, sample: Value) -> Self {
		self.sample = sample;
		self
	}

	pub fn build(self) -> ConnectorDefinition {
		ConnectorDefinition {
			key: self.key,
			noun: self.noun,
			kind: self.kind,
			display: ConnectorDisplay {
				label: self.label,
				description: self.description,
			},
			input_fields: self.input_fields,
			sample: self.sample,
		}
	}
}

/// Single-result action: one record per invocation.
#[async_trait]
pub trait ResourceConnector: Send + Sync {
	fn definition(&self) -> &ConnectorDefinition;

	async fn perform(&self, ctx: &Context, bundle: &Bundle) -> Result<Value>;
}

/// Multi-result action: zero or more records per invocation.
#[async_trait]
pub trait SearchConnector: Send + Sync {
	fn definition(&self) -> &ConnectorDefinition;

	async fn search(&self, ctx: &Context, bundle: &Bundle) -> Result<Vec<Value>>;
}
