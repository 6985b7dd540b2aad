//! Input field descriptors.
//!
//! Each connector declares an ordered list of these; the host platform renders
//! them as the action's form. Only the `key` is mandatory, everything else is
//! presentation metadata.

use serde::{Deserialize, Serialize};

/// Value type hint for the host platform's form renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
	String,
	Number,
}

/// A single input field descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
	pub key: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub field_type: Option<FieldType>,
	#[serde(skip_serializing_if = "Vec::is_empty", default)]
	pub choices: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default: Option<String>,
	#[serde(skip_serializing_if = "std::ops::Not::not", default)]
	pub required: bool,
	#[serde(skip_serializing_if = "std::ops::Not::not", default)]
	pub list: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub help_text: Option<String>,
}

impl InputField {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: None,
			field_type: None,
			choices: Vec::new(),
			default: None,
			required: false,
			list: false,
			help_text: None,
		}
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn field_type(mut self, field_type: FieldType) -> Self {
		self.field_type = Some(field_type);
		self
	}

	pub fn choices<I, S>(mut self, choices: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.choices = choices.into_iter().map(Into::into).collect();
		self
	}

	pub fn default_value(mut self, default: impl Into<String>) -> Self {
		self.default = Some(default.into());
		self
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn list(mut self) -> Self {
		self.list = true;
		self
	}

	pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}
}
