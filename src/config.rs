//! Tool configuration supplied by the host platform when a tool is registered.

// self
use crate::{_prelude::*, error::ConfigError};

/// Tool registration data merged into a launch builder with
/// [`LaunchRequestBuilder::apply_config`](crate::consumer::LaunchRequestBuilder::apply_config).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
	/// URL the launch form is posted to.
	pub launch_url: String,
	/// Custom parameters attached to every launch (keys with or without the `custom_` prefix).
	#[serde(default)]
	pub custom_params: BTreeMap<String, String>,
	/// Display title of the tool.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Human-readable description of the tool.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// HTTPS variant of the launch URL, when the tool publishes one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub secure_launch_url: Option<String>,
}
impl LaunchConfig {
	/// Creates a configuration for the provided launch URL.
	pub fn new(launch_url: impl Into<String>) -> Self {
		Self { launch_url: launch_url.into(), ..Default::default() }
	}

	/// Adds a custom parameter.
	pub fn with_custom_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.custom_params.insert(key.into(), value.into());

		self
	}

	/// Sets the display title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());

		self
	}

	/// Sets the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
	}

	/// Sets the HTTPS launch URL.
	pub fn with_secure_launch_url(mut self, url: impl Into<String>) -> Self {
		self.secure_launch_url = Some(url.into());

		self
	}

	/// Parses a JSON configuration document, reporting the path of the offending field.
	pub fn from_json(payload: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(payload);

		serde_path_to_error::deserialize(&mut de).map_err(|source| ConfigError::ConfigParse { source })
	}
}
