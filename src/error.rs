//! Crate-level error types shared by the launch builder, configuration, and signer.

// self
use crate::{_prelude::*, auth::ConsumerSecret};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; the launch must be aborted.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// OAuth 1.0a signing primitive failure.
	#[error(transparent)]
	Signing(#[from] SigningError),
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// One or more required launch fields are empty.
	#[error("Tool consumer does not have all required attributes: {}.", missing.join(", "))]
	InvalidLtiConfig {
		/// Current values of the required fields.
		fields: RequiredFields,
		/// Names of the required fields that are empty.
		missing: Vec<&'static str>,
	},
	/// A launch configuration document could not be parsed.
	#[error("Launch configuration is malformed.")]
	ConfigParse {
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Snapshot of the four required launch fields, captured for diagnostics.
///
/// The secret keeps its redacting wrapper so the snapshot is safe to log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiredFields {
	/// OAuth consumer key.
	pub consumer_key: Option<String>,
	/// OAuth consumer secret.
	pub consumer_secret: Option<ConsumerSecret>,
	/// LTI `resource_link_id`.
	pub resource_link_id: Option<String>,
	/// Tool launch URL.
	pub launch_url: Option<String>,
}
impl RequiredFields {
	/// Required field names in validation order.
	pub const NAMES: [&'static str; 4] =
		["consumer_key", "consumer_secret", "resource_link_id", "launch_url"];

	/// Returns the names of the fields that are absent or empty.
	pub fn missing(&self) -> Vec<&'static str> {
		let present = [
			is_set(self.consumer_key.as_deref()),
			self.consumer_secret.as_ref().is_some_and(|secret| !secret.is_empty()),
			is_set(self.resource_link_id.as_deref()),
			is_set(self.launch_url.as_deref()),
		];

		Self::NAMES.into_iter().zip(present).filter(|(_, ok)| !ok).map(|(name, _)| name).collect()
	}

	/// Returns `true` when every required field is set.
	pub fn is_complete(&self) -> bool {
		self.missing().is_empty()
	}
}

/// Failures raised by the OAuth 1.0a signing primitive.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum SigningError {
	/// The request URL cannot be parsed.
	#[error("Launch URL is invalid.")]
	InvalidUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Only `http` and `https` URLs can be signed.
	#[error("Launch URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// URL that failed validation.
		url: String,
	},
	/// The request URL has no host component.
	#[error("Launch URL has no host: {url}.")]
	MissingHost {
		/// URL that failed validation.
		url: String,
	},
	/// The HMAC key could not be initialized.
	#[error("Signing key is invalid.")]
	InvalidKey,
	/// Verification was requested for parameters without `oauth_signature`.
	#[error("Request does not carry an oauth_signature.")]
	MissingSignature,
	/// The supplied signature is not valid base64.
	#[error("The oauth_signature value is not valid base64.")]
	MalformedSignature,
	/// The supplied signature does not match the recomputed one.
	#[error("The oauth_signature value does not match the request.")]
	SignatureMismatch,
}

fn is_set(value: Option<&str>) -> bool {
	value.is_some_and(|v| !v.is_empty())
}
