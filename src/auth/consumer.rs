//! Consumer identity (key + secret pair) that identifies the launching platform.

// self
use crate::{_prelude::*, auth::ConsumerSecret};

/// Immutable OAuth 1.0a consumer credential pair.
///
/// Values are not validated on construction; the launch builder reports empty credentials when a
/// launch is attempted so callers can assemble configuration in any order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerIdentity {
	key: String,
	secret: ConsumerSecret,
}
impl ConsumerIdentity {
	/// Creates a new identity from the consumer key and shared secret.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { key: key.into(), secret: ConsumerSecret::new(secret) }
	}

	/// OAuth `oauth_consumer_key` value.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Shared secret used to derive the HMAC signing key.
	pub fn secret(&self) -> &ConsumerSecret {
		&self.secret
	}
}
