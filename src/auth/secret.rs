//! Shared consumer secret and the OAuth 1.0a signing key derived from it.

// self
use crate::{_prelude::*, oauth};

/// Secret half of the consumer credential pair.
///
/// Formatting never prints the value. The only ways to reach it are [`expose`](Self::expose)
/// and [`signing_key`](Self::signing_key).
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsumerSecret(String);
impl ConsumerSecret {
	/// Wraps the shared secret agreed with the tool provider.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw secret. Keep it out of logs and error messages.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// An empty secret cannot authenticate a launch.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// HMAC key for two-legged requests: `enc(secret)&` with an empty token secret.
	pub fn signing_key(&self) -> String {
		format!("{}&", oauth::percent_encode(&self.0))
	}
}
impl Debug for ConsumerSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ConsumerSecret(<redacted>)")
	}
}
impl Display for ConsumerSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn formatting_never_prints_the_secret() {
		let secret = ConsumerSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "ConsumerSecret(<redacted>)");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(secret.expose(), "super-secret");
	}

	#[test]
	fn signing_key_encodes_secret_and_appends_separator() {
		assert_eq!(ConsumerSecret::new("a&b c").signing_key(), "a%26b%20c&");
		assert_eq!(ConsumerSecret::default().signing_key(), "&");
	}

	#[test]
	fn emptiness_reflects_the_raw_value() {
		assert!(ConsumerSecret::default().is_empty());
		assert!(!ConsumerSecret::new("cs").is_empty());
	}

	#[test]
	fn serializes_as_a_plain_string() {
		let secret: ConsumerSecret =
			serde_json::from_str("\"cs\"").expect("Secret fixture should deserialize.");

		assert_eq!(secret.expose(), "cs");
		assert_eq!(serde_json::to_string(&secret).expect("Secret should serialize."), "\"cs\"");
	}
}
