//! OAuth 1.0a (RFC 5849) signing for two-legged launches.
//!
//! The launch builder only depends on the [`OAuthSigner`] and [`NonceClock`] traits; the
//! stock [`HmacSha1Signer`] and [`SystemNonceClock`] cover what LTI 1.x platforms expect.

pub mod encoding;
pub mod hmac_sha1;
pub mod nonce;

pub use encoding::*;
pub use hmac_sha1::*;
pub use nonce::*;

// self
use crate::{_prelude::*, auth::ConsumerIdentity, error::SigningError, params::ParameterSet};

/// HTTP method used for every LTI launch.
pub const LAUNCH_METHOD: &str = "POST";

/// Signature methods understood by the crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureMethod {
	/// HMAC over SHA-1, the method mandated by LTI 1.x.
	#[default]
	#[serde(rename = "HMAC-SHA1")]
	HmacSha1,
}
impl SignatureMethod {
	/// Returns the `oauth_signature_method` value.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignatureMethod::HmacSha1 => "HMAC-SHA1",
		}
	}
}
impl Display for SignatureMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Signing primitive that turns a parameter mapping into a signed one.
///
/// Implementations add `oauth_signature_method`, `oauth_consumer_key` (when absent), and
/// `oauth_signature`, computing the signature over every other parameter. No token credentials
/// are involved.
pub trait OAuthSigner
where
	Self: Send + Sync,
{
	/// Signs `params` for a form-encoded request to `url`.
	fn sign(
		&self,
		method: &str,
		url: &str,
		params: ParameterSet,
		consumer: &ConsumerIdentity,
	) -> Result<ParameterSet, SigningError>;
}
