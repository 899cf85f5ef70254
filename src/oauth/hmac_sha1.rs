//! `HMAC-SHA1` signature method (RFC 5849 §3.4.2) for consumer-only requests.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	auth::ConsumerIdentity,
	error::SigningError,
	oauth::{OAuthSigner, SignatureMethod, encoding},
	params::{ParamValue, ParameterSet},
};

type HmacSha1 = Hmac<Sha1>;

/// `HMAC-SHA1` signer for two-legged (consumer-only) OAuth 1.0a requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha1Signer;
impl HmacSha1Signer {
	/// Computes the base64 signature of `params` without mutating them.
	pub fn signature(
		&self,
		method: &str,
		url: &str,
		params: &ParameterSet,
		consumer: &ConsumerIdentity,
	) -> Result<String, SigningError> {
		let base = encoding::signature_base_string(method, url, params)?;
		let mac = keyed_mac(consumer, &base)?;

		Ok(STANDARD.encode(mac.finalize().into_bytes()))
	}

	/// Checks the `oauth_signature` carried by `params` in constant time.
	pub fn verify(
		&self,
		method: &str,
		url: &str,
		params: &ParameterSet,
		consumer: &ConsumerIdentity,
	) -> Result<(), SigningError> {
		let provided = params
			.get("oauth_signature")
			.and_then(ParamValue::as_str)
			.ok_or(SigningError::MissingSignature)?;
		let provided = STANDARD.decode(provided).map_err(|_| SigningError::MalformedSignature)?;
		let base = encoding::signature_base_string(method, url, params)?;

		keyed_mac(consumer, &base)?
			.verify_slice(&provided)
			.map_err(|_| SigningError::SignatureMismatch)
	}
}
impl OAuthSigner for HmacSha1Signer {
	fn sign(
		&self,
		method: &str,
		url: &str,
		mut params: ParameterSet,
		consumer: &ConsumerIdentity,
	) -> Result<ParameterSet, SigningError> {
		params
			.entry("oauth_consumer_key".into())
			.or_insert_with(|| ParamValue::from(consumer.key()));
		params.insert(
			"oauth_signature_method".into(),
			ParamValue::from(SignatureMethod::HmacSha1.as_str()),
		);

		let signature = self.signature(method, url, &params, consumer)?;

		params.insert("oauth_signature".into(), ParamValue::Single(signature));

		Ok(params)
	}
}

fn keyed_mac(consumer: &ConsumerIdentity, base: &str) -> Result<HmacSha1, SigningError> {
	let mut mac = HmacSha1::new_from_slice(consumer.secret().signing_key().as_bytes())
		.map_err(|_| SigningError::InvalidKey)?;

	mac.update(base.as_bytes());

	Ok(mac)
}
