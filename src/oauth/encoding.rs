//! RFC 5849 percent-encoding and signature base string construction.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
// self
use crate::{_prelude::*, error::SigningError, params::ParameterSet};

/// Everything except the RFC 3986 unreserved characters.
const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `value` as required by RFC 5849 §3.6.
pub fn percent_encode(value: &str) -> String {
	utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Decodes `%XX` sequences once; invalid UTF-8 is replaced rather than rejected.
pub fn percent_decode(value: &str) -> String {
	percent_decode_str(value).decode_utf8_lossy().into_owned()
}

/// Builds the base string URI (scheme, authority, path) for `url`.
pub fn base_string_uri(url: &Url) -> Result<String, SigningError> {
	let scheme = url.scheme();

	if scheme != "http" && scheme != "https" {
		return Err(SigningError::UnsupportedScheme { url: url.to_string() });
	}

	let host = url.host_str().ok_or_else(|| SigningError::MissingHost { url: url.to_string() })?;
	// `Url::port` is `None` for the scheme's default port.
	let uri = match url.port() {
		Some(port) => format!("{scheme}://{}:{port}{}", host.to_ascii_lowercase(), url.path()),
		None => format!("{scheme}://{}{}", host.to_ascii_lowercase(), url.path()),
	};

	Ok(uri)
}

/// Normalizes request parameters plus the URL query into the `k=v&...` form that is signed.
///
/// `oauth_signature` and null values are skipped; list values contribute one pair per item.
pub fn normalized_parameters(url: &Url, params: &ParameterSet) -> String {
	let mut pairs = params
		.iter()
		.filter(|(key, _)| key.as_str() != "oauth_signature")
		.flat_map(|(key, value)| {
			value.values().map(move |value| (percent_encode(key), percent_encode(value)))
		})
		.chain(
			url.query_pairs()
				.filter(|(key, _)| key != "oauth_signature")
				.map(|(key, value)| (percent_encode(&key), percent_encode(&value))),
		)
		.collect::<Vec<_>>();

	pairs.sort();

	pairs.into_iter().map(|(key, value)| format!("{key}={value}")).collect::<Vec<_>>().join("&")
}

/// Assembles the signature base string for a request.
pub fn signature_base_string(
	method: &str,
	url: &str,
	params: &ParameterSet,
) -> Result<String, SigningError> {
	let url = Url::parse(url).map_err(|source| SigningError::InvalidUrl { source })?;
	let uri = base_string_uri(&url)?;

	Ok(format!(
		"{}&{}&{}",
		method.to_ascii_uppercase(),
		percent_encode(&uri),
		percent_encode(&normalized_parameters(&url, params))
	))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::params::ParamValue;

	#[test]
	fn encoding_keeps_only_unreserved_characters() {
		assert_eq!(percent_encode("abcXYZ019-._~"), "abcXYZ019-._~");
		assert_eq!(percent_encode("a b+c/d=e&f"), "a%20b%2Bc%2Fd%3De%26f");
		assert_eq!(percent_encode("é"), "%C3%A9");
		assert_eq!(percent_decode("a%20b%2Bc"), "a b+c");
	}

	#[test]
	fn base_uri_drops_default_port_query_and_fragment() {
		let url = Url::parse("HTTPS://Tool.Example:443/Launch?x=1#frag")
			.expect("URL fixture should parse.");

		assert_eq!(
			base_string_uri(&url).expect("Base URI should build."),
			"https://tool.example/Launch"
		);

		let url = Url::parse("http://tool.example:8080").expect("URL fixture should parse.");

		assert_eq!(
			base_string_uri(&url).expect("Base URI should build."),
			"http://tool.example:8080/"
		);
	}

	#[test]
	fn base_uri_rejects_non_http_schemes() {
		let url = Url::parse("ftp://tool.example/launch").expect("URL fixture should parse.");

		assert!(matches!(base_string_uri(&url), Err(SigningError::UnsupportedScheme { .. })));
	}

	#[test]
	fn normalization_sorts_merges_query_and_skips_signature() {
		let url = Url::parse("https://tool.example/launch?b=2&a=3").expect("URL fixture should parse.");
		let params = ParameterSet::from_iter([
			("a".to_owned(), ParamValue::from(["2", "1"])),
			("c".to_owned(), ParamValue::Null),
			("oauth_signature".to_owned(), ParamValue::from("ignored")),
			("d e".to_owned(), ParamValue::from("f g")),
		]);

		assert_eq!(normalized_parameters(&url, &params), "a=1&a=2&a=3&b=2&d%20e=f%20g");
	}

	#[test]
	fn base_string_joins_encoded_components() {
		let params = ParameterSet::from_iter([("x".to_owned(), ParamValue::from("1 2"))]);
		let base = signature_base_string("post", "https://tool.example/launch", &params)
			.expect("Base string should build.");

		assert_eq!(base, "POST&https%3A%2F%2Ftool.example%2Flaunch&x%3D1%25202");
	}

	#[test]
	fn malformed_urls_surface_parse_errors() {
		let err = signature_base_string("POST", "not a url", &ParameterSet::new())
			.expect_err("Relative URLs must be rejected.");

		assert!(matches!(err, SigningError::InvalidUrl { .. }));
	}
}
