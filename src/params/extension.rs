//! Vendor parameters that fall outside the LTI 1.x launch vocabulary.

// self
use crate::_prelude::*;

/// Provider-specific parameters outside the LTI 1.x vocabulary.
///
/// Lookups of unknown keys return `None` instead of failing, so hosts can probe for optional
/// vendor fields freely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionParams(BTreeMap<String, String>);
impl ExtensionParams {
	/// Returns the value for `key`, or `None` when it was never set.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Returns the value for `key`, or `default` when it was never set.
	pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
		self.get(key).unwrap_or(default)
	}

	/// Sets or replaces a value, returning the previous one.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.insert(key.into(), value.into())
	}

	/// Iterates over `(key, value)` pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of stored entries.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<K, V> FromIterator<(K, V)> for ExtensionParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
