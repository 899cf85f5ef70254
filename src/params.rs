//! Launch parameter model: values, the typed launch record, extension fields, and privacy
//! redaction.

pub mod extension;
pub mod launch;
pub mod privacy;

pub use extension::*;
pub use launch::*;
pub use privacy::*;

// self
use crate::_prelude::*;

/// Flat mapping from parameter name to value, ordered by name.
pub type ParameterSet = BTreeMap<String, ParamValue>;

/// Single launch parameter value.
///
/// Serializes as JSON `null`, a string, or an array of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
	/// Parameter is known but carries no value.
	#[default]
	Null,
	/// Single string value.
	Single(String),
	/// Multi-valued parameter (each item is signed as its own pair).
	Multi(Vec<String>),
}
impl ParamValue {
	/// Returns `true` for `Null`, an empty string, or an empty list.
	pub fn is_blank(&self) -> bool {
		match self {
			Self::Null => true,
			Self::Single(value) => value.is_empty(),
			Self::Multi(values) => values.is_empty(),
		}
	}

	/// Returns the single value, if this is [`ParamValue::Single`].
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Single(value) => Some(value),
			_ => None,
		}
	}

	/// Iterates over every string carried by the value.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		let slice: &[String] = match self {
			Self::Null => &[],
			Self::Single(value) => std::slice::from_ref(value),
			Self::Multi(values) => values,
		};

		slice.iter().map(String::as_str)
	}
}
impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::Single(value.to_owned())
	}
}
impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::Single(value)
	}
}
impl From<&String> for ParamValue {
	fn from(value: &String) -> Self {
		Self::Single(value.clone())
	}
}
impl From<Vec<String>> for ParamValue {
	fn from(values: Vec<String>) -> Self {
		Self::Multi(values)
	}
}
impl From<Vec<&str>> for ParamValue {
	fn from(values: Vec<&str>) -> Self {
		Self::Multi(values.into_iter().map(str::to_owned).collect())
	}
}
impl<const N: usize> From<[&str; N]> for ParamValue {
	fn from(values: [&str; N]) -> Self {
		Self::Multi(values.into_iter().map(str::to_owned).collect())
	}
}
impl From<Option<String>> for ParamValue {
	fn from(value: Option<String>) -> Self {
		value.map_or(Self::Null, Self::Single)
	}
}

/// Capability that supplies the base launch parameters for a request.
///
/// [`LaunchParams`] is the stock implementation; hosts with their own parameter storage can
/// implement the trait directly.
pub trait ParameterSource
where
	Self: Send + Sync,
{
	/// Returns a fresh snapshot of every launch parameter that is set.
	fn to_params(&self) -> ParameterSet;

	/// Current `resource_link_id`, consulted by required-field validation.
	fn resource_link_id(&self) -> Option<&str>;
}
