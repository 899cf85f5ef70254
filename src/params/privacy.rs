//! Privacy policies that decide which personally identifying fields leave the platform.

// std
use std::convert::Infallible;
// self
use crate::{_prelude::*, params::ParameterSet};

const EMAIL_FIELDS: &[&str] = &["lis_person_contact_email_primary"];
const NAME_FIELDS: &[&str] =
	&["lis_person_name_full", "lis_person_name_family", "lis_person_name_given"];
const ALL_PERSON_FIELDS: &[&str] = &[
	"lis_person_contact_email_primary",
	"lis_person_name_full",
	"lis_person_name_given",
	"lis_person_name_family",
];

/// Privacy policy applied to a launch before it is signed.
///
/// Parsing never fails: `"name"`, `"email"`, and `"none"` select the restrictive modes and any
/// other label shares everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrivacyMode {
	/// Share the user's name only (`"name"`); the email address is removed.
	NameOnly,
	/// Share the user's email only (`"email"`); name fields are removed.
	EmailOnly,
	/// Share neither name nor email (`"none"`).
	Anonymous,
	/// Share every field.
	#[default]
	Full,
}
impl PrivacyMode {
	/// Maps a privacy label onto a mode.
	pub fn parse(label: &str) -> Self {
		match label {
			"name" => Self::NameOnly,
			"email" => Self::EmailOnly,
			"none" => Self::Anonymous,
			_ => Self::Full,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::NameOnly => "name",
			Self::EmailOnly => "email",
			Self::Anonymous => "none",
			Self::Full => "full",
		}
	}

	/// Parameter names removed by this mode.
	pub const fn redacted_fields(self) -> &'static [&'static str] {
		match self {
			Self::NameOnly => EMAIL_FIELDS,
			Self::EmailOnly => NAME_FIELDS,
			Self::Anonymous => ALL_PERSON_FIELDS,
			Self::Full => &[],
		}
	}

	/// Deletes the redacted fields from `params`; absent fields are ignored.
	pub fn redact(self, params: &mut ParameterSet) {
		for field in self.redacted_fields() {
			params.remove(*field);
		}
	}
}
impl From<&str> for PrivacyMode {
	fn from(label: &str) -> Self {
		Self::parse(label)
	}
}
impl From<String> for PrivacyMode {
	fn from(label: String) -> Self {
		Self::parse(&label)
	}
}
impl From<PrivacyMode> for String {
	fn from(mode: PrivacyMode) -> Self {
		mode.as_str().to_owned()
	}
}
impl FromStr for PrivacyMode {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(s))
	}
}
impl Display for PrivacyMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
