//! Typed record of the LTI 1.x launch vocabulary.

// self
use crate::{
	_prelude::*,
	params::{ExtensionParams, ParamValue, ParameterSet, ParameterSource},
};

/// Prefix carried by custom parameters on the wire.
pub const CUSTOM_PREFIX: &str = "custom_";
/// Prefix carried by extension parameters on the wire.
pub const EXT_PREFIX: &str = "ext_";

macro_rules! def_launch_params {
	($($(#[$doc:meta])* $field:ident,)+) => {
		/// Launch parameters known to LTI 1.x plus custom, extension, and non-spec buckets.
		///
		/// Every standard field starts unset; [`LaunchParams::to_params`] only emits fields that
		/// carry a value.
		#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
		#[serde(default)]
		pub struct LaunchParams {
			$(
				$(#[$doc])*
				pub $field: Option<String>,
			)+
			/// User roles (`roles`), sent comma-joined.
			pub roles: Vec<String>,
			/// Custom parameters keyed without the `custom_` prefix.
			pub custom_params: BTreeMap<String, String>,
			/// Extension parameters keyed without the `ext_` prefix.
			pub ext_params: BTreeMap<String, String>,
			/// Everything else supplied by the host.
			pub non_spec_params: ExtensionParams,
		}
		impl LaunchParams {
			/// Names of the standard single-valued launch fields.
			pub const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

			/// Returns the value of a standard field by wire name.
			pub fn get(&self, name: &str) -> Option<&str> {
				match name {
					$(stringify!($field) => self.$field.as_deref(),)+
					_ => None,
				}
			}

			fn field_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
				match name {
					$(stringify!($field) => Some(&mut self.$field),)+
					_ => None,
				}
			}

			fn standard_fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
				[$((stringify!($field), self.$field.as_deref())),+]
					.into_iter()
					.filter_map(|(name, value)| value.map(|value| (name, value)))
			}
		}
	};
}

def_launch_params! {
	/// Opaque identifier of the placement of the link (`resource_link_id`).
	resource_link_id,
	/// Title of the link.
	resource_link_title,
	/// Description of the link.
	resource_link_description,
	/// Opaque identifier of the launching user.
	user_id,
	/// URL of the user's avatar.
	user_image,
	/// Given name of the user.
	lis_person_name_given,
	/// Family name of the user.
	lis_person_name_family,
	/// Full name of the user.
	lis_person_name_full,
	/// Primary email address of the user.
	lis_person_contact_email_primary,
	/// LIS identifier of the user.
	lis_person_sourcedid,
	/// Users a mentor may access, comma separated.
	role_scope_mentor,
	/// Opaque identifier of the launch context (course).
	context_id,
	/// Context type URN or short name.
	context_type,
	/// Context title.
	context_title,
	/// Context label.
	context_label,
	/// LIS course offering identifier.
	lis_course_offering_sourcedid,
	/// LIS course section identifier.
	lis_course_section_sourcedid,
	/// Result identifier used by the outcomes service.
	lis_result_sourcedid,
	/// Outcomes service endpoint.
	lis_outcome_service_url,
	/// Preferred locale of the launching platform.
	launch_presentation_locale,
	/// Presentation target (`frame`, `iframe`, `window`).
	launch_presentation_document_target,
	/// Stylesheet offered to the tool.
	launch_presentation_css_url,
	/// Frame width in pixels.
	launch_presentation_width,
	/// Frame height in pixels.
	launch_presentation_height,
	/// URL the tool returns the user to.
	launch_presentation_return_url,
	/// Product family of the tool consumer.
	tool_consumer_info_product_family_code,
	/// Version of the tool consumer product.
	tool_consumer_info_version,
	/// Globally unique identifier of the consumer instance.
	tool_consumer_instance_guid,
	/// Name of the consumer instance.
	tool_consumer_instance_name,
	/// Description of the consumer instance.
	tool_consumer_instance_description,
	/// Home page of the consumer instance.
	tool_consumer_instance_url,
	/// Contact email of the consumer instance.
	tool_consumer_instance_contact_email,
	/// Message type; always overwritten when a launch is signed.
	lti_message_type,
	/// Protocol version; defaults to `LTI-1p0` at launch time.
	lti_version,
}

impl LaunchParams {
	/// Routes raw `(name, value)` pairs into the typed record.
	///
	/// `custom_*` and `ext_*` names go to their buckets with the prefix stripped, `roles` is split
	/// on commas, standard names land in their field, `launch_url` is skipped (the launch
	/// builder owns it), and everything else is kept as a non-spec parameter.
	pub fn process_params<I, K, V>(&mut self, params: I)
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		for (key, value) in params {
			let key = key.as_ref();
			let value = value.into();

			if key == "launch_url" {
				continue;
			}
			if key == "roles" {
				self.set_roles(&value);
			} else if let Some(name) = key.strip_prefix(CUSTOM_PREFIX) {
				self.custom_params.insert(name.to_owned(), value);
			} else if let Some(name) = key.strip_prefix(EXT_PREFIX) {
				self.ext_params.insert(name.to_owned(), value);
			} else if let Some(slot) = self.field_mut(key) {
				*slot = Some(value);
			} else {
				self.non_spec_params.insert(key, value);
			}
		}
	}

	/// Replaces the roles with the comma-separated entries of `roles`.
	pub fn set_roles(&mut self, roles: &str) {
		self.roles = roles
			.split(',')
			.map(str::trim)
			.filter(|role| !role.is_empty())
			.map(str::to_owned)
			.collect();
	}

	/// Sets a custom parameter; a leading `custom_` on `name` is tolerated.
	pub fn set_custom_param(&mut self, name: &str, value: impl Into<String>) {
		let name = name.strip_prefix(CUSTOM_PREFIX).unwrap_or(name);

		self.custom_params.insert(name.to_owned(), value.into());
	}

	/// Sets an extension parameter; a leading `ext_` on `name` is tolerated.
	pub fn set_ext_param(&mut self, name: &str, value: impl Into<String>) {
		let name = name.strip_prefix(EXT_PREFIX).unwrap_or(name);

		self.ext_params.insert(name.to_owned(), value.into());
	}

	/// Looks up a custom parameter by its unprefixed name.
	pub fn custom_param(&self, name: &str) -> Option<&str> {
		self.custom_params.get(name).map(String::as_str)
	}

	/// Builds the wire mapping for every parameter that is set.
	pub fn to_params(&self) -> ParameterSet {
		let mut params = ParameterSet::new();

		for (key, value) in self.non_spec_params.iter() {
			params.insert(key.to_owned(), ParamValue::from(value));
		}
		for (key, value) in self.standard_fields() {
			params.insert(key.to_owned(), ParamValue::from(value));
		}

		if !self.roles.is_empty() {
			params.insert("roles".into(), ParamValue::Single(self.roles.join(",")));
		}

		for (key, value) in &self.custom_params {
			params.insert(format!("{CUSTOM_PREFIX}{key}"), ParamValue::from(value));
		}
		for (key, value) in &self.ext_params {
			params.insert(format!("{EXT_PREFIX}{key}"), ParamValue::from(value));
		}

		params
	}
}
impl ParameterSource for LaunchParams {
	fn to_params(&self) -> ParameterSet {
		LaunchParams::to_params(self)
	}

	fn resource_link_id(&self) -> Option<&str> {
		self.resource_link_id.as_deref()
	}
}
