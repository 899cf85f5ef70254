//! Launch generation: parameter assembly, privacy redaction, and OAuth signing.
//!
//! [`LaunchRequestBuilder::generate_launch_data`] validates the required fields, snapshots the
//! stored parameters, overlays the caller's `roles`, applies the privacy policy, fills the LTI
//! message defaults, adds a fresh nonce + timestamp, and hands the result to the configured
//! [`OAuthSigner`](crate::oauth::OAuthSigner). The snapshot is private to the call; stored
//! parameters never see the role override or the redaction.

// self
use crate::{
	_prelude::*,
	consumer::LaunchRequestBuilder,
	error::ConfigError,
	oauth::{self, LAUNCH_METHOD, NonceClock, OAuthSigner},
	obs::{self, LaunchOutcome, LaunchSpan},
	params::{ParamValue, ParameterSet, PrivacyMode},
};

/// `lti_message_type` forced onto every launch.
pub const LAUNCH_MESSAGE_TYPE: &str = "basic-lti-launch-request";
/// `lti_version` used when the stored parameters do not carry one.
pub const DEFAULT_LTI_VERSION: &str = "LTI-1p0";

impl LaunchRequestBuilder {
	/// Produces the signed, form-ready parameters for one launch.
	///
	/// `role` replaces any stored `roles` value and keeps its shape: a list is signed as one pair
	/// per entry and returned as a list. `privacy` selects which person fields are removed before
	/// signing.
	///
	/// # Errors
	///
	/// [`ConfigError::InvalidLtiConfig`] when a required field is empty (the signer is not
	/// called), or [`SigningError`](crate::error::SigningError) from the signer.
	pub fn generate_launch_data(
		&self,
		role: impl Into<ParamValue>,
		privacy: impl Into<PrivacyMode>,
	) -> Result<ParameterSet> {
		let privacy = privacy.into();
		let _span = LaunchSpan::new("generate_launch_data", privacy).entered();

		obs::record_launch_outcome(LaunchOutcome::Attempt, privacy);

		let result = self.sign_launch(role.into(), privacy);

		match &result {
			Ok(_) => obs::record_launch_outcome(LaunchOutcome::Success, privacy),
			Err(_) => obs::record_launch_outcome(LaunchOutcome::Failure, privacy),
		}

		result
	}

	fn sign_launch(&self, role: ParamValue, privacy: PrivacyMode) -> Result<ParameterSet> {
		let (launch_url, snapshot) = {
			let state = self.state.read();
			let fields = self.required_fields_from(&state);
			let missing = fields.missing();

			if !missing.is_empty() {
				obs::trace_missing_fields(&missing);

				return Err(ConfigError::InvalidLtiConfig { fields, missing }.into());
			}

			(state.launch_url.clone().unwrap_or_default(), self.snapshot_from(&state))
		};
		let mut params = prepare_launch_params(snapshot, role, privacy);
		let consumer = &self.consumer;
		let clock = self.nonce_clock.as_ref();

		params.insert("oauth_nonce".into(), ParamValue::Single(<dyn NonceClock>::nonce(clock)));
		params.insert(
			"oauth_timestamp".into(),
			ParamValue::Single(<dyn NonceClock>::timestamp(clock).to_string()),
		);
		params.insert("oauth_consumer_key".into(), ParamValue::from(consumer.key()));

		let signed = <dyn OAuthSigner>::sign(
			self.signer.as_ref(),
			LAUNCH_METHOD,
			&launch_url,
			params,
			consumer,
		)?;

		Ok(flatten_signed(signed))
	}
}

/// Applies the role override, privacy redaction, and LTI message defaults to a snapshot.
pub fn prepare_launch_params(
	mut params: ParameterSet,
	role: ParamValue,
	privacy: PrivacyMode,
) -> ParameterSet {
	params.insert("roles".into(), role);
	privacy.redact(&mut params);

	if params.get("lti_version").is_none_or(ParamValue::is_blank) {
		params.insert("lti_version".into(), ParamValue::from(DEFAULT_LTI_VERSION));
	}

	params.insert("lti_message_type".into(), ParamValue::from(LAUNCH_MESSAGE_TYPE));

	params
}

/// Nulls and lists pass through; single values are percent-decoded once.
fn flatten_signed(signed: ParameterSet) -> ParameterSet {
	signed
		.into_iter()
		.map(|(key, value)| {
			let value = match value {
				ParamValue::Single(raw) => ParamValue::Single(oauth::percent_decode(&raw)),
				other => other,
			};

			(key, value)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	use super::*;
	use crate::{
		_preludet::*,
		auth::ConsumerIdentity,
		error::{Error, SigningError},
		oauth::OAuthSigner,
	};

	#[derive(Debug, Default)]
	struct CountingSigner(AtomicUsize);
	impl OAuthSigner for CountingSigner {
		fn sign(
			&self,
			_method: &str,
			_url: &str,
			params: ParameterSet,
			_consumer: &ConsumerIdentity,
		) -> Result<ParameterSet, SigningError> {
			self.0.fetch_add(1, Ordering::SeqCst);

			Ok(params)
		}
	}

	#[test]
	fn prepare_overrides_roles_and_forces_message_type() {
		let snapshot = ParameterSet::from_iter([
			("roles".to_owned(), ParamValue::from("Learner")),
			("lti_message_type".to_owned(), ParamValue::from("ContentItemSelectionRequest")),
			("lti_version".to_owned(), ParamValue::from("")),
		]);
		let params = prepare_launch_params(snapshot, ParamValue::from("Instructor"), PrivacyMode::Full);

		assert_eq!(params.get("roles"), Some(&ParamValue::from("Instructor")));
		assert_eq!(params.get("lti_message_type"), Some(&ParamValue::from(LAUNCH_MESSAGE_TYPE)));
		assert_eq!(params.get("lti_version"), Some(&ParamValue::from(DEFAULT_LTI_VERSION)));
	}

	#[test]
	fn prepare_keeps_an_explicit_version() {
		let snapshot =
			ParameterSet::from_iter([("lti_version".to_owned(), ParamValue::from("LTI-1p2"))]);
		let params = prepare_launch_params(snapshot, ParamValue::Null, PrivacyMode::Full);

		assert_eq!(params.get("lti_version"), Some(&ParamValue::from("LTI-1p2")));
		assert_eq!(params.get("roles"), Some(&ParamValue::Null));
	}

	#[test]
	fn missing_fields_never_reach_the_signer() {
		let signer = Arc::new(CountingSigner::default());
		let builder = LaunchRequestBuilder::new("ck", "").with_signer(signer.clone());
		let err = builder
			.generate_launch_data("Instructor", "name")
			.expect_err("Launch without required fields must fail.");

		match err {
			Error::Config(ConfigError::InvalidLtiConfig { missing, .. }) =>
				assert_eq!(missing, vec!["consumer_secret", "resource_link_id", "launch_url"]),
			other => panic!("Expected a configuration error, got {other:?}."),
		}

		assert_eq!(signer.0.load(Ordering::SeqCst), 0);
	}

	#[test]
	fn flatten_decodes_singles_and_keeps_lists() {
		let signed = ParameterSet::from_iter([
			("a".to_owned(), ParamValue::from("x%20y")),
			("b".to_owned(), ParamValue::from(["p%20q"])),
			("c".to_owned(), ParamValue::Null),
		]);
		let flat = flatten_signed(signed);

		assert_eq!(flat.get("a"), Some(&ParamValue::from("x y")));
		assert_eq!(flat.get("b"), Some(&ParamValue::from(["p%20q"])));
		assert_eq!(flat.get("c"), Some(&ParamValue::Null));
	}

	#[test]
	fn launch_with_fixed_clock_matches_reference_signature() {
		let builder = build_fixed_launch_builder("nonce-123", 1_700_000_000);
		let data = builder
			.generate_launch_data("Instructor", PrivacyMode::NameOnly)
			.expect("Launch with complete configuration should succeed.");

		assert_eq!(data.get("oauth_nonce"), Some(&ParamValue::from("nonce-123")));
		assert_eq!(data.get("oauth_timestamp"), Some(&ParamValue::from("1700000000")));
		assert_eq!(
			data.get("oauth_signature"),
			Some(&ParamValue::from("p4zuhHgakZ2i8MhMkP1OqzNxKAg="))
		);
	}

	#[test]
	fn launches_leave_stored_params_untouched() {
		let builder = build_test_launch_builder().with_params([
			("roles", "Learner"),
			("lis_person_contact_email_primary", "ada@example.com"),
		]);
		let before = builder.params();

		builder
			.generate_launch_data("Instructor", "none")
			.expect("Launch with complete configuration should succeed.");

		assert_eq!(builder.params(), before);
	}
}
