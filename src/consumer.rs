//! Tool-consumer launch builder and its configuration surface.

pub mod launch;

pub use launch::*;

// self
use crate::{
	_prelude::*,
	auth::ConsumerIdentity,
	config::LaunchConfig,
	error::RequiredFields,
	oauth::{HmacSha1Signer, NonceClock, OAuthSigner, SystemNonceClock},
	params::{CUSTOM_PREFIX, LaunchParams, ParameterSet, ParameterSource},
};

#[derive(Clone, Debug, Default)]
struct LaunchState {
	launch_url: Option<String>,
	params: LaunchParams,
}
impl LaunchState {
	fn has_launch_url(&self) -> bool {
		self.launch_url.as_deref().is_some_and(|url| !url.is_empty())
	}
}

/// Builds signed LTI 1.x launch requests for a single consumer identity.
///
/// The builder owns the consumer credentials, the signer, the nonce clock, and the stored launch
/// parameters. Stored parameters sit behind a read/write lock: configuration changes take the
/// write lock while [`generate_launch_data`](Self::generate_launch_data) only reads a snapshot, so
/// a builder can be shared across threads. Launches never write back into the stored state.
///
/// A host that keeps launch parameters elsewhere can install a [`ParameterSource`] with
/// [`with_parameter_source`](Self::with_parameter_source). Its mapping is the base layer of every
/// launch and the stored parameters are laid over it.
pub struct LaunchRequestBuilder {
	consumer: ConsumerIdentity,
	signer: Arc<dyn OAuthSigner>,
	nonce_clock: Arc<dyn NonceClock>,
	parameter_source: Option<Arc<dyn ParameterSource>>,
	state: RwLock<LaunchState>,
}
impl LaunchRequestBuilder {
	/// Creates a builder for the consumer key/secret pair with the stock HMAC-SHA1 signer and the
	/// system clock.
	///
	/// Empty credentials are accepted here and reported when a launch is generated.
	pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
		Self {
			consumer: ConsumerIdentity::new(consumer_key, consumer_secret),
			signer: Arc::new(HmacSha1Signer),
			nonce_clock: Arc::new(SystemNonceClock),
			parameter_source: None,
			state: Default::default(),
		}
	}

	/// Seeds the stored launch parameters; a `launch_url` entry sets the launch URL.
	pub fn with_params<I, K, V>(self, params: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.process_params(params);

		self
	}

	/// Replaces the signing primitive.
	pub fn with_signer(mut self, signer: Arc<dyn OAuthSigner>) -> Self {
		self.signer = signer;

		self
	}

	/// Replaces the nonce/timestamp source.
	pub fn with_nonce_clock(mut self, nonce_clock: Arc<dyn NonceClock>) -> Self {
		self.nonce_clock = nonce_clock;

		self
	}

	/// Installs an external parameter source underneath the stored parameters.
	///
	/// Stored values win on key collisions; `resource_link_id` falls back to the source when the
	/// stored record has none.
	pub fn with_parameter_source(mut self, source: Arc<dyn ParameterSource>) -> Self {
		self.parameter_source = Some(source);

		self
	}

	/// Merges more launch parameters into the stored state.
	///
	/// Routing follows [`LaunchParams::process_params`]; a `launch_url` entry replaces the launch
	/// URL.
	pub fn process_params<I, K, V>(&self, params: I)
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let pairs = params
			.into_iter()
			.map(|(key, value)| (key.into(), value.into()))
			.collect::<Vec<(String, String)>>();
		let mut state = self.state.write();

		if let Some((_, url)) = pairs.iter().rev().find(|(key, _)| key == "launch_url") {
			state.launch_url = Some(url.clone());
		}

		state.params.process_params(pairs);
	}

	/// Sets or replaces the launch URL.
	pub fn set_launch_url(&self, url: impl Into<String>) {
		self.state.write().launch_url = Some(url.into());
	}

	/// Adopts a tool configuration unless a launch URL is already set.
	///
	/// On adoption the configuration's custom parameters are merged in; keys that are already
	/// stored keep their value. Once a launch URL is present the call does nothing, so the first
	/// configuration wins.
	pub fn apply_config(&self, config: &LaunchConfig) {
		let mut state = self.state.write();

		if state.has_launch_url() {
			return;
		}

		state.launch_url = Some(config.launch_url.clone());

		for (key, value) in &config.custom_params {
			let name = key.strip_prefix(CUSTOM_PREFIX).unwrap_or(key);

			state.params.custom_params.entry(name.to_owned()).or_insert_with(|| value.clone());
		}
	}

	/// OAuth consumer credentials used for every launch.
	pub fn consumer(&self) -> &ConsumerIdentity {
		&self.consumer
	}

	/// Current launch URL, if any.
	pub fn launch_url(&self) -> Option<String> {
		self.state.read().launch_url.clone()
	}

	/// Copy of the stored launch parameters.
	pub fn params(&self) -> LaunchParams {
		self.state.read().params.clone()
	}

	/// Looks up a provider-specific parameter; unknown keys yield `None`.
	pub fn non_spec_param(&self, key: &str) -> Option<String> {
		self.state.read().params.non_spec_params.get(key).map(str::to_owned)
	}

	/// Snapshot of the four required fields.
	pub fn required_fields(&self) -> RequiredFields {
		self.required_fields_from(&self.state.read())
	}

	/// Returns `true` when the consumer key, consumer secret, `resource_link_id`, and launch URL
	/// are all non-empty.
	pub fn has_required_parameters(&self) -> bool {
		self.required_fields().is_complete()
	}

	/// Names of the required fields that are currently empty.
	pub fn missing_required_parameters(&self) -> Vec<&'static str> {
		self.required_fields().missing()
	}

	fn required_fields_from(&self, state: &LaunchState) -> RequiredFields {
		let resource_link_id = ParameterSource::resource_link_id(&state.params)
			.filter(|id| !id.is_empty())
			.or_else(|| self.parameter_source.as_deref()?.resource_link_id());

		RequiredFields {
			consumer_key: Some(self.consumer.key().to_owned()),
			consumer_secret: Some(self.consumer.secret().clone()),
			resource_link_id: resource_link_id.map(str::to_owned),
			launch_url: state.launch_url.clone(),
		}
	}

	/// External source first, stored parameters on top.
	fn snapshot_from(&self, state: &LaunchState) -> ParameterSet {
		let mut params = self
			.parameter_source
			.as_deref()
			.map(|source| source.to_params())
			.unwrap_or_default();

		params.extend(ParameterSource::to_params(&state.params));

		params
	}
}
impl Debug for LaunchRequestBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let state = self.state.read();

		f.debug_struct("LaunchRequestBuilder")
			.field("consumer", &self.consumer)
			.field("parameter_source", &self.parameter_source.is_some())
			.field("launch_url", &state.launch_url)
			.field("params", &state.params)
			.finish()
	}
}
