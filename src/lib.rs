//! IMS LTI 1.x tool consumer: assemble launch parameters, apply privacy redaction, and sign the
//! result with two-legged OAuth 1.0a so it can be posted from an auto-submitting form.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod consumer;
pub mod error;
pub mod oauth;
pub mod obs;
pub mod params;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for tests; enabled via `cfg(test)` or the `test` crate
	//! feature.

	pub use crate::_prelude::*;

	// self
	use crate::{consumer::LaunchRequestBuilder, oauth::NonceClock};

	/// Consumer key used by the test fixtures.
	pub const TEST_CONSUMER_KEY: &str = "ck";
	/// Consumer secret used by the test fixtures.
	pub const TEST_CONSUMER_SECRET: &str = "cs";
	/// Launch URL used by the test fixtures.
	pub const TEST_LAUNCH_URL: &str = "https://tool.example/launch";

	/// Deterministic [`NonceClock`] that always yields the same nonce and timestamp.
	#[derive(Clone, Debug)]
	pub struct FixedNonceClock {
		/// Nonce returned by every call.
		pub nonce: String,
		/// Timestamp returned by every call.
		pub timestamp: i64,
	}
	impl FixedNonceClock {
		/// Creates a clock pinned to the provided nonce and timestamp.
		pub fn new(nonce: impl Into<String>, timestamp: i64) -> Self {
			Self { nonce: nonce.into(), timestamp }
		}
	}
	impl NonceClock for FixedNonceClock {
		fn nonce(&self) -> String {
			self.nonce.clone()
		}

		fn timestamp(&self) -> i64 {
			self.timestamp
		}
	}

	/// Builds a launch builder with the fixture credentials, launch URL, and `resource_link_id`.
	pub fn build_test_launch_builder() -> LaunchRequestBuilder {
		LaunchRequestBuilder::new(TEST_CONSUMER_KEY, TEST_CONSUMER_SECRET)
			.with_params([("launch_url", TEST_LAUNCH_URL), ("resource_link_id", "rl1")])
	}

	/// Same as [`build_test_launch_builder`] but pinned to a [`FixedNonceClock`].
	pub fn build_fixed_launch_builder(nonce: &str, timestamp: i64) -> LaunchRequestBuilder {
		build_test_launch_builder()
			.with_nonce_clock(Arc::new(FixedNonceClock::new(nonce, timestamp)))
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::Result;
}

pub use url;
#[cfg(test)] use color_eyre as _;
