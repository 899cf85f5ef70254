//! Optional observability helpers for launch generation.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `lti_consumer.launch` with the `stage` (call
//!   site) and `privacy` fields, plus a `debug` event naming the missing fields when validation
//!   fails.
//! - Enable `metrics` to increment the `lti_consumer_launch_total` counter for every
//!   attempt/success/failure, labeled by `outcome` + `privacy`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each launch attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LaunchOutcome {
	/// Entry to the launch builder.
	Attempt,
	/// Signed parameters were returned.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl LaunchOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			LaunchOutcome::Attempt => "attempt",
			LaunchOutcome::Success => "success",
			LaunchOutcome::Failure => "failure",
		}
	}
}
impl Display for LaunchOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
