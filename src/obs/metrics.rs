// self
use crate::{obs::LaunchOutcome, params::PrivacyMode};

/// Records a launch outcome via the global metrics recorder (when enabled).
pub fn record_launch_outcome(outcome: LaunchOutcome, privacy: PrivacyMode) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"lti_consumer_launch_total",
			"outcome" => outcome.as_str(),
			"privacy" => privacy.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (outcome, privacy);
	}
}
