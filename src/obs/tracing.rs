// self
use crate::{_prelude::*, params::PrivacyMode};

/// A span builder used around launch generation.
#[derive(Clone, Debug)]
pub struct LaunchSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl LaunchSpan {
	/// Creates a new span tagged with the provided stage + privacy mode.
	pub fn new(stage: &'static str, privacy: PrivacyMode) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("lti_consumer.launch", stage, privacy = privacy.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, privacy);

			Self {}
		}
	}

	/// Enters the span for the synchronous launch section.
	pub fn entered(self) -> LaunchSpanGuard {
		#[cfg(feature = "tracing")]
		{
			LaunchSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			LaunchSpanGuard {}
		}
	}
}

/// RAII guard returned by [`LaunchSpan::entered`].
pub struct LaunchSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for LaunchSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("LaunchSpanGuard(..)")
	}
}

/// Emits a `debug` event naming the required fields that blocked a launch.
pub fn trace_missing_fields(missing: &[&'static str]) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(missing = ?missing, "launch rejected: required fields are empty");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = missing;
	}
}
