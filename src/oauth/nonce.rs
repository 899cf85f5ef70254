//! Nonce and timestamp source for OAuth 1.0a requests.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::_prelude::*;

const NONCE_LEN: usize = 32;

/// Source of fresh `oauth_nonce` and `oauth_timestamp` values.
pub trait NonceClock
where
	Self: Send + Sync,
{
	/// Returns a value that is unique per request.
	fn nonce(&self) -> String;

	/// Returns the current Unix time in seconds.
	fn timestamp(&self) -> i64;
}

/// Wall-clock implementation backed by the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemNonceClock;
impl NonceClock for SystemNonceClock {
	fn nonce(&self) -> String {
		rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
	}

	fn timestamp(&self) -> i64 {
		OffsetDateTime::now_utc().unix_timestamp()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn nonces_are_alphanumeric_and_distinct() {
		let clock = SystemNonceClock;
		let first = clock.nonce();
		let second = clock.nonce();

		assert_eq!(first.len(), NONCE_LEN);
		assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
		assert_ne!(first, second);
	}

	#[test]
	fn timestamp_tracks_the_wall_clock() {
		let before = OffsetDateTime::now_utc().unix_timestamp();
		let stamp = SystemNonceClock.timestamp();
		let after = OffsetDateTime::now_utc().unix_timestamp();

		assert!((before..=after).contains(&stamp));
	}
}
