//! Common types used throughout dayttl.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// Timestamp //
//***********//
/// Seconds since the UNIX epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Timestamp {
		let elapsed =
			SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Timestamp(elapsed.as_secs() as i64)
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::ops::Sub for Timestamp {
	type Output = i64;

	fn sub(self, other: Timestamp) -> i64 {
		self.0 - other.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_timestamp_display() {
		assert_eq!(Timestamp(1700000000).to_string(), "1700000000");
		assert_eq!(Timestamp(0).to_string(), "0");
	}

	#[test]
	fn test_timestamp_sub() {
		assert_eq!(Timestamp(100) - Timestamp(40), 60);
	}

	#[test]
	fn test_timestamp_now_is_recent() {
		// A loose sanity bound: after 2023-01-01, before 2100-01-01
		let now = Timestamp::now();
		assert!(now.0 > 1672531200);
		assert!(now.0 < 4102444800);
	}
}

// vim: ts=4
