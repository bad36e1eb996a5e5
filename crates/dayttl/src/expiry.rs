//! Clamped expiry computation.
//!
//! A configured expiry duration is cut off at the next local-midnight
//! boundary: a resource configured to stay fresh for an hour at 23:30
//! expires in 30 minutes. The calculator is a pure function of one
//! wall-clock reading and the configured duration; both the relative and
//! the absolute output derive from that single reading.

use chrono::{DateTime, Local, TimeZone, Timelike};

use crate::types::Timestamp;

pub const SECS_PER_DAY: u32 = 86_400;
const SECS_PER_HOUR: u32 = 3_600;
const SECS_PER_MIN: u32 = 60;

/// A nominal expiry duration clamped to the next local-midnight boundary.
///
/// Invariants: `relative() <= expire` for the duration it was computed
/// with, and `seconds_since_midnight(now) + relative() <= 86400`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClampedExpiry {
	relative: u32,
	absolute: Timestamp,
}

impl ClampedExpiry {
	/// Compute the clamped expiry for `expire` seconds at `now`.
	///
	/// `now` is interpreted in its own timezone; midnight is the local
	/// midnight of that zone. The same reading drives both outputs, so
	/// `absolute() - now == relative()` holds exactly.
	pub fn at<Tz: TimeZone>(now: &DateTime<Tz>, expire: u32) -> ClampedExpiry {
		let sec = now.hour() * SECS_PER_HOUR + now.minute() * SECS_PER_MIN + now.second();

		// The nominal duration would cross midnight: return the time
		// remaining today instead.
		let relative =
			if expire > SECS_PER_DAY - sec { SECS_PER_DAY - sec } else { expire };

		ClampedExpiry {
			relative,
			absolute: Timestamp(now.timestamp() + i64::from(relative)),
		}
	}

	/// Compute the clamped expiry for `expire` seconds at the current
	/// local time.
	pub fn now(expire: u32) -> ClampedExpiry {
		ClampedExpiry::at(&Local::now(), expire)
	}

	/// Seconds remaining before the value expires.
	pub fn relative(&self) -> u32 {
		self.relative
	}

	/// Epoch timestamp of the expiry instant.
	pub fn absolute(&self) -> Timestamp {
		self.absolute
	}
}


// vim: ts=4
