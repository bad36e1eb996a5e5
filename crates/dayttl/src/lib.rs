//! Dayttl computes midnight-clamped expiry values for HTTP services.
//!
//! # Features
//!
//! - Per-scope expiry configuration
//!		- scopes are request path prefixes
//!		- nested scopes inherit from their enclosing scope
//!		- frozen into an immutable registry before the first request
//! - Clamped expiry calculator
//!		- a configured duration, cut off at the next local midnight
//!		- one clock reading per request drives both outputs
//! - Axum integration
//!		- middleware publishing `x-time-second` and `x-time-unix` headers
//!		- `Expiry` extractor for handlers
//!		- `Cache-Control: max-age` helper

pub mod error;
pub mod expiry;
pub mod extract;
pub mod middleware;
pub mod prelude;
pub mod settings;
pub mod types;

pub use crate::error::{Error, TtlResult};
pub use crate::expiry::ClampedExpiry;
pub use crate::extract::Expiry;
pub use crate::settings::{ExpirySettings, FrozenExpirySettings, ScopeConfig};
pub use crate::types::Timestamp;

// vim: ts=4
