//! Per-scope expiry configuration

pub mod loader;
pub mod types;

pub use loader::{load_path, load_str};
pub use types::{ExpirySettings, FrozenExpirySettings, ScopeConfig};

// vim: ts=4
