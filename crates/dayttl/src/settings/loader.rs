//! Configuration file loading.
//!
//! The configuration is a YAML tree of scopes. Each scope may set an
//! explicit `expire` duration (seconds) and may declare nested
//! `locations`, whose keys are path segments joined beneath the parent
//! prefix:
//!
//! ```yaml
//! expire: 3600
//! locations:
//!   api:
//!     expire: 60
//!     locations:
//!       static:
//!         expire: 86399
//!   status: {}
//! ```
//!
//! `status` sets nothing and inherits 3600 when the registry is frozen.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::prelude::*;
use crate::settings::types::ExpirySettings;

/// One scope node of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeFile {
	/// Nominal expiry duration in seconds, `0 <= expire < 86400`
	pub expire: Option<i64>,
	/// Nested scopes, keyed by path segment
	#[serde(default)]
	pub locations: BTreeMap<String, ScopeFile>,
}

/// Parse a configuration document into a settings registry.
///
/// Any out-of-range or malformed value aborts the whole load; no partial
/// configuration is returned.
pub fn load_str(input: &str) -> TtlResult<ExpirySettings> {
	let file: ScopeFile = serde_yaml::from_str(input)?;
	let mut settings = ExpirySettings::new();

	if let Some(seconds) = file.expire {
		settings.root().set_expire(seconds)?;
	}
	for (segment, scope) in &file.locations {
		load_scope(&mut settings, "", segment, scope)?;
	}

	Ok(settings)
}

/// Load a configuration file from disk.
pub fn load_path(path: impl AsRef<Path>) -> TtlResult<ExpirySettings> {
	let input = std::fs::read_to_string(path)?;
	load_str(&input)
}

fn load_scope(
	settings: &mut ExpirySettings,
	prefix: &str,
	segment: &str,
	scope: &ScopeFile,
) -> TtlResult<()> {
	if segment.is_empty() || segment.contains('/') {
		return Err(Error::ConfigError(format!("invalid location segment: '{}'", segment)));
	}

	let path = format!("{}/{}", prefix, segment);
	match scope.expire {
		Some(seconds) => settings.scope(&path).set_expire(seconds)?,
		// Registered without a value so it takes part in the merge
		None => {
			settings.scope(&path);
		}
	}

	for (child_segment, child) in &scope.locations {
		load_scope(settings, &path, child_segment, child)?;
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_load_root_only() {
		let settings = load_str("expire: 3600").unwrap();
		let frozen = settings.freeze();
		assert_eq!(frozen.root(), 3600);
		assert!(frozen.is_empty());
	}

	#[test]
	fn test_load_nested_scopes() {
		let config = r"
expire: 3600
locations:
  api:
    expire: 60
    locations:
      static:
        expire: 86399
  status: {}
";
		let frozen = load_str(config).unwrap().freeze();
		assert_eq!(frozen.resolve("/api"), 60);
		assert_eq!(frozen.resolve("/api/static"), 86399);
		assert_eq!(frozen.resolve("/status"), 3600);
		assert_eq!(frozen.resolve("/else"), 3600);
		assert_eq!(frozen.len(), 3);
	}

	#[test]
	fn test_max_valid_duration_accepted() {
		assert!(load_str("expire: 86399").is_ok());
	}

	#[test]
	fn test_one_day_rejected() {
		let err = load_str("expire: 86400").unwrap_err();
		assert!(matches!(err, Error::ExpireOutOfRange(86400)));
	}

	#[test]
	fn test_negative_rejected() {
		let err = load_str("expire: -5").unwrap_err();
		assert!(matches!(err, Error::ExpireOutOfRange(-5)));
	}

	#[test]
	fn test_nested_out_of_range_aborts_load() {
		let config = r"
locations:
  api:
    expire: 100000
";
		assert!(matches!(load_str(config), Err(Error::ExpireOutOfRange(100000))));
	}

	#[test]
	fn test_invalid_segment_rejected() {
		let config = r"
locations:
  a/b:
    expire: 10
";
		assert!(matches!(load_str(config), Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_unknown_key_rejected() {
		assert!(matches!(load_str("expires: 10"), Err(Error::ConfigError(_))));
	}
}

// vim: ts=4
