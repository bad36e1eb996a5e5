//! Scope configuration types.
//!
//! Scopes are request path prefixes. A mutable [`ExpirySettings`] registry
//! is filled while the configuration is parsed, then frozen into an
//! immutable [`FrozenExpirySettings`] before the first request is served.
//! The merge with the enclosing scope happens exactly once, in
//! [`ExpirySettings::freeze`].

use std::collections::BTreeMap;

use crate::expiry::SECS_PER_DAY;
use crate::prelude::*;

// ScopeConfig //
//*************//

/// Expiry configuration of a single scope.
///
/// `None` means the scope sets no explicit duration and adopts the
/// enclosing scope's value when the registry is frozen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScopeConfig {
	expire: Option<u32>,
}

impl ScopeConfig {
	/// Set the nominal expiry duration for this scope.
	///
	/// Accepts `0 <= seconds < 86400`. Anything else is a hard
	/// configuration error and the caller must abort the load.
	pub fn set_expire(&mut self, seconds: i64) -> TtlResult<()> {
		if seconds < 0 || seconds >= i64::from(SECS_PER_DAY) {
			return Err(Error::ExpireOutOfRange(seconds));
		}
		self.expire = Some(seconds as u32);
		Ok(())
	}

	/// The explicitly configured duration, if any.
	pub fn expire(&self) -> Option<u32> {
		self.expire
	}
}

// ExpirySettings //
//****************//

/// Mutable registry used while the configuration is parsed.
#[derive(Debug, Default)]
pub struct ExpirySettings {
	root: ScopeConfig,
	scopes: BTreeMap<Box<str>, ScopeConfig>,
}

impl ExpirySettings {
	pub fn new() -> Self {
		Self::default()
	}

	/// The root scope, inherited by every path that matches no other scope.
	pub fn root(&mut self) -> &mut ScopeConfig {
		&mut self.root
	}

	/// Create or return the scope for a path prefix like `/api`.
	pub fn scope(&mut self, path: &str) -> &mut ScopeConfig {
		debug!("Registering expiry scope: {}", path);
		self.scopes.entry(Box::from(path)).or_default()
	}

	/// Freeze the registry, resolving every scope's effective duration.
	///
	/// A scope without an explicit duration adopts the effective value of
	/// its nearest registered ancestor, or the root's if it has none. An
	/// explicit duration always wins over the parent's.
	pub fn freeze(self) -> FrozenExpirySettings {
		let root = self.root.expire().unwrap_or(0);
		let mut scopes: BTreeMap<Box<str>, u32> = BTreeMap::new();

		// Sorted iteration resolves ancestors before their descendants.
		for (path, conf) in &self.scopes {
			let effective = match conf.expire() {
				Some(expire) => expire,
				None => nearest_ancestor(&scopes, path).unwrap_or(root),
			};
			scopes.insert(path.clone(), effective);
		}

		info!("Freezing expiry settings with {} scopes", scopes.len());
		FrozenExpirySettings { root, scopes }
	}
}

/// Effective value of the nearest registered ancestor of `path`.
fn nearest_ancestor(resolved: &BTreeMap<Box<str>, u32>, path: &str) -> Option<u32> {
	resolved
		.iter()
		.filter(|(scope, _)| scope.len() < path.len() && prefix_matches(scope, path))
		.max_by_key(|(scope, _)| scope.len())
		.map(|(_, expire)| *expire)
}

/// Path-prefix match on segment boundaries: `/api` covers `/api` and
/// `/api/x`, but not `/apix`.
fn prefix_matches(scope: &str, path: &str) -> bool {
	match path.strip_prefix(scope) {
		Some("") => true,
		Some(rest) => scope.ends_with('/') || rest.starts_with('/'),
		None => false,
	}
}

// FrozenExpirySettings //
//**********************//

/// Immutable registry shared with request handlers.
///
/// Read-only after configuration load; safe to share across workers
/// behind an `Arc` without locking.
#[derive(Debug)]
pub struct FrozenExpirySettings {
	root: u32,
	scopes: BTreeMap<Box<str>, u32>,
}

impl FrozenExpirySettings {
	/// Effective expiry duration for a request path.
	///
	/// The longest registered scope covering the path wins; paths covered
	/// by no scope get the root duration.
	pub fn resolve(&self, path: &str) -> u32 {
		self.scopes
			.iter()
			.filter(|(scope, _)| prefix_matches(scope, path))
			.max_by_key(|(scope, _)| scope.len())
			.map_or(self.root, |(_, expire)| *expire)
	}

	/// The root scope's effective duration.
	pub fn root(&self) -> u32 {
		self.root
	}

	/// Number of registered non-root scopes.
	pub fn len(&self) -> usize {
		self.scopes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.scopes.is_empty()
	}
}


// vim: ts=4
