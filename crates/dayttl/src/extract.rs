//! Request extractors for computed expiry values.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::expiry::ClampedExpiry;
use crate::prelude::*;

// Expiry //
//********//
/// Clamped expiry computed for the current request.
///
/// Inserted into the request extensions by the
/// [`clamped_expiry`](crate::middleware::clamped_expiry) middleware; a
/// handler that extracts it without the middleware installed gets a
/// request-level evaluation error.
#[derive(Clone, Copy, Debug)]
pub struct Expiry(pub ClampedExpiry);

impl<S> FromRequestParts<S> for Expiry
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(expiry) = parts.extensions.get::<Expiry>().copied() {
			Ok(expiry)
		} else {
			Err(Error::EvalError("expiry middleware is not installed".into()))
		}
	}
}

// vim: ts=4
