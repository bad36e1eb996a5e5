//! Request middleware computing the clamped expiry.

use axum::{
	body::Body,
	extract::State,
	http::{HeaderName, HeaderValue, Request, response::Response},
	middleware::Next,
};
use std::sync::Arc;

use crate::expiry::ClampedExpiry;
use crate::extract::Expiry;
use crate::prelude::*;
use crate::settings::FrozenExpirySettings;

/// Relative form: seconds remaining until the clamped expiry.
pub const TIME_SECOND: HeaderName = HeaderName::from_static("x-time-second");
/// Absolute form: epoch timestamp of the clamped expiry.
pub const TIME_UNIX: HeaderName = HeaderName::from_static("x-time-unix");

/// Compute the clamped expiry for the request and publish it.
///
/// Resolves the request path against the frozen settings, captures the
/// clock once, stores the result in the request extensions for the
/// [`Expiry`] extractor, and mirrors both values as response headers.
/// Everything is recomputed on the next request; nothing is cached.
pub async fn clamped_expiry(
	State(settings): State<Arc<FrozenExpirySettings>>,
	mut req: Request<Body>,
	next: Next,
) -> TtlResult<Response<Body>> {
	let expire = settings.resolve(req.uri().path());
	let expiry = ClampedExpiry::now(expire);
	debug!("Expiry for {}: {}s (until {})", req.uri().path(), expiry.relative(), expiry.absolute());

	req.extensions_mut().insert(Expiry(expiry));
	let mut res = next.run(req).await;

	let headers = res.headers_mut();
	headers.insert(TIME_SECOND, decimal_value(expiry.relative())?);
	headers.insert(TIME_UNIX, decimal_value(expiry.absolute())?);

	Ok(res)
}

/// `Cache-Control: max-age=N` value for a computed expiry.
pub fn cache_control(expiry: &ClampedExpiry) -> TtlResult<HeaderValue> {
	HeaderValue::from_str(&format!("max-age={}", expiry.relative()))
		.map_err(|err| Error::EvalError(format!("header value: {}", err)))
}

fn decimal_value(value: impl std::fmt::Display) -> TtlResult<HeaderValue> {
	HeaderValue::from_str(&value.to_string())
		.map_err(|err| Error::EvalError(format!("header value: {}", err)))
}


// vim: ts=4
