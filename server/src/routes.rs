//! HTTP routes of the standalone server.

use axum::{
	Json, Router,
	http::header::CACHE_CONTROL,
	middleware,
	response::IntoResponse,
	routing::get,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use dayttl::middleware::{cache_control, clamped_expiry};
use dayttl::settings::FrozenExpirySettings;
use dayttl::{Expiry, TtlResult};

pub fn init(settings: Arc<FrozenExpirySettings>) -> Router {
	Router::new()
		.route("/", get(get_index))
		.route("/time", get(get_time))
		.layer(middleware::from_fn_with_state(settings, clamped_expiry))
		.layer(TraceLayer::new_for_http())
}

/// Demo endpoint driving response caching from the clamped expiry.
async fn get_index(Expiry(expiry): Expiry) -> TtlResult<impl IntoResponse> {
	Ok(([(CACHE_CONTROL, cache_control(&expiry)?)], "dayttl\n"))
}

/// The two computed values as JSON.
async fn get_time(Expiry(expiry): Expiry) -> Json<serde_json::Value> {
	Json(serde_json::json!({
		"second": expiry.relative(),
		"unix": expiry.absolute(),
	}))
}

// vim: ts=4
