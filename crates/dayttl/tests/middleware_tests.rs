//! End-to-end tests driving the expiry middleware through a real router.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Router, body::Body, http::Request, http::StatusCode, middleware, routing::get};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use dayttl::middleware::{TIME_SECOND, TIME_UNIX, clamped_expiry};
use dayttl::settings::load_str;
use dayttl::{ClampedExpiry, Expiry};

async fn show_expiry(Expiry(expiry): Expiry) -> String {
	format!("{} {}", expiry.relative(), expiry.absolute())
}

fn test_router(config: &str) -> Router {
	let settings = Arc::new(load_str(config).unwrap().freeze());
	Router::new()
		.route("/", get(show_expiry))
		.route("/api/items", get(show_expiry))
		.layer(middleware::from_fn_with_state(settings, clamped_expiry))
}

fn epoch_now() -> i64 {
	SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs() as i64
}

fn header_i64(res: &axum::response::Response, name: &axum::http::HeaderName) -> i64 {
	res.headers()[name].to_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_headers_present_and_consistent() {
	let app = test_router("expire: 3600");

	let before = epoch_now();
	let res = app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();
	let after = epoch_now();

	assert_eq!(res.status(), StatusCode::OK);
	let second = header_i64(&res, &TIME_SECOND);
	let unix = header_i64(&res, &TIME_UNIX);

	assert!((0..=3600).contains(&second));
	// absolute == now + relative, for the now captured inside the request
	assert!(unix >= before + second);
	assert!(unix <= after + second);
}

#[tokio::test]
async fn test_zero_expire_scope() {
	let config = r"
expire: 3600
locations:
  api:
    expire: 0
";
	let app = test_router(config);

	let before = epoch_now();
	let res =
		app.oneshot(Request::get("/api/items").body(Body::empty()).unwrap()).await.unwrap();
	let after = epoch_now();

	assert_eq!(res.headers()[&TIME_SECOND], "0");
	let unix = header_i64(&res, &TIME_UNIX);
	assert!(unix >= before && unix <= after);
}

#[tokio::test]
async fn test_scope_resolution_by_path() {
	let config = r"
expire: 3600
locations:
  api:
    expire: 0
";
	let app = test_router(config);

	// The root path does not match /api and keeps the root duration
	let res = app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();
	let second = header_i64(&res, &TIME_SECOND);
	assert!(second > 0 || near_midnight());
}

#[tokio::test]
async fn test_decimal_ascii_rendering() {
	let app = test_router("expire: 61");
	let res = app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();

	for name in [&TIME_SECOND, &TIME_UNIX] {
		let value = res.headers()[name].to_str().unwrap().to_string();
		assert!(!value.is_empty());
		assert!(value.chars().all(|c| c.is_ascii_digit()), "{}: {}", name, value);
		// no leading zeros beyond "0" itself
		assert!(value == "0" || !value.starts_with('0'), "{}: {}", name, value);
	}
}

#[tokio::test]
async fn test_extractor_matches_headers() {
	let app = test_router("expire: 120");
	let res = app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();

	let second = res.headers()[&TIME_SECOND].to_str().unwrap().to_string();
	let unix = res.headers()[&TIME_UNIX].to_str().unwrap().to_string();
	let body = res.into_body().collect().await.unwrap().to_bytes();

	// The handler saw the same computation the headers carry
	assert_eq!(&body[..], format!("{} {}", second, unix).as_bytes());
}

#[tokio::test]
async fn test_extractor_without_middleware_fails() {
	let app = Router::new().route("/", get(show_expiry));
	let res = app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();
	assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_recomputed_per_request() {
	let config = r"
locations:
  api:
    expire: 0
";
	let app = test_router(config);

	// Same inputs give the same outputs; the value is not carried over
	// from a previous request's cache.
	let res1 = app
		.clone()
		.oneshot(Request::get("/api/items").body(Body::empty()).unwrap())
		.await
		.unwrap();
	let res2 =
		app.oneshot(Request::get("/api/items").body(Body::empty()).unwrap()).await.unwrap();
	assert_eq!(res1.headers()[&TIME_SECOND], "0");
	assert_eq!(res2.headers()[&TIME_SECOND], "0");
}

/// True within the last few seconds of the local day, where a clamped
/// root duration can legitimately reach 0.
fn near_midnight() -> bool {
	ClampedExpiry::now(86399).relative() < 5
}
