//! Dayttl standalone server.
//!
//! Loads the scope configuration, freezes it, and serves a small router
//! that publishes the computed expiry values on every response.

use std::{env, sync::Arc};

use tokio::net::TcpListener;
use tracing::{info, warn};

use dayttl::settings::{ExpirySettings, load_path};

mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.init();

	let config_path = env::var("DAYTTL_CONFIG").unwrap_or_else(|_| "./dayttl.yaml".into());
	let listen = env::var("DAYTTL_LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".into());

	let settings = match load_path(&config_path) {
		Ok(settings) => settings,
		Err(dayttl::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
			warn!("Configuration file {} not found, using defaults", config_path);
			ExpirySettings::new()
		}
		// Out-of-range or malformed configuration aborts startup
		Err(err) => return Err(err.into()),
	};
	let settings = Arc::new(settings.freeze());

	let app = routes::init(settings);
	let listener = TcpListener::bind(&listen).await?;
	info!("Listening on {}", listen);
	axum::serve(listener, app).await?;

	Ok(())
}

// vim: ts=4
