use axum::{http::StatusCode, response::IntoResponse};

pub type TtlResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Configured expire duration outside the accepted `[0, 86400)` range
	ExpireOutOfRange(i64),
	/// Malformed configuration input
	ConfigError(String),
	/// Request-time evaluation failure
	EvalError(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_yaml::Error> for Error {
	fn from(err: serde_yaml::Error) -> Self {
		Self::ConfigError(err.to_string())
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::ExpireOutOfRange(seconds) => {
				write!(f, "expire duration out of range: {}", seconds)
			}
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::EvalError(msg) => write!(f, "evaluation error: {}", msg),
			Error::Io(err) => write!(f, "I/O error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::EvalError(_) => {
				(StatusCode::INTERNAL_SERVER_ERROR, "evaluation failed").into_response()
			}
			_ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
		}
	}
}


// vim: ts=4
