pub use crate::error::{Error, TtlResult};
pub use crate::types::Timestamp;

pub use tracing::{debug, error, info, warn};

// vim: ts=4
