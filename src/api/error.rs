//! Error types and the failure normalizer.
//!
//! Three failure sources collapse into one `ApiError` shape: a reachable
//! endpoint answering non-2xx, a value that is already an `ApiError`, and
//! everything else (connection failure, malformed body, timeout). Callers
//! only ever see `ApiError`. Configuration defects are a separate
//! `ConfigError` that aborts client construction instead of surfacing per
//! call.

use thiserror::Error;

/// Fallback message when a non-2xx response carries no usable message body.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "the server reported an error";
/// Fallback message for failures with no response at all.
pub const UNEXPECTED_FALLBACK_MESSAGE: &str = "an unexpected error occurred";

/// Canonical failure shape surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("api error: status={status}, message={message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// A failure nothing could classify: always 500 with the generic message.
    pub fn unexpected() -> Self {
        Self::new(500, UNEXPECTED_FALLBACK_MESSAGE)
    }
}

/// Failure raised at the transport seam, before normalization.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The endpoint was reachable and answered with a non-2xx status.
    #[error("status {status}")]
    Status { status: u16, message: Option<String> },

    /// Already in canonical shape; passes through the normalizer unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Anything else: connection failure, malformed body, timeout.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// The error normalizer. Deterministic, no I/O, no logging.
impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Status { status, message } => ApiError::new(
                status,
                message.unwrap_or_else(|| TRANSPORT_FALLBACK_MESSAGE.to_string()),
            ),
            TransportError::Api(err) => err,
            TransportError::Unexpected(_) => ApiError::unexpected(),
        }
    }
}

/// Configuration defect detected while building the client. Fatal: the
/// client is never constructed, and the singleton hands the same error to
/// every caller instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("duplicate api method '{module}.{method}' in registry")]
    DuplicateMethod { module: String, method: String },

    #[error("duplicate mock responder for {verb} {path}")]
    DuplicateResponder { verb: String, path: String },

    #[error("failed to build http transport: {0}")]
    Transport(String),
}
