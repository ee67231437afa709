use thiserror::Error;

use crate::forms::validation::FieldErrors;

/// Message shown for any failure that never produced an HTTP response.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Unable to reach the recruitment API";

/// Error returned by the HTTP adapter and the API facade.
///
/// `Display` is the human-readable message only, so it can be shown to the
/// user verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, or a body that could not be read.
    #[error("{message}")]
    Transport { message: String, cause: String },

    /// Non-2xx response. `message` comes from the backend's `detail` when present.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// 2xx response whose body did not match the expected payload.
    #[error("{message}")]
    Decode { status: u16, message: String },

    /// The request was rejected before any network call was made.
    #[error("{0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        ApiError::Transport {
            message: TRANSPORT_FAILURE_MESSAGE.to_string(),
            cause: cause.to_string(),
        }
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } | ApiError::Decode { status, .. } => Some(*status),
            ApiError::Transport { .. } | ApiError::InvalidRequest(_) => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport { message, .. }
            | ApiError::Backend { message, .. }
            | ApiError::Decode { message, .. } => message,
            ApiError::InvalidRequest(message) => message,
        }
    }
}

/// Error returned by a form controller's submit operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Validation failed: {0}")]
    Invalid(FieldErrors),

    #[error("A submission is already in progress")]
    InFlight,

    #[error("No submission is in progress")]
    NotSubmitting,

    #[error(transparent)]
    Api(#[from] ApiError),
}
