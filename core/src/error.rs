//! Error types for the painting API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the painting does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging. `FailureKind` folds the variants into
//! the four causes a caller might branch on.

use thiserror::Error;

/// Errors produced while building, executing or parsing a painting request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404; the requested painting does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// No response was obtained: connection refused, DNS failure, I/O error.
    #[error("transport failed: {0}")]
    Transport(String),

    /// A painting id was empty.
    #[error("invalid painting id: {0:?}")]
    InvalidId(String),
}

/// Coarse cause of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The backend could not be reached.
    Network,
    /// The backend answered with a non-2xx status.
    Status,
    /// A payload could not be encoded or decoded.
    Parse,
    /// The caller supplied an invalid argument; no request was sent.
    Validation,
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::NotFound | ApiError::HttpError { .. } => FailureKind::Status,
            ApiError::DeserializationError(_) | ApiError::SerializationError(_) => {
                FailureKind::Parse
            }
            ApiError::Transport(_) => FailureKind::Network,
            ApiError::InvalidId(_) => FailureKind::Validation,
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
