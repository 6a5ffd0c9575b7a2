//! Error types for the remote todos API.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because the UI treats
//! them differently from an arbitrary failed request: a missing record and a
//! rejected payload are expected outcomes, every other non-2xx status lands
//! in `Http` with the raw status and body. Repositories and use cases never
//! catch these — they propagate unchanged to the invoking component.

use std::fmt;

/// Errors returned by the repository layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 404 — the requested record does not exist.
    NotFound,

    /// The server rejected the payload (400/422), carrying its message unchanged.
    Validation(String),

    /// The server returned an unexpected non-2xx status.
    Http { status: u16, body: String },

    /// The request could not complete.
    Network(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Validation(msg) => write!(f, "validation failed: {msg}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
