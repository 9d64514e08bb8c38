//! Error types for the caching interceptor
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cached operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The operation has no usable key source
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A name override or placeholder could not be bound to an argument
    #[error("Binding error: {0}")]
    Binding(String),

    /// No value exists for the key, either cached as absent or freshly failed
    #[error("Data not found: {key}")]
    NotFound {
        key: String,
        /// Failure raised by the wrapped computation, if any
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store failed
    #[error("Store error: {0}")]
    Store(String),
}

impl CacheError {
    /// Creates a NotFound error with no underlying cause.
    pub fn not_found(key: impl Into<String>) -> Self {
        CacheError::NotFound {
            key: key.into(),
            source: None,
        }
    }

    /// Returns true for the canonical "no value" classification.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::NotFound { .. })
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound { .. } => StatusCode::NOT_FOUND,
            CacheError::Configuration(_)
            | CacheError::Binding(_)
            | CacheError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for cached operations.
pub type Result<T> = std::result::Result<T, CacheError>;
