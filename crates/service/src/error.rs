//! Typed error enum for the service layer.

use notehub_client::ClientError;
use thiserror::Error;

/// Service-layer error for filter page requests.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Slug did not resolve to a known category. Terminal for the request.
    #[error("not found: {0}")]
    NotFound(String),

    /// Notes API call failed. No retry or fallback is attempted.
    #[error("fetch: {0}")]
    Fetch(#[from] ClientError),

    /// Serialization/deserialization failed in the service layer.
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
