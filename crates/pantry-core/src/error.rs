//! Unified error type exposed by **`pantry-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the [`PantryClient`](crate::PantryClient). The
//! flow layer later folds them into "the model answered garbage" versus "the
//! model could not be reached".

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PantryError>;

#[derive(Debug, Error)]
pub enum PantryError {
    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the model provider.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The model answered, but the payload does not satisfy the response
    /// schema (e.g. a required field is blank).
    #[error("response does not match schema: {0}")]
    SchemaMismatch(String),

    /// Generic forwarding of any backend-specific error (transport, HTTP
    /// status, malformed envelope).
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid: {0}")]
    Invalid(String),
}

impl PantryError {
    /// `true` when the provider was reached but its output could not be
    /// accepted as the expected shape.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::Serialization(_) | Self::SchemaMismatch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_failures_count_as_schema_mismatch() {
        let err: PantryError = serde_json::from_str::<u8>("\"x\"").unwrap_err().into();
        assert!(err.is_schema_mismatch());
        assert!(PantryError::SchemaMismatch("blank name".into()).is_schema_mismatch());
        assert!(!PantryError::Invalid("missing key".into()).is_schema_mismatch());
    }
}
