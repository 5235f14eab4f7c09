//! Error types for decoding API payloads into typed records.

use thiserror::Error;

/// Errors raised while turning raw JSON into typed records.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The payload is a JSON object but lacks keys the record requires.
    ///
    /// Every absent key is reported at once so one round trip surfaces
    /// the whole mismatch instead of the first missing field.
    #[error("{resource} payload is missing required keys: {}", keys.join(", "))]
    MissingKeys {
        resource: &'static str,
        keys: Vec<String>,
    },

    /// The payload for a single record is not a JSON object.
    #[error("{resource} payload must be a JSON object")]
    NotAnObject { resource: &'static str },

    /// The payload for a record collection is not a JSON array.
    #[error("{resource} collection payload must be a JSON array")]
    NotAnArray { resource: &'static str },

    /// The payload shape matched but a field failed to deserialize.
    #[error("failed to decode record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience alias for model results.
pub type Result<T> = std::result::Result<T, ModelError>;
