//! Error types for query materialization.

use thiserror::Error;

/// Errors surfaced while materializing a query.
///
/// Materialization is fail-fast: the first resolution or comparison problem
/// aborts the whole call and nothing partial is returned.
#[derive(Debug, Error)]
pub enum SiftError {
    /// A path segment did not resolve against the record under it.
    #[error("cannot resolve `{segment}` while walking `{path}`")]
    NoSuchField { path: String, segment: String },

    /// Ordering comparison between incompatible value kinds.
    #[error("cannot order {left} against {right}")]
    Incomparable {
        left: &'static str,
        right: &'static str,
    },

    /// A containment test ran against a non-string value.
    #[error("contains requires a string value, found {kind}")]
    NotText { kind: &'static str },

    /// A grouping key of a kind that cannot form a bucket.
    #[error("cannot group by {kind} values")]
    BadGroupKey { kind: &'static str },

    /// Invalid regular expression passed to a containment test.
    #[error("invalid pattern: {0}")]
    BadPattern(#[from] regex::Error),
}

impl SiftError {
    pub(crate) fn no_such_field(path: &str, segment: &str) -> Self {
        SiftError::NoSuchField {
            path: path.to_owned(),
            segment: segment.to_owned(),
        }
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, SiftError>;
