//! Error types for comparison

use thiserror::Error;

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;

/// Errors that can occur while preparing values for comparison
///
/// A mismatch is never an error; it is reported as a difference.
#[derive(Debug, Error)]
pub enum CompareError {
    /// An operand could not be serialized
    #[error("failed to serialize {side} value: {source}")]
    Serialize {
        side: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
