//! Error types for decorr.

use ndarray::ShapeError;
use thiserror::Error;

/// Result type alias for decorr operations.
pub type Result<T> = std::result::Result<T, DecorrError>;

/// Errors that can occur in decorr operations.
#[derive(Error, Debug)]
pub enum DecorrError {
    /// A parameter was outside its valid range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Input arrays had incompatible shapes.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },
    /// Input was numerically degenerate (zero variance or rank deficiency).
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
    /// Too few rows to support the requested number of orthogonal columns.
    #[error("Undersized input: {rows} rows cannot support {cols} orthogonal columns")]
    UndersizedInput { rows: usize, cols: usize },
}

impl From<ShapeError> for DecorrError {
    fn from(err: ShapeError) -> Self {
        DecorrError::ShapeMismatch {
            expected: "unknown".to_string(),
            actual: err.to_string(),
        }
    }
}
