//! Error types for the spline viewer library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, parsing or charting spline output.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file ended before all four sequences were read.
    #[error("line {line} ({name}) is missing")]
    MissingLine { line: usize, name: &'static str },

    /// A token could not be parsed as a floating-point number.
    #[error("line {line} ({name}), column {column}: '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        name: &'static str,
        column: usize,
        token: String,
    },

    /// Paired x / y sequences have different lengths.
    #[error("series '{series}': x has {x_len} values but y has {y_len}")]
    DimensionMismatch {
        series: String,
        x_len: usize,
        y_len: usize,
    },

    /// A series has nothing to draw.
    #[error("series '{series}' is empty")]
    EmptySeries { series: String },

    /// A plot format string could not be understood.
    #[error("invalid style '{format}': {reason}")]
    InvalidStyle { format: String, reason: String },

    /// Malformed node document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an Io error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch(series: impl Into<String>, x_len: usize, y_len: usize) -> Self {
        Self::DimensionMismatch {
            series: series.into(),
            x_len,
            y_len,
        }
    }

    /// Create an InvalidStyle error.
    pub fn invalid_style(format: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidStyle {
            format: format.into(),
            reason: reason.into(),
        }
    }
}
