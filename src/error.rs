//! Error types for vision operations.
//!
//! Every public operation reports failure through [`VisionError`]; nothing in
//! the library aborts the process on malformed input.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for dataset decoding and matrix operations.
///
/// # Examples
///
/// ```
/// use vision::error::{ErrorKind, VisionError};
///
/// let err = VisionError::index_out_of_bounds(10, 4);
/// assert_eq!(err.kind(), ErrorKind::Index);
/// assert!(err.to_string().contains("index 10"));
/// ```
#[derive(Error, Debug)]
pub enum VisionError {
    /// Input bytes do not follow the expected layout.
    #[error("Invalid dataset format: {message}")]
    Format {
        /// Error description
        message: String,
    },

    /// File could not be opened.
    #[error("Failed to open file '{}': {source}", path.display())]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// I/O error while reading, seeking or querying a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fewer bytes arrived than the file reported at open time.
    #[error("Short read on '{}': expected {expected} bytes, got {actual}", path.display())]
    ShortRead {
        /// File being read
        path: PathBuf,
        /// Bytes requested
        expected: usize,
        /// Bytes actually read
        actual: usize,
    },

    /// Record, row, column or label index past the declared bound.
    #[error("index {index} out of bounds (len={len})")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of valid entries
        len: usize,
    },

    /// Matrix shapes are incompatible for the operation.
    #[error("Matrix shape mismatch in {op}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Operation that rejected the operands
        op: &'static str,
        /// Expected shape description
        expected: String,
        /// Actual shape description
        actual: String,
    },
}

/// Coarse failure category of a [`VisionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed dataset or label file.
    Format,
    /// File missing, unreadable, or short read.
    Io,
    /// Index outside declared bounds.
    Index,
    /// Incompatible matrix shapes.
    Shape,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Format => "format",
            ErrorKind::Io => "io",
            ErrorKind::Index => "index",
            ErrorKind::Shape => "shape",
        };
        f.write_str(name)
    }
}

impl VisionError {
    /// Returns the failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            VisionError::Format { .. } => ErrorKind::Format,
            VisionError::Open { .. } | VisionError::Io(_) | VisionError::ShortRead { .. } => {
                ErrorKind::Io
            }
            VisionError::IndexOutOfBounds { .. } => ErrorKind::Index,
            VisionError::ShapeMismatch { .. } => ErrorKind::Shape,
        }
    }

    /// Create a format error with a message.
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create an index out of bounds error
    #[must_use]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Create a shape mismatch error from two `(rows, cols)` pairs.
    #[must_use]
    pub fn shape_mismatch(
        op: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::ShapeMismatch {
            op,
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, VisionError>;
