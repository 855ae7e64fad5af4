//! Error types for grid parsing, routing and input handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// A grid row had zero length
    EmptyRow {
        /// Zero-based index of the offending row
        index: usize,
    },

    /// Rows of the grid text differ in length
    InconsistentWidth {
        /// Width established by the first row
        expected: usize,
        /// Length of the first row that differs
        actual: usize,
    },

    /// Route endpoint marker is absent from the grid
    FeatureNotFound {
        /// The marker that was looked up
        marker: char,
    },

    /// Reading the grid text failed
    Input {
        /// Source of the text (`<stdin>` for standard input)
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRow { index } => write!(f, "Empty row at index: {index}"),
            Self::InconsistentWidth { expected, actual } => {
                write!(
                    f,
                    "Each line must have uniform length (expected: {expected}, current {actual})"
                )
            }
            Self::FeatureNotFound { marker } => write!(f, "Feature not found: {marker}"),
            Self::Input { path, source } => {
                write!(f, "Failed to read input '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an input error for the given source path
pub fn input_error(path: impl Into<PathBuf>, source: std::io::Error) -> GridError {
    GridError::Input {
        path: path.into(),
        source,
    }
}
