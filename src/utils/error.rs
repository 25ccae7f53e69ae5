//! Error types for the catalog squarer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.
//! Per-image variants are caught by the batch loop; validation and config errors
//! are fatal and surface through `main`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Validation errors for run setup and image tasks.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug)]
pub enum PathError {
    /// Path does not exist
    #[error("Not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotDirectory(PathBuf),
    /// Directory exists but cannot be written to
    #[error("Not writable: {path} ({reason})")]
    NotWritable { path: PathBuf, reason: String },
    /// IO error accessing the path
    #[error("IO error: {0}")]
    IO(String),
}

/// Main error type for the squarer.
#[derive(Error, Debug)]
pub enum SquarerError {
    /// The file could not be opened or decoded as an image
    #[error("Unreadable image {path}: {reason}")]
    UnreadableImage { path: PathBuf, reason: String },

    /// Extension or format outside the supported set
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Encoding or writing the output failed
    #[error("Write failure {path}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },

    /// The file's location does not follow the product/type folder layout
    #[error("Naming convention mismatch for {path}: {reason}")]
    NamingConventionMismatch { path: PathBuf, reason: String },

    /// Task or input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration file could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),
}

/// Convenience result type for squarer operations.
pub type SquarerResult<T> = Result<T, SquarerError>;

// Helper methods for error creation
impl SquarerError {
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::UnreadableImage {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write_failure(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::WriteFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn naming_mismatch(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::NamingConventionMismatch {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error should stop the whole run rather than one image.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Config(_))
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotDirectory(path.into()))
    }

    pub fn not_writable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Path(PathError::NotWritable {
            path: path.into(),
            reason: reason.to_string(),
        })
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to SquarerError
impl From<io::Error> for SquarerError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert io::Error to PathError
impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to SquarerError
impl From<PathError> for SquarerError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_error_lifts_into_validation() {
        let err: SquarerError = PathError::NotFound(PathBuf::from("/missing")).into();
        assert!(matches!(err, SquarerError::Validation(ValidationError::Path(_))));
        assert!(err.is_fatal());
        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn test_per_image_errors_are_not_fatal() {
        assert!(!SquarerError::unreadable("a.jpg", "truncated").is_fatal());
        assert!(!SquarerError::write_failure("b.jpg", "disk full").is_fatal());
        assert!(!SquarerError::format("gif").is_fatal());
        assert!(!SquarerError::naming_mismatch("c.jpg", "too shallow").is_fatal());
    }
}
