//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! Row-level CSV problems are not errors; they are reported as skip records
//! by the import service.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// A transaction kind other than `Income` or `Expense` was supplied
    #[error("invalid transaction type: {0}")]
    InvalidKind(String),

    /// The import source could not be opened or read
    #[error("failed to open file '{path}': {reason}")]
    SourceUnreadable { path: String, reason: String },

    /// The import source could not be parsed as CSV
    #[error("failed to read CSV data: {0}")]
    MalformedSource(String),

    /// The import source has no data rows after the header
    #[error("empty or invalid CSV file")]
    EmptySource,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed user input rejected before reaching the core
    #[error("Validation error: {0}")]
    Validation(String),
}

impl FintrackError {
    /// Create an "unreadable source" error for a path
    pub fn unreadable(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is an invalid kind error
    pub fn is_invalid_kind(&self) -> bool {
        matches!(self, Self::InvalidKind(_))
    }

    /// Check if this error was caused by the import source as a whole
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            Self::SourceUnreadable { .. } | Self::MalformedSource(_) | Self::EmptySource
        )
    }
}

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FintrackError::InvalidKind("Transfer".into());
        assert_eq!(err.to_string(), "invalid transaction type: Transfer");
        assert_eq!(FintrackError::EmptySource.to_string(), "empty or invalid CSV file");
    }

    #[test]
    fn test_unreadable_error() {
        let err = FintrackError::unreadable("missing.csv", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "failed to open file 'missing.csv': No such file or directory"
        );
        assert!(err.is_source_error());
        assert!(!err.is_invalid_kind());
    }

    #[test]
    fn test_source_error_classification() {
        assert!(FintrackError::EmptySource.is_source_error());
        assert!(FintrackError::MalformedSource("bad".into()).is_source_error());
        assert!(!FintrackError::Validation("bad".into()).is_source_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FintrackError = io_err.into();
        assert!(matches!(err, FintrackError::Io(_)));
    }
}
