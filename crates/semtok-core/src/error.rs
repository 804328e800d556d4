//! Error types and error code constants for semtok.
//!
//! The classifier itself never fails: missing facts suppress tokens instead of
//! raising. Errors only arise at the surfaces around it (reading input,
//! decoding documents, bad arguments) and are unified in [`SemtokError`].
//!
//! ## Error Code Mapping
//!
//! - `2`: Invalid arguments or an undecodable document
//! - `3`: File not found
//! - `10`: Internal and I/O errors

use std::fmt;
use std::io;

use thiserror::Error;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Error codes for JSON output and process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments or input from caller.
    InvalidArguments = 2,
    /// Input file does not exist.
    FileNotFound = 3,
    /// Internal errors (bugs, unexpected state, I/O).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for the CLI and document loading.
#[derive(Debug, Error)]
pub enum SemtokError {
    /// Invalid arguments from caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// The input could not be decoded as a document.
    #[error("invalid document at line {line}, column {column}: {message}")]
    InvalidDocument {
        message: String,
        line: usize,
        column: usize,
    },

    /// I/O failure while reading input or writing output.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    InternalError { message: String },
}

impl From<&SemtokError> for OutputErrorCode {
    fn from(err: &SemtokError) -> Self {
        match err {
            SemtokError::InvalidArguments { .. } => OutputErrorCode::InvalidArguments,
            SemtokError::InvalidDocument { .. } => OutputErrorCode::InvalidArguments,
            SemtokError::FileNotFound { .. } => OutputErrorCode::FileNotFound,
            SemtokError::Io(_) => OutputErrorCode::InternalError,
            SemtokError::InternalError { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<SemtokError> for OutputErrorCode {
    fn from(err: SemtokError) -> Self {
        OutputErrorCode::from(&err)
    }
}

// ============================================================================
// Bridge: serde_json::Error -> SemtokError
// ============================================================================

impl From<serde_json::Error> for SemtokError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return SemtokError::Io(io::Error::other(err));
        }
        SemtokError::InvalidDocument {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl SemtokError {
    /// Create an invalid arguments error.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        SemtokError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        SemtokError::FileNotFound { path: path.into() }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        SemtokError::InternalError {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_args_maps_to_code_2() {
        let err = SemtokError::invalid_args("unknown format");
        assert_eq!(err.error_code(), OutputErrorCode::InvalidArguments);
        assert_eq!(err.error_code().code(), 2);
        assert_eq!(err.to_string(), "invalid arguments: unknown format");
    }

    #[test]
    fn file_not_found_maps_to_code_3() {
        let err = SemtokError::file_not_found("missing.json");
        assert_eq!(OutputErrorCode::from(&err).code(), 3);
        assert_eq!(err.to_string(), "file not found: missing.json");
    }

    #[test]
    fn json_syntax_error_becomes_invalid_document() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  \"module\": ]")
            .expect_err("malformed json");
        let err = SemtokError::from(json_err);
        match &err {
            SemtokError::InvalidDocument { line, .. } => assert_eq!(*line, 2),
            other => panic!("expected InvalidDocument, got {:?}", other),
        }
        assert_eq!(err.error_code(), OutputErrorCode::InvalidArguments);
    }

    #[test]
    fn io_error_maps_to_internal() {
        let err = SemtokError::from(io::Error::other("disk gone"));
        assert_eq!(err.error_code().code(), 10);
        assert_eq!(format!("{}", err.error_code()), "10");
    }
}
