//! JSON output types and serialization for CLI responses.
//!
//! ## Design Principles
//!
//! 1. **Structured JSON:** All CLI output on stdout is valid JSON
//! 2. **Status first:** Every response has `status` as first field
//! 3. **Deterministic:** Same input -> same output (field order, token order)
//! 4. **Versioned:** Schema version in every response

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::{OutputErrorCode, SemtokError};
use crate::legend::{EncodedToken, Legend};
use crate::token::TokenItem;

/// Current schema version for all responses.
pub const SCHEMA_VERSION: &str = "1";

// ============================================================================
// Token payloads
// ============================================================================

/// Tokens in one of the two output formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenPayload {
    /// Named kinds and modifiers.
    Tokens { tokens: Vec<TokenItem> },
    /// Legend indices plus the legend they index into.
    Encoded {
        legend: Legend,
        data: Vec<EncodedToken>,
    },
}

impl TokenPayload {
    /// Number of tokens carried.
    pub fn len(&self) -> usize {
        match self {
            TokenPayload::Tokens { tokens } => tokens.len(),
            TokenPayload::Encoded { data, .. } => data.len(),
        }
    }

    /// Whether no tokens are carried.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Response for classifying a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Status: "ok".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Input path, absent when reading stdin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(flatten)]
    pub payload: TokenPayload,
}

impl ClassifyResponse {
    pub fn new(path: Option<String>, payload: TokenPayload) -> Self {
        ClassifyResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            path,
            payload,
        }
    }
}

/// Tokens for one file of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileTokens {
    pub path: String,
    #[serde(flatten)]
    pub payload: TokenPayload,
}

/// Response for classifying every document under a directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    /// Status: "ok".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Per-file results, sorted by path.
    pub files: Vec<FileTokens>,
}

impl BatchResponse {
    pub fn new(files: Vec<FileTokens>) -> Self {
        BatchResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            files,
        }
    }
}

/// Response for the `legend` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendResponse {
    /// Status: "ok".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    pub legend: Legend,
}

impl LegendResponse {
    pub fn new(legend: Legend) -> Self {
        LegendResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            legend,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error details for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Numeric error code, also the process exit status.
    pub code: u8,
    /// Human-readable message.
    pub message: String,
}

impl ErrorInfo {
    /// Create from a SemtokError.
    pub fn from_error(err: &SemtokError) -> Self {
        ErrorInfo {
            code: OutputErrorCode::from(err).code(),
            message: err.to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status: "error".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Error information.
    pub error: ErrorInfo,
}

impl ErrorResponse {
    /// Create an error response from a SemtokError.
    pub fn from_error(err: &SemtokError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo::from_error(err),
        }
    }
}

// ============================================================================
// Emission
// ============================================================================

/// Emit a response as pretty-printed JSON to a writer.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

/// Emit a response as compact JSON (single line) to a writer.
pub fn emit_response_compact<T: Serialize>(
    response: &T,
    writer: &mut impl Write,
) -> io::Result<()> {
    let json = serde_json::to_string(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}
