//! Error types for TLM to tool-table conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for TLM processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Re-serialization failed while prettifying (-4)
    RewriteError = -4,
    /// Content not representable in the ISO-8859-1 output encoding (-5)
    EncodingError = -5,
}

/// Main error type for the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("XML parse error: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("XML rewrite error: {0}")]
    Rewrite(#[from] quick_xml::Error),

    #[error("Character {ch:?} cannot be encoded as ISO-8859-1")]
    Encoding { ch: char },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConvertError::FileNotFound { .. } => ErrorCode::FileNotFound,
            ConvertError::EmptyFile { .. } => ErrorCode::EmptyFile,
            ConvertError::Parse(_) => ErrorCode::ParseError,
            ConvertError::Rewrite(_) => ErrorCode::RewriteError,
            ConvertError::Encoding { .. } => ErrorCode::EncodingError,
            ConvertError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
