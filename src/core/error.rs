//! Error types for callscope
//!
//! Extraction itself never fails — malformed or unsupported input yields an
//! empty result. These errors belong to the surrounding layers (export,
//! file reading, CLI).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for callscope operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur around extraction (never inside it)
#[derive(Error, Debug)]
pub enum ExtractError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Language tag or file extension that maps to no dialect
    #[error("Unknown language: {tag}")]
    UnknownLanguage { tag: String },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },
}

impl ExtractError {
    /// Create an unknown-language error
    pub fn unknown_language(tag: impl Into<String>) -> Self {
        ExtractError::UnknownLanguage { tag: tag.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_display() {
        let err = ExtractError::unknown_language("haskell");
        assert!(err.to_string().contains("haskell"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExtractError = io_err.into();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: ExtractError = json_err.into();
        assert!(matches!(err, ExtractError::Json(_)));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = ExtractError::FileNotFound {
            path: PathBuf::from("missing.py"),
        };
        assert!(err.to_string().contains("missing.py"));
    }
}
