//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the medrec-core library
    #[error("Core error: {0}")]
    Core(#[from] medrec_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Invalid file format
    #[error("Invalid file format for {}: expected {} format: {source}", path.display(), expected)]
    InvalidFormat {
        path: PathBuf,
        expected: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record failed validation (missing required fields)
    #[error("Record failed validation with {count} error(s)")]
    ValidationFailed { count: usize },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationFailed { .. } => 2,
            Self::FileNotFound { .. } => 3,
            Self::InvalidFormat { .. } => 4,
            Self::Config(_) => 5,
            Self::Core(_) => 6,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Io(_) => 1,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            Error::ValidationFailed { count: 1 },
            Error::FileNotFound {
                path: PathBuf::from("x.json"),
            },
            Error::Config("bad".to_string()),
            Error::Core(medrec_core::Error::Io {
                path: PathBuf::from("x.json"),
                source: io::Error::new(io::ErrorKind::NotFound, "gone"),
            }),
            Error::other("anything"),
        ];
        let mut codes: Vec<i32> = errors.iter().map(Error::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_format_error_plain() {
        let err = Error::FileNotFound {
            path: PathBuf::from("records/patient.json"),
        };
        let formatted = format_error(&err, false);
        assert!(formatted.starts_with("Error: "));
        assert!(formatted.contains("patient.json"));
    }
}
