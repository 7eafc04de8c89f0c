//! Error types for the medrec core library
//!
//! The extraction and validation functions themselves never fail: every field
//! lookup is defaulting, and validation findings are data in the report, not
//! errors. This type covers the record/schema loading surface used by callers
//! that feed the core from files.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for medrec operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors while reading a record or schema file
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing errors
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Load and parse a JSON file into a generic value.
///
/// This is the collaborator-level loader: failures here are expected to be
/// handled as skip decisions by the caller, never propagated into the
/// extraction or validation core.
pub fn load_json_file(path: &std::path::Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}
