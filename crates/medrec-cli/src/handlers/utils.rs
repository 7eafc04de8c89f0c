//! Shared helpers for command handlers

use crate::error::{Error, Result};
use medrec_core::error::load_json_file;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a record or schema file into a generic JSON value.
///
/// YAML files are accepted alongside JSON, sniffed by extension. JSON files
/// go through the core loader, whose typed errors keep the parse detail in
/// skip messages. Missing files and parse failures surface as typed errors
/// for the caller to turn into a skip or an exit, never a panic.
pub fn load_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    if is_yaml {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = content.len(), "document read");
        serde_yaml::from_str(&content).map_err(|source| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
            source: Box::new(source),
        })
    } else {
        Ok(load_json_file(path)?)
    }
}
