//! Medrec Core - Metadata extraction and shallow validation for healthcare records
//!
//! This crate provides the decision-making core of the medrec tool: extracting
//! a normalized metadata summary from a healthcare JSON record and performing a
//! shallow structural validation of the record against a JSON Schema-like
//! description.
//!
//! # Main Components
//!
//! - **Core Types**: [`RecordKind`], [`ExtractionResult`], [`ValidationReport`]
//! - **Extractor**: [`extract`] projects kind-specific fields into a flat summary
//! - **Validator**: [`validate`] checks required fields and reports type mismatches
//! - **Reporter**: [`render_report`] formats both results into display lines
//!
//! Both core operations are pure functions of their inputs (aside from the
//! clock read in [`extract`]): they never mutate the record, never fail on
//! malformed or missing fields, and hold no state across invocations.
//!
//! # Example
//!
//! ```
//! use medrec_core::{extract, validate, RecordKind};
//! use serde_json::json;
//!
//! let record = json!({
//!     "patientId": "P1",
//!     "personalInfo": {"firstName": "Ada", "lastName": "Lovelace"}
//! });
//! let schema = json!({
//!     "required": ["patientId"],
//!     "properties": {"patientId": {"type": "string"}}
//! });
//!
//! let extraction = extract(&record, RecordKind::Patient);
//! assert_eq!(extraction.data_summary["name"], "Ada Lovelace");
//!
//! let report = validate(&record, &schema);
//! assert!(report.valid);
//! ```

pub mod error;
pub mod extract;
pub mod path;
pub mod report;
pub mod types;
pub mod validate;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use extract::extract;
pub use path::{json_type_name, lookup, lookup_or_null};
pub use report::render_report;
pub use types::{ExtractionResult, RecordKind, ValidationReport};
pub use validate::validate;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }
}
