//! Core types and data structures for extraction and validation results

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// The kind of healthcare record being processed
///
/// Selects which subset of fields the extractor projects into the summary.
/// Unrecognized kind strings map to [`RecordKind::Other`], for which
/// extraction yields an empty summary rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Patient,
    MedicalRecord,
    ClinicalStudy,
    #[serde(other)]
    Other,
}

impl RecordKind {
    /// The snake_case tag used in serialized results and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Patient => "patient",
            RecordKind::MedicalRecord => "medical_record",
            RecordKind::ClinicalStudy => "clinical_study",
            RecordKind::Other => "other",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "patient" => RecordKind::Patient,
            "medical_record" => RecordKind::MedicalRecord,
            "clinical_study" => RecordKind::ClinicalStudy,
            _ => RecordKind::Other,
        })
    }
}

/// Result of extracting metadata from a single record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// UTC instant of extraction, ISO-8601 with trailing `Z`
    pub extraction_timestamp: String,

    /// The declared kind the summary was projected for
    pub record_kind: RecordKind,

    /// Flat kind-specific summary; empty for unrecognized kinds
    pub data_summary: Map<String, Value>,

    /// Verbatim copy of the record's top-level `metadata` block, if present.
    /// Absent and present-but-empty are distinct states consumers may check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_metadata: Option<Value>,
}

/// Result of shallow structural validation of a record against a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// False only when a required field is missing; warnings never flip this
    pub valid: bool,

    /// Missing required fields, in the schema's declaration order
    pub errors: Vec<String>,

    /// Type mismatches for fields the schema describes, in record key order
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// A passing report with no findings
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// True when there are no errors and no warnings at all
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
