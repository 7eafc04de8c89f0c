//! Report rendering
//!
//! Formats an extraction result and a validation report into ordered display
//! lines. No business logic lives here beyond presence checks; the line layout
//! mirrors the report consumers already parse.

use crate::path::display_scalar;
use crate::types::{ExtractionResult, ValidationReport};
use serde_json::Value;

const RULE: &str = "======================================================================";

/// Render the combined metadata report as an ordered sequence of text lines.
///
/// The schema's display fields (`title`, `$id`, `description`) default to
/// `N/A` when absent. The embedded-metadata section appears only when the
/// extraction carried one.
pub fn render_report(
    extraction: &ExtractionResult,
    validation: &ValidationReport,
    schema: &Value,
) -> Vec<String> {
    let mut lines = Vec::new();
    let display_field = |name: &str| {
        schema
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string()
    };

    lines.push(RULE.to_string());
    lines.push(format!(
        "METADATA EXTRACTION REPORT - {}",
        extraction.record_kind.as_str().to_uppercase()
    ));
    lines.push(RULE.to_string());
    lines.push(String::new());

    lines.push("Schema Information:".to_string());
    lines.push(format!("  Schema Title: {}", display_field("title")));
    lines.push(format!("  Schema ID: {}", display_field("$id")));
    lines.push(format!("  Description: {}", display_field("description")));
    lines.push(String::new());

    lines.push("Extraction Details:".to_string());
    lines.push(format!("  Timestamp: {}", extraction.extraction_timestamp));
    lines.push(format!("  Schema Type: {}", extraction.record_kind));
    lines.push(String::new());

    lines.push("Data Summary:".to_string());
    for (key, value) in &extraction.data_summary {
        lines.push(format!("  {}: {}", key, display_scalar(value)));
    }
    lines.push(String::new());

    if let Some(metadata) = &extraction.embedded_metadata {
        lines.push("Embedded Metadata:".to_string());
        if let Some(fields) = metadata.as_object() {
            for (key, value) in fields {
                lines.push(format!("  {}: {}", key, display_scalar(value)));
            }
        } else {
            lines.push(format!("  {}", display_scalar(metadata)));
        }
        lines.push(String::new());
    }

    lines.push("Validation Results:".to_string());
    lines.push(format!("  Valid: {}", validation.valid));
    if !validation.errors.is_empty() {
        lines.push("  Errors:".to_string());
        for error in &validation.errors {
            lines.push(format!("    - {error}"));
        }
    }
    if !validation.warnings.is_empty() {
        lines.push("  Warnings:".to_string());
        for warning in &validation.warnings {
            lines.push(format!("    - {warning}"));
        }
    }
    if validation.is_clean() {
        lines.push("  No issues found!".to_string());
    }
    lines.push(String::new());

    lines.push(RULE.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordKind;
    use serde_json::{json, Map};

    fn extraction_with(metadata: Option<Value>) -> ExtractionResult {
        let mut summary = Map::new();
        summary.insert("patient_id".to_string(), json!("P1"));
        summary.insert("status".to_string(), Value::Null);
        ExtractionResult {
            extraction_timestamp: "2026-03-01T12:00:00.000000Z".to_string(),
            record_kind: RecordKind::Patient,
            data_summary: summary,
            embedded_metadata: metadata,
        }
    }

    #[test]
    fn test_report_layout() {
        let schema = json!({
            "title": "Patient",
            "$id": "https://example.com/patient.schema.json",
            "description": "A patient record"
        });
        let lines = render_report(&extraction_with(None), &ValidationReport::new(), &schema);

        assert_eq!(lines.first().unwrap(), RULE);
        assert_eq!(lines.last().unwrap(), RULE);
        assert!(lines.contains(&"METADATA EXTRACTION REPORT - PATIENT".to_string()));
        assert!(lines.contains(&"  Schema Title: Patient".to_string()));
        assert!(lines.contains(&"  patient_id: P1".to_string()));
        assert!(lines.contains(&"  status: None".to_string()));
        assert!(lines.contains(&"  No issues found!".to_string()));
    }

    #[test]
    fn test_schema_display_fields_default_to_na() {
        let lines = render_report(&extraction_with(None), &ValidationReport::new(), &json!({}));
        assert!(lines.contains(&"  Schema Title: N/A".to_string()));
        assert!(lines.contains(&"  Schema ID: N/A".to_string()));
        assert!(lines.contains(&"  Description: N/A".to_string()));
    }

    #[test]
    fn test_embedded_metadata_section_only_when_present() {
        let without = render_report(&extraction_with(None), &ValidationReport::new(), &json!({}));
        assert!(!without.contains(&"Embedded Metadata:".to_string()));

        let with = render_report(
            &extraction_with(Some(json!({"status": "active"}))),
            &ValidationReport::new(),
            &json!({}),
        );
        assert!(with.contains(&"Embedded Metadata:".to_string()));
        assert!(with.contains(&"  status: active".to_string()));
    }

    #[test]
    fn test_findings_render_as_bullets() {
        let report = ValidationReport {
            valid: false,
            errors: vec!["Missing required field: patientId".to_string()],
            warnings: vec!["Type mismatch for 'age': expected integer, got string".to_string()],
        };
        let lines = render_report(&extraction_with(None), &report, &json!({}));
        assert!(lines.contains(&"  Valid: false".to_string()));
        assert!(lines.contains(&"    - Missing required field: patientId".to_string()));
        assert!(lines
            .contains(&"    - Type mismatch for 'age': expected integer, got string".to_string()));
        assert!(!lines.contains(&"  No issues found!".to_string()));
    }
}
