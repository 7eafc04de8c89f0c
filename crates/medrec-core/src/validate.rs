//! Shallow structural validation against a JSON Schema-like description
//!
//! Two passes over the record: required-field presence (errors, flip `valid`)
//! and declared-type comparison (warnings, never flip `valid`). Intentionally
//! shallow: no recursion into nested object or array shapes, no `$ref`,
//! `anyOf`, format, or pattern support.

use crate::path::json_type_name;
use crate::types::ValidationReport;
use serde_json::Value;
use tracing::debug;

/// Validate a record against the `required` and `properties` sections of a
/// schema description.
///
/// Validation findings are data in the report, never errors: a missing
/// required field produces an error line and `valid = false`; a type mismatch
/// for a field the schema describes produces a warning line only. Fields the
/// schema does not describe are ignored, and described fields absent from the
/// record are left to the required check. Deterministic for identical inputs.
pub fn validate(record: &Value, schema: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();
    let record_fields = record.as_object();

    // Required fields, in the schema's declaration order. A non-object record
    // has no fields, so every required name is missing.
    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for field in required.iter().filter_map(Value::as_str) {
            let present = record_fields.is_some_and(|fields| fields.contains_key(field));
            if !present {
                report.valid = false;
                report
                    .errors
                    .push(format!("Missing required field: {field}"));
            }
        }
    }

    // Declared-type comparison for fields actually present, in record key
    // order. Tags compare textually, so an integer value warns against a
    // declared "number".
    if let (Some(fields), Some(properties)) = (
        record_fields,
        schema.get("properties").and_then(Value::as_object),
    ) {
        for (field_name, field_value) in fields {
            let Some(expected) = properties
                .get(field_name)
                .and_then(|descriptor| descriptor.get("type"))
                .and_then(Value::as_str)
            else {
                continue;
            };
            let actual = json_type_name(field_value);
            if actual != expected {
                report.warnings.push(format!(
                    "Type mismatch for '{field_name}': expected {expected}, got {actual}"
                ));
            }
        }
    }

    debug!(
        valid = report.valid,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validation finished"
    );
    report
}
