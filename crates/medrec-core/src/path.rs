//! Defaulting path navigation over generic JSON values
//!
//! Field access in the extractor is best-effort by design: a missing
//! intermediate object yields nothing rather than an error, so every derived
//! summary field degenerates gracefully to null. Paths are dot-separated
//! object keys only; there is deliberately no array indexing, filtering, or
//! wildcard support here.

use serde_json::Value;

/// Navigate a dot-separated key path through nested objects.
///
/// Returns `None` when any intermediate is missing or not an object.
///
/// ```
/// use medrec_core::path::lookup;
/// use serde_json::json;
///
/// let record = json!({"provider": {"name": "City Clinic"}});
/// assert_eq!(lookup(&record, "provider.name"), Some(&json!("City Clinic")));
/// assert_eq!(lookup(&record, "provider.id"), None);
/// assert_eq!(lookup(&record, "billing.name"), None);
/// ```
pub fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Like [`lookup`], but clones the value and falls back to `Value::Null`
pub fn lookup_or_null(record: &Value, path: &str) -> Value {
    lookup(record, path).cloned().unwrap_or(Value::Null)
}

/// Classify a runtime JSON value into its schema type tag.
///
/// An integer-valued number classifies as `integer`, distinct from `number`.
/// The validator compares these tags textually against the schema's declared
/// type, so a schema using `number` for an integer field will warn.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::Bool(_) => "boolean",
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::Null => "null",
    }
}

/// Render a summary value for display.
///
/// Strings render bare (no quotes), scalars via their JSON form, null as
/// `None`, and compound values as compact JSON.
pub fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        Value::Number(_) | Value::Bool(_) => value.to_string(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_top_level() {
        let record = json!({"patientId": "P1"});
        assert_eq!(lookup(&record, "patientId"), Some(&json!("P1")));
    }

    #[test]
    fn test_lookup_through_non_object() {
        let record = json!({"patientId": "P1"});
        assert_eq!(lookup(&record, "patientId.inner"), None);
        assert_eq!(lookup(&json!([1, 2]), "patientId"), None);
    }

    #[test]
    fn test_lookup_or_null_defaults() {
        let record = json!({"metadata": {"status": "active"}});
        assert_eq!(lookup_or_null(&record, "metadata.status"), json!("active"));
        assert_eq!(lookup_or_null(&record, "metadata.lastVisit"), Value::Null);
        assert_eq!(lookup_or_null(&record, "missing.entirely"), Value::Null);
    }

    #[test]
    fn test_json_type_name_covers_all_shapes() {
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!(42)), "integer");
        assert_eq!(json_type_name(&json!(-7)), "integer");
        assert_eq!(json_type_name(&json!(2.5)), "number");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!({})), "object");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&Value::Null), "null");
    }

    #[test]
    fn test_display_scalar() {
        assert_eq!(display_scalar(&json!("active")), "active");
        assert_eq!(display_scalar(&json!(12)), "12");
        assert_eq!(display_scalar(&json!(false)), "false");
        assert_eq!(display_scalar(&Value::Null), "None");
        assert_eq!(display_scalar(&json!({"a": 1})), "{\"a\":1}");
    }
}
