//! Report command handler - the driver that iterates the fixed list of
//! schema/record pairs, extracting and validating each one.

use crate::cli::{OutputFormat, ReportArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use medrec_core::{extract, render_report, validate, RecordKind};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

use super::utils::load_document;

/// One processed schema/record pair, for machine output formats
#[derive(Debug, Serialize)]
struct KindReport {
    record_kind: RecordKind,
    extraction: medrec_core::ExtractionResult,
    validation: medrec_core::ValidationReport,
}

/// Handle the report command
#[instrument(skip(config, output))]
pub fn handle_report(args: ReportArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let schemas_dir = args
        .schemas_dir
        .unwrap_or_else(|| config.paths.schemas_dir.clone());
    let records_dir = args
        .records_dir
        .unwrap_or_else(|| config.paths.records_dir.clone());

    let kinds: Vec<RecordKind> = match args.kind {
        Some(kind) => vec![kind.into()],
        None => vec![
            RecordKind::Patient,
            RecordKind::MedicalRecord,
            RecordKind::ClinicalStudy,
        ],
    };

    info!(
        schemas_dir = %schemas_dir.display(),
        records_dir = %records_dir.display(),
        kinds = kinds.len(),
        "Processing schemas and records"
    );
    output.section("METADATA EXTRACTION TOOL")?;
    output.info("Processing schemas and examples...")?;

    let mut collected = Vec::new();
    for kind in kinds {
        let schema_path = schemas_dir.join(format!("{kind}_schema.json"));
        let record_path = records_dir.join(format!("{kind}_example.json"));

        // loader failures are a skip, not a crash
        let Some((schema, record)) = load_pair(&schema_path, &record_path, kind, output)? else {
            continue;
        };

        let extraction = extract(&record, kind);
        let validation = validate(&record, &schema);

        if output.format() == OutputFormat::Human {
            let lines = render_report(&extraction, &validation, &schema);
            output.report_lines(&lines)?;
            output.writeln("")?;
        } else {
            collected.push(KindReport {
                record_kind: kind,
                extraction,
                validation,
            });
        }
    }

    if output.format() != OutputFormat::Human {
        output.data(&collected)?;
    }
    output.info("Metadata extraction complete!")?;

    Ok(())
}

/// Load both sides of a pair, reporting any failure as a skip
fn load_pair(
    schema_path: &PathBuf,
    record_path: &PathBuf,
    kind: RecordKind,
    output: &mut OutputWriter,
) -> Result<Option<(Value, Value)>> {
    let schema = match load_document(schema_path) {
        Ok(schema) => schema,
        Err(e) => {
            warn!(kind = %kind, error = %e, "skipping pair");
            output.warning(&format!("Skipping {kind} due to loading errors: {e}"))?;
            return Ok(None);
        }
    };
    let record = match load_document(record_path) {
        Ok(record) => record,
        Err(e) => {
            warn!(kind = %kind, error = %e, "skipping pair");
            output.warning(&format!("Skipping {kind} due to loading errors: {e}"))?;
            return Ok(None);
        }
    };
    Ok(Some((schema, record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ReportArgs;
    use std::fs;
    use std::io::Write as _;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn write_file(dir: &std::path::Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        write!(file, "{content}").unwrap();
    }

    #[test]
    fn test_report_renders_pairs_and_skips_missing() {
        let root = tempfile::tempdir().unwrap();
        let schemas = root.path().join("schemas");
        let records = root.path().join("records");
        fs::create_dir_all(&schemas).unwrap();
        fs::create_dir_all(&records).unwrap();

        // only the patient pair exists; the other two kinds must skip
        write_file(
            &schemas,
            "patient_schema.json",
            r#"{"title": "Patient", "required": ["patientId"], "properties": {"patientId": {"type": "string"}}}"#,
        );
        write_file(
            &records,
            "patient_example.json",
            r#"{"patientId": "P1", "personalInfo": {"firstName": "A", "lastName": "B"}}"#,
        );

        let buf = SharedBuf(Arc::new(Mutex::new(Vec::new())));
        let mut output = crate::output::OutputWriter::with_writer(
            OutputFormat::Human,
            false,
            false,
            Box::new(buf.clone()),
        );

        let args = ReportArgs {
            schemas_dir: Some(schemas),
            records_dir: Some(records),
            kind: None,
        };
        handle_report(args, &Config::default(), &mut output).unwrap();

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("METADATA EXTRACTION REPORT - PATIENT"));
        assert!(out.contains("  name: A B"));
        assert!(out.contains("WARNING: Skipping medical_record"));
        assert!(out.contains("WARNING: Skipping clinical_study"));
    }

    #[test]
    fn test_skip_message_carries_decode_detail() {
        let root = tempfile::tempdir().unwrap();
        let schemas = root.path().join("schemas");
        let records = root.path().join("records");
        fs::create_dir_all(&schemas).unwrap();
        fs::create_dir_all(&records).unwrap();

        write_file(&schemas, "patient_schema.json", "{not valid json");
        write_file(&records, "patient_example.json", r#"{"patientId": "P1"}"#);

        let buf = SharedBuf(Arc::new(Mutex::new(Vec::new())));
        let mut output = crate::output::OutputWriter::with_writer(
            OutputFormat::Human,
            false,
            false,
            Box::new(buf.clone()),
        );

        let args = ReportArgs {
            schemas_dir: Some(schemas),
            records_dir: Some(records),
            kind: Some(crate::cli::KindArg::Patient),
        };
        handle_report(args, &Config::default(), &mut output).unwrap();

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("WARNING: Skipping patient"));
        assert!(out.contains("Invalid JSON in"));
        assert!(out.contains("patient_schema.json"));
    }

    #[test]
    fn test_report_machine_output_collects_results() {
        let root = tempfile::tempdir().unwrap();
        let schemas = root.path().join("schemas");
        let records = root.path().join("records");
        fs::create_dir_all(&schemas).unwrap();
        fs::create_dir_all(&records).unwrap();

        write_file(&schemas, "clinical_study_schema.json", r#"{"required": []}"#);
        write_file(
            &records,
            "clinical_study_example.json",
            r#"{"studyId": "S1", "enrollment": {"actual": 3, "target": 9}}"#,
        );

        let buf = SharedBuf(Arc::new(Mutex::new(Vec::new())));
        let mut output = crate::output::OutputWriter::with_writer(
            OutputFormat::Json,
            false,
            false,
            Box::new(buf.clone()),
        );

        let args = ReportArgs {
            schemas_dir: Some(schemas),
            records_dir: Some(records),
            kind: Some(crate::cli::KindArg::ClinicalStudy),
        };
        handle_report(args, &Config::default(), &mut output).unwrap();

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let value: Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value[0]["record_kind"], "clinical_study");
        assert_eq!(
            value[0]["extraction"]["data_summary"]["enrollment_progress"],
            "3/9"
        );
        assert_eq!(value[0]["validation"]["valid"], true);
    }
}
