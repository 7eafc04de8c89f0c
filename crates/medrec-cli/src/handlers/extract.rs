//! Extract command handler

use crate::cli::{ExtractArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use medrec_core::path::display_scalar;
use medrec_core::{extract, RecordKind};
use tracing::{info, instrument};

use super::utils::load_document;

/// Handle the extract command
#[instrument(skip(_config, output), fields(file = %args.record.display(), kind = ?args.kind))]
pub fn handle_extract(
    args: ExtractArgs,
    _config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let kind = RecordKind::from(args.kind);
    info!("Extracting record metadata");
    output.info(&format!(
        "Extracting {} metadata from {}",
        kind,
        args.record.display()
    ))?;

    let record = load_document(&args.record)?;
    let extraction = extract(&record, kind);

    if output.format() == OutputFormat::Human {
        output.section("Extraction Details")?;
        output.writeln(&format!("Timestamp: {}", extraction.extraction_timestamp))?;
        output.writeln(&format!("Schema Type: {}", extraction.record_kind))?;

        output.section("Data Summary")?;
        for (key, value) in &extraction.data_summary {
            output.writeln(&format!("{}: {}", key, display_scalar(value)))?;
        }

        if let Some(metadata) = &extraction.embedded_metadata {
            output.section("Embedded Metadata")?;
            output.writeln(&display_scalar(metadata))?;
        }
    } else {
        output.data(&extraction)?;
    }

    Ok(())
}
