//! Validate command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use medrec_core::validate;
use tracing::{info, instrument, warn};

use super::utils::load_document;

/// Handle the validate command
#[instrument(skip(_config, output), fields(
    record = %args.record.display(),
    schema = %args.schema.display()
))]
pub fn handle_validate(
    args: ValidateArgs,
    _config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    info!("Starting validation");
    output.info(&format!(
        "Validating {} against {}",
        args.record.display(),
        args.schema.display()
    ))?;

    let record = load_document(&args.record)?;
    let schema = load_document(&args.schema)?;

    let report = validate(&record, &schema);

    if report.valid {
        output.success("✓ Record is valid")?;
    } else {
        warn!(errors = report.errors.len(), "record failed validation");
        output.error("✗ Record validation failed")?;
    }
    output.validation_report(&report)?;

    // warnings alone keep the exit code at zero
    if !report.valid {
        return Err(Error::ValidationFailed {
            count: report.errors.len(),
        });
    }

    Ok(())
}
