//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output in the
//! supported formats (human-readable, JSON, pretty JSON, YAML), with
//! specialized rendering for validation reports.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use medrec_core::ValidationReport;
use serde::Serialize;
use std::io::{self, Write};
use tracing::trace;

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a validation report
    fn format_validation_report(&self, report: &ValidationReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_validation_report(&self, report: &ValidationReport) -> Result<String> {
        match self {
            OutputFormat::Human => format_validation_report_human(report),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[allow(dead_code)]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        trace!("outputting structured data");
        let formatted = self.format.format(value)?;
        self.writeln(&formatted)
    }

    /// Write pre-rendered report lines (human format only; machine formats
    /// receive the structured results via [`OutputWriter::data`] instead)
    pub fn report_lines(&mut self, lines: &[String]) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }
        for line in lines {
            self.writeln(line)?;
        }
        Ok(())
    }

    /// Write a validation report with specialized formatting
    pub fn validation_report(&mut self, report: &ValidationReport) -> Result<()> {
        let formatted = self.format.format_validation_report(report)?;
        self.writeln(&formatted)
    }
}

/// Format a validation report for human reading
fn format_validation_report_human(report: &ValidationReport) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("Valid: {}\n", report.valid));

    if !report.errors.is_empty() {
        output.push_str("Errors:\n");
        for error in &report.errors {
            output.push_str(&format!("  - {}\n", error));
        }
    }

    if !report.warnings.is_empty() {
        output.push_str("Warnings:\n");
        for warning in &report.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }

    if report.is_clean() {
        output.push_str("No issues found!\n");
    }

    Ok(output)
}
