//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use medrec_core::RecordKind;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Medrec CLI - Healthcare record metadata extraction and validation
///
/// A command-line tool for extracting normalized metadata summaries from
/// healthcare JSON records and validating their structure against JSON
/// Schema-like descriptions.
#[derive(Parser, Debug)]
#[command(
    name = "medrec",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MEDREC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full report over the configured schema/record pairs
    Report(ReportArgs),

    /// Extract a metadata summary from a single record
    Extract(ExtractArgs),

    /// Validate a single record against a schema description
    Validate(ValidateArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the report command
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Directory containing the schema files (overrides config)
    #[arg(long, value_name = "DIR")]
    pub schemas_dir: Option<PathBuf>,

    /// Directory containing the example record files (overrides config)
    #[arg(long, value_name = "DIR")]
    pub records_dir: Option<PathBuf>,

    /// Only process this record kind instead of all three
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

/// Arguments for the extract command
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Path to the record file (JSON or YAML)
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Record kind selecting which fields to project
    #[arg(short, long, value_enum)]
    pub kind: KindArg,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the record file (JSON or YAML)
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Path to the schema description file (JSON or YAML)
    #[arg(short, long, value_name = "SCHEMA")]
    pub schema: PathBuf,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Record kinds accepted on the command line
///
/// Value names stay snake_case so the CLI vocabulary matches the serialized
/// tags and the generated `<kind>_schema.json` file names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum KindArg {
    /// Patient demographic record
    Patient,
    /// Medical record (encounter, consultation, lab report)
    MedicalRecord,
    /// Clinical study description
    ClinicalStudy,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// Pretty-printed JSON output
    JsonPretty,
    /// YAML output
    Yaml,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Patient => RecordKind::Patient,
            KindArg::MedicalRecord => RecordKind::MedicalRecord,
            KindArg::ClinicalStudy => RecordKind::ClinicalStudy,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify that the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["medrec", "-vv", "report"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["medrec", "--quiet", "report"]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_subcommand_parsing() {
        let cli = Cli::parse_from(["medrec", "extract", "r.json", "--kind", "patient"]);
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.record, PathBuf::from("r.json"));
                assert_eq!(args.kind, KindArg::Patient);
            }
            other => panic!("expected extract subcommand, got {other:?}"),
        }

        let cli = Cli::parse_from(["medrec", "validate", "r.json", "--schema", "s.json"]);
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.schema, PathBuf::from("s.json"));
            }
            other => panic!("expected validate subcommand, got {other:?}"),
        }
    }

    #[test]
    fn test_kind_arg_value_names_match_record_tags() {
        for (kind, tag) in [
            (KindArg::Patient, "patient"),
            (KindArg::MedicalRecord, "medical_record"),
            (KindArg::ClinicalStudy, "clinical_study"),
        ] {
            assert_eq!(kind.to_possible_value().unwrap().get_name(), tag);
            assert_eq!(RecordKind::from(kind).as_str(), tag);
        }

        let cli = Cli::parse_from(["medrec", "extract", "r.json", "--kind", "medical_record"]);
        match cli.command {
            Commands::Extract(args) => assert_eq!(args.kind, KindArg::MedicalRecord),
            other => panic!("expected extract subcommand, got {other:?}"),
        }
    }

    #[test]
    fn test_kind_arg_maps_to_record_kind() {
        assert_eq!(RecordKind::from(KindArg::Patient), RecordKind::Patient);
        assert_eq!(
            RecordKind::from(KindArg::MedicalRecord),
            RecordKind::MedicalRecord
        );
        assert_eq!(
            RecordKind::from(KindArg::ClinicalStudy),
            RecordKind::ClinicalStudy
        );
    }
}
