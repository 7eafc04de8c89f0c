//! Medrec CLI - Healthcare record metadata extraction and validation
//!
//! This is the main entry point for the medrec CLI application, providing
//! commands for reporting over schema/record pairs and for extracting and
//! validating individual records.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::LoggingConfig;
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli), fields(command = ?cli.command))]
fn run(cli: Cli) -> Result<()> {
    // Load configuration
    tracing::info!("Loading configuration");
    let config = Config::load_with_file(cli.config.as_deref())?;

    // Create output writer
    let mut output = OutputWriter::new(cli.output, cli.use_color(), cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Report(args) => handlers::handle_report(args, &config, &mut output),
        Commands::Extract(args) => handlers::handle_extract(args, &config, &mut output),
        Commands::Validate(args) => handlers::handle_validate(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    // Create logging configuration from CLI args and environment
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    // Initialize the logging system
    logging::init_logging(logging_config)
}
