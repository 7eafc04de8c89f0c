//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

pub mod completions;
pub mod extract;
pub mod report;
mod utils;
pub mod validate;

pub use completions::handle_completions;
pub use extract::handle_extract;
pub use report::handle_report;
pub use validate::handle_validate;
