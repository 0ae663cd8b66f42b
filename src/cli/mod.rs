//! CLI module for coffee-env
//!
//! - Argument parsing with clap
//! - Command handlers for `show`, `check` and `login-url`
//! - Command dispatch

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use executor::execute_command;
pub use parser::{Cli, Commands, OutputFormat};

use crate::logger::{LoggerConfig, init_logger};

/// Initialize the logger from global CLI flags
pub fn init_logger_from_cli(cli: &Cli) -> anyhow::Result<()> {
    let config = LoggerConfig::new(cli.log_level(), cli.log_format.into(), true)?;
    init_logger(config)?;
    Ok(())
}
