//! CLI argument parsing with clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::build;
use crate::logger::LogFormat;

/// Inspect and check the coffee shop frontend environment config
#[derive(Parser, Debug)]
#[command(name = "coffee-env")]
#[command(about = "Inspect and check the coffee shop frontend environment config")]
#[command(long_about = "
coffee-env prints and checks the environment config compiled into this build.
The development variant is linked by default; build with `--features production`
to link the production variant.

EXAMPLES:
    # Print the linked config as the frontend consumes it
    coffee-env show

    # Same, as TOML
    coffee-env show --format toml

    # Check the linked config before shipping
    coffee-env check

    # Check a rendered environment.json
    coffee-env check --file dist/environment.json

    # List backend routes and the permission each needs
    coffee-env routes --id 3

    # Print the Auth0 login link for a page
    coffee-env login-url --callback-path /tabs/user-page
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute (defaults to `show`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, global = true, default_value_t = LogFormatArg::Full)]
    pub log_format: LogFormatArg,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the linked environment config with its wire field names
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Check an environment config for blank or malformed values
    ///
    /// Exits non-zero on the first problem found.
    Check {
        /// Rendered environment JSON to check instead of the linked config
        #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
        file: Option<PathBuf>,
    },
    /// List the backend routes under apiServerUrl with their required permissions
    Routes {
        /// Drink id used for the per-drink routes
        #[arg(long, value_name = "ID", default_value_t = 1)]
        id: u64,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the Auth0 login (or logout) link for the linked config
    LoginUrl {
        /// Path appended to the callback URL, e.g. /tabs/user-page
        #[arg(long, value_name = "PATH", default_value = "", value_parser = super::validation::validate_callback_path)]
        callback_path: String,

        /// Print the logout link instead
        #[arg(long, conflicts_with = "callback_path")]
        logout: bool,
    },
}

/// Rendering formats for `show`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    #[value(name = "json")]
    Json,
    #[value(name = "toml")]
    Toml,
}

/// Log format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatArg {
    #[value(name = "full")]
    Full,
    #[value(name = "compact")]
    Compact,
    #[value(name = "json")]
    Json,
}

impl Cli {
    /// Log level implied by --verbose / --quiet
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Full => LogFormat::Full,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
