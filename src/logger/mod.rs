//! Logging setup
//!
//! A `tracing-subscriber` registry with an `EnvFilter` and one `fmt` layer
//! writing to stderr, so rendered config on stdout stays machine-readable.

pub mod config;
pub mod error;

pub use config::{LogFormat, LoggerConfig};
pub use error::LoggerError;

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global logger with the given configuration
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config.validate()?;

    let filter = config.env_filter()?;
    let use_ansi = config.colored && std::io::stderr().is_terminal();

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Full => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .json(),
            )
            .try_init(),
    };

    result.map_err(|e| LoggerError::init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_rejects_invalid_level() {
        let config = LoggerConfig {
            level: "verbose".to_string(),
            ..LoggerConfig::default()
        };
        assert!(matches!(init_logger(config), Err(LoggerError::Config { .. })));
    }

    #[test]
    fn test_init_rejects_invalid_directive() {
        let config = LoggerConfig {
            level: "coffee_env=bogus".to_string(),
            ..LoggerConfig::default()
        };
        assert!(matches!(init_logger(config), Err(LoggerError::Config { .. })));
    }

    #[test]
    fn test_second_init_fails() {
        // Only one test in this binary installs a subscriber
        let first = init_logger(LoggerConfig::default());
        assert!(first.is_ok());
        let second = init_logger(LoggerConfig::default());
        assert!(matches!(second, Err(LoggerError::Init { .. })));
    }
}
