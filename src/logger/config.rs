//! Configuration types for the logger

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::logger::error::LoggerError;

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Level or full `EnvFilter` directive, e.g. `info` or `coffee_env=debug`
    pub level: String,
    pub format: LogFormat,
    pub colored: bool,
}

impl LoggerConfig {
    /// Create a new logger configuration with validation
    pub fn new(level: impl Into<String>, format: LogFormat, colored: bool) -> Result<Self, LoggerError> {
        let config = Self {
            level: level.into(),
            format,
            colored,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LoggerError> {
        // Bare levels are checked strictly, directives by EnvFilter's parser
        if self.level.contains('=') {
            self.env_filter()?;
        } else {
            self.parse_level()?;
        }
        Ok(())
    }

    /// Build the `EnvFilter` for this level or directive
    pub fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        EnvFilter::try_new(&self.level).map_err(|e| {
            LoggerError::config(format!("Invalid log filter '{}': {}", self.level, e))
        })
    }

    /// Parse the log level string into a tracing::Level
    pub fn parse_level(&self) -> Result<Level, LoggerError> {
        match self.level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => Err(LoggerError::config(format!(
                "Invalid log level '{}'. Valid levels are: trace, debug, info, warn, error",
                self.level
            ))),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            colored: true,
        }
    }
}

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Full,
    Compact,
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Full
    }
}
