//! Configuration error types

use thiserror::Error;

use crate::config::environment::Environment;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Validation error with field and message
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// The field that failed validation, in wire naming (e.g. `auth0.clientId`)
        field: String,
        /// The validation error message
        message: String,
    },

    /// The `production` flag does not match the variant it was linked as
    #[error("Variant mismatch: {variant} config has production = {production}")]
    VariantMismatch {
        variant: Environment,
        production: bool,
    },

    /// Unknown build variant name
    #[error("Invalid environment '{0}'. Valid values are: development, production")]
    InvalidEnvironment(String),

    /// A backend route could not be joined onto `apiServerUrl`
    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(#[from] url::ParseError),

    /// A route would resolve outside the `apiServerUrl` prefix
    #[error("Route '{0}' resolves outside apiServerUrl")]
    RouteOutsideBase(String),

    /// Failed to parse a rendered configuration
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

impl ConfigError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        ConfigError::ParseError(message.into())
    }

    /// The offending field, if this error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::ValidationError { field, .. } => Some(field),
            ConfigError::VariantMismatch { .. } => Some("production"),
            _ => None,
        }
    }
}
