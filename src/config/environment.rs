//! Build variants of the environment configuration

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::config::settings::{DEVELOPMENT, EnvironmentConfig, PRODUCTION};

/// Build variant the environment config was produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development build
    Development,
    /// Production build
    Production,
}

impl Environment {
    /// The variant linked into this build.
    ///
    /// Chosen by the `production` Cargo feature, never at runtime.
    pub const fn for_build() -> Self {
        if cfg!(feature = "production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    /// The fully populated config for this variant
    pub fn config(self) -> &'static EnvironmentConfig {
        match self {
            Environment::Development => &DEVELOPMENT,
            Environment::Production => &PRODUCTION,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Convert the environment to a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
