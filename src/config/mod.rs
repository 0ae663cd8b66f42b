//! Environment configuration for the coffee shop frontend
//!
//! This module provides:
//! - The `EnvironmentConfig` schema with its nested `auth0` record
//! - One fully populated `static` per build variant (development, production)
//! - Build-time selection of the linked variant via the `production` feature
//! - Review-time validation used by `coffee-env check`
//!
//! The linked config is immutable and may be read from any thread without
//! synchronization.

pub mod environment;
pub mod error;
pub mod settings;
pub mod validation;


// Re-export public types
pub use environment::Environment;
pub use error::ConfigError;
pub use settings::{Auth0Config, DEVELOPMENT, ENVIRONMENT, EnvironmentConfig, PRODUCTION, environment};
