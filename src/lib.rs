//! Coffee shop frontend environment config
//!
//! The API base URL and Auth0 registration the coffee shop frontend is built
//! with, as immutable statics selected at build time, plus the tooling to
//! inspect and check them.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod logger;

pub use config::{Auth0Config, Environment, EnvironmentConfig, environment};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
