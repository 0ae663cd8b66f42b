//! Command handlers
//!
//! Handlers return their output as a string; the executor decides where it
//! goes.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::api::{Endpoint, Method, Permission};
use crate::auth::Auth0Client;
use crate::cli::parser::OutputFormat;
use crate::config::{ConfigError, Environment, EnvironmentConfig};

/// Render a config with its wire field names
pub fn show(config: &EnvironmentConfig, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to render config as JSON")?
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(config).context("Failed to render config as TOML")?
        }
    };
    Ok(rendered)
}

/// Check the linked config, or a rendered JSON file when `file` is given
pub fn check(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            let config = load_rendered(path)?;
            let variant = if config.production {
                Environment::Production
            } else {
                Environment::Development
            };
            config
                .validate()
                .with_context(|| format!("{} is not a usable environment config", path.display()))?;
            tracing::info!(path = %path.display(), %variant, "Environment config file is valid");
            Ok(format!("{}: ok ({})", path.display(), variant))
        }
        None => {
            let variant = Environment::for_build();
            variant
                .config()
                .validate_for(variant)
                .with_context(|| format!("Linked {} config is not usable", variant))?;
            tracing::info!(%variant, "Linked environment config is valid");
            Ok(format!("linked {} config: ok", variant))
        }
    }
}

/// One row of the `routes` table
#[derive(Debug, Serialize)]
struct RouteRow {
    method: Method,
    url: String,
    permission: Option<Permission>,
}

/// List backend routes resolved under `config`'s `apiServerUrl`
pub fn routes(config: &EnvironmentConfig, id: u64, json: bool) -> anyhow::Result<String> {
    let rows = Endpoint::table(id)
        .iter()
        .map(|endpoint| -> anyhow::Result<RouteRow> {
            let url = endpoint
                .url(config)
                .with_context(|| format!("Cannot resolve {} under apiServerUrl", endpoint.path()))?;
            Ok(RouteRow {
                method: endpoint.method(),
                url: url.into(),
                permission: endpoint.permission(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if json {
        return serde_json::to_string_pretty(&rows).context("Failed to render routes as JSON");
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            let permission = row.permission.map_or("public", |p| p.as_str());
            format!("{:<7} {:<40} {}", row.method.as_str(), row.url, permission)
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Print the Auth0 login or logout link for `config`
pub fn login_url(
    config: &EnvironmentConfig,
    callback_path: &str,
    logout: bool,
) -> anyhow::Result<String> {
    let client = Auth0Client::from_environment(config);
    let url = if logout {
        client.logout_url()?
    } else {
        client.authorize_url(callback_path)?
    };
    Ok(url.into())
}

fn load_rendered(path: &Path) -> anyhow::Result<EnvironmentConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Cannot read configuration file '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "Loaded rendered config");

    serde_json::from_str(&raw)
        .map_err(|e| ConfigError::parse(format!("{}: {}", path.display(), e)).into())
}
