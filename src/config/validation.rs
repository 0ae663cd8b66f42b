//! Review-time checks for environment configs
//!
//! Reading a config never runs these. They back `coffee-env check` so a
//! blank or malformed value is caught in CI instead of at the first login
//! redirect or API call.

use url::Url;

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::{Auth0Config, EnvironmentConfig};

/// Schemes a browser can be sent to or fetch from
const VALID_URL_SCHEMES: &[&str] = &["http", "https"];

impl EnvironmentConfig {
    /// Validate all fields
    ///
    /// # Validation Rules
    /// - `apiServerUrl` must be an absolute http(s) URL with a host
    /// - every `auth0` field must satisfy [`Auth0Config::validate`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_absolute_url("apiServerUrl", &self.api_server_url)?;
        self.auth0.validate()?;
        Ok(())
    }

    /// Validate all fields and check the `production` flag matches `variant`
    pub fn validate_for(&self, variant: Environment) -> Result<(), ConfigError> {
        if self.production != variant.is_production() {
            return Err(ConfigError::VariantMismatch {
                variant,
                production: self.production,
            });
        }
        self.validate()
    }
}

impl Auth0Config {
    /// Validate the identity provider settings
    ///
    /// # Validation Rules
    /// - `url` must be a bare tenant domain segment, see [`is_tenant_domain`]
    /// - `audience` and `clientId` must not be empty
    /// - `callbackURL` must be an absolute http(s) URL with a host
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_required("auth0.url", &self.url)?;
        if !is_tenant_domain(&self.url) {
            return Err(ConfigError::ValidationError {
                field: "auth0.url".to_string(),
                message: format!(
                    "'{}' should be the tenant domain prefix only, using letters, digits, \
                     '.' and '-' (e.g. 'my-tenant.us' for my-tenant.us.auth0.com).",
                    self.url
                ),
            });
        }

        validate_required("auth0.audience", &self.audience)?;
        validate_required("auth0.clientId", &self.client_id)?;
        validate_absolute_url("auth0.callbackURL", &self.callback_url)?;

        Ok(())
    }
}

/// Whether `value` is a bare tenant domain prefix.
///
/// Only ASCII letters, digits, `.` and `-`, with no leading or trailing dot,
/// so `{value}.auth0.com` can only ever name a host under auth0.com.
pub fn is_tenant_domain(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('.')
        && !value.ends_with('.')
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

fn validate_required(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: field.to_string(),
            message: "Value is required and must not be blank.".to_string(),
        });
    }
    Ok(())
}

fn validate_absolute_url(field: &str, value: &str) -> Result<(), ConfigError> {
    validate_required(field, value)?;

    let url = Url::parse(value).map_err(|e| ConfigError::ValidationError {
        field: field.to_string(),
        message: format!("'{}' is not a valid absolute URL: {}", value, e),
    })?;

    if !VALID_URL_SCHEMES.contains(&url.scheme()) {
        return Err(ConfigError::ValidationError {
            field: field.to_string(),
            message: format!(
                "Unsupported URL scheme '{}'. Valid schemes are: {}",
                url.scheme(),
                VALID_URL_SCHEMES.join(", ")
            ),
        });
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::validation(field, "URL must include a host."));
    }

    Ok(())
}
