//! The environment config object consumed by the coffee shop frontend
//!
//! Each build variant is a fully populated `static` literal. Nothing here is
//! computed, validated or mutated on read; consumers bind to the wire field
//! names (`apiServerUrl`, `auth0.clientId`, `auth0.callbackURL`, ...).

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::error::ConfigError;

/// Deployment-specific values resolved at build time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Toggles dev-only behaviour in bootstrap code
    pub production: bool,
    /// Base URL for all backend API calls
    #[serde(rename = "apiServerUrl")]
    pub api_server_url: Cow<'static, str>,
    /// Identity provider settings, kept as one record
    pub auth0: Auth0Config,
}

/// Auth0 tenant and application registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Auth0Config {
    /// Tenant domain prefix, e.g. `fsnd-melaf.us` for `fsnd-melaf.us.auth0.com`
    pub url: Cow<'static, str>,
    /// API identifier the access token must target
    pub audience: Cow<'static, str>,
    /// Public OAuth client identifier
    #[serde(rename = "clientId")]
    pub client_id: Cow<'static, str>,
    /// Post-login redirect target, the app's externally reachable base address
    #[serde(rename = "callbackURL")]
    pub callback_url: Cow<'static, str>,
}

/// Development variant
pub static DEVELOPMENT: EnvironmentConfig = EnvironmentConfig {
    production: false,
    api_server_url: Cow::Borrowed("http://127.0.0.1:5000"),
    auth0: Auth0Config {
        url: Cow::Borrowed("fsnd-melaf.us"),
        audience: Cow::Borrowed("Coffee"),
        client_id: Cow::Borrowed("n1542qV56wrriiEFP3Qk5Sr3wxeKb6Tr"),
        callback_url: Cow::Borrowed("http://localhost:8100"),
    },
};

/// Production variant.
///
/// Same shape as [`DEVELOPMENT`]; the deployed API and callback addresses are
/// filled in here when the app is hosted.
pub static PRODUCTION: EnvironmentConfig = EnvironmentConfig {
    production: true,
    api_server_url: Cow::Borrowed("http://127.0.0.1:5000"),
    auth0: Auth0Config {
        url: Cow::Borrowed("fsnd-melaf.us"),
        audience: Cow::Borrowed("Coffee"),
        client_id: Cow::Borrowed("n1542qV56wrriiEFP3Qk5Sr3wxeKb6Tr"),
        callback_url: Cow::Borrowed("http://localhost:8100"),
    },
};

/// The variant linked into this build
#[cfg(not(feature = "production"))]
pub static ENVIRONMENT: &EnvironmentConfig = &DEVELOPMENT;

/// The variant linked into this build
#[cfg(feature = "production")]
pub static ENVIRONMENT: &EnvironmentConfig = &PRODUCTION;

/// Shorthand for [`ENVIRONMENT`]
pub fn environment() -> &'static EnvironmentConfig {
    ENVIRONMENT
}

impl EnvironmentConfig {
    pub fn is_production(&self) -> bool {
        self.production
    }

    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth0(&self) -> &Auth0Config {
        &self.auth0
    }

    /// Resolve a backend route against `apiServerUrl`.
    ///
    /// The base is treated as a prefix: `http://host/v1` + `/drinks` gives
    /// `http://host/v1/drinks`. Routes that would leave the prefix (absolute
    /// URLs, `..` segments) are rejected. A malformed base surfaces here, at
    /// the first request, rather than when the config is read.
    pub fn api_url(&self, route: &str) -> Result<Url, ConfigError> {
        let mut base = Url::parse(&self.api_server_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        if Url::parse(route).is_ok() {
            return Err(ConfigError::RouteOutsideBase(route.to_string()));
        }

        let joined = base.join(route.trim_start_matches('/'))?;
        if joined.origin() != base.origin() || !joined.path().starts_with(base.path()) {
            return Err(ConfigError::RouteOutsideBase(route.to_string()));
        }

        Ok(joined)
    }
}

impl Auth0Config {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }
}
