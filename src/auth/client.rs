//! Auth0 client options and login/logout links

use url::Url;

use crate::auth::error::AuthError;
use crate::config::validation::is_tenant_domain;
use crate::config::{Auth0Config, EnvironmentConfig};

/// Suffix Auth0 appends to the tenant domain prefix
const AUTH0_HOST_SUFFIX: &str = "auth0.com";

/// Options an Auth0 client is constructed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth0Client {
    tenant_domain: String,
    client_id: String,
    audience: String,
    redirect_uri: String,
}

impl Auth0Client {
    /// Build client options from the `auth0` block.
    ///
    /// Values are taken verbatim; malformed ones surface when a link is built.
    pub fn new(config: &Auth0Config) -> Self {
        tracing::debug!(
            tenant = config.url(),
            client_id = config.client_id(),
            audience = config.audience(),
            redirect_uri = config.callback_url(),
            "Configured identity provider client"
        );

        Self {
            tenant_domain: config.url().to_string(),
            client_id: config.client_id().to_string(),
            audience: config.audience().to_string(),
            redirect_uri: config.callback_url().to_string(),
        }
    }

    pub fn from_environment(environment: &EnvironmentConfig) -> Self {
        Self::new(environment.auth0())
    }

    pub fn tenant_domain(&self) -> &str {
        &self.tenant_domain
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Base URL of the tenant, `https://{tenant}.auth0.com`
    pub fn authority(&self) -> Result<Url, AuthError> {
        if !is_tenant_domain(&self.tenant_domain) {
            return Err(AuthError::NotATenant {
                tenant: self.tenant_domain.clone(),
            });
        }

        let host = format!("{}.{}", self.tenant_domain, AUTH0_HOST_SUFFIX).to_ascii_lowercase();
        let url = Url::parse(&format!("https://{}", host)).map_err(|source| {
            AuthError::InvalidTenant {
                tenant: self.tenant_domain.clone(),
                source,
            }
        })?;

        // The parsed URL must still name exactly the tenant host and nothing else
        if url.host_str() != Some(host.as_str())
            || url.path() != "/"
            || url.port().is_some()
            || url.query().is_some()
            || url.fragment().is_some()
            || !url.username().is_empty()
            || url.password().is_some()
        {
            return Err(AuthError::NotATenant {
                tenant: self.tenant_domain.clone(),
            });
        }

        Ok(url)
    }

    /// Implicit-flow login link.
    ///
    /// `callback_path` is appended to the registered callback URL so the app
    /// can land on a specific page after login; pass `""` for the base.
    pub fn authorize_url(&self, callback_path: &str) -> Result<Url, AuthError> {
        let redirect = self.redirect_to(callback_path)?;

        let mut url = self.endpoint("authorize")?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", redirect.as_str());

        Ok(url)
    }

    /// Logout link returning the user to the callback URL
    pub fn logout_url(&self) -> Result<Url, AuthError> {
        let return_to = self.redirect_to("")?;

        let mut url = self.endpoint("v2/logout")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("returnTo", return_to.as_str());

        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        let mut url = self.authority()?;
        url.set_path(path);
        Ok(url)
    }

    fn redirect_to(&self, callback_path: &str) -> Result<Url, AuthError> {
        let uri = format!("{}{}", self.redirect_uri, callback_path);
        Url::parse(&uri).map_err(|source| AuthError::InvalidRedirect { uri, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEVELOPMENT;
    use proptest::prelude::*;

    fn query(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_authority_uses_tenant_prefix() {
        let client = Auth0Client::from_environment(&DEVELOPMENT);
        assert_eq!(
            client.authority().unwrap().as_str(),
            "https://fsnd-melaf.us.auth0.com/"
        );
    }

    #[test]
    fn test_authorize_url() {
        let client = Auth0Client::from_environment(&DEVELOPMENT);
        let url = client.authorize_url("/tabs/user-page").unwrap();

        assert_eq!(url.host_str(), Some("fsnd-melaf.us.auth0.com"));
        assert_eq!(url.path(), "/authorize");
        assert_eq!(query(&url, "audience").as_deref(), Some("Coffee"));
        assert_eq!(query(&url, "response_type").as_deref(), Some("token"));
        assert_eq!(
            query(&url, "client_id").as_deref(),
            Some("n1542qV56wrriiEFP3Qk5Sr3wxeKb6Tr")
        );
        assert_eq!(
            query(&url, "redirect_uri").as_deref(),
            Some("http://localhost:8100/tabs/user-page")
        );
    }

    #[test]
    fn test_authorize_url_without_callback_path() {
        let client = Auth0Client::from_environment(&DEVELOPMENT);
        let url = client.authorize_url("").unwrap();
        assert_eq!(
            query(&url, "redirect_uri").as_deref(),
            Some("http://localhost:8100/")
        );
    }

    #[test]
    fn test_logout_url() {
        let client = Auth0Client::from_environment(&DEVELOPMENT);
        let url = client.logout_url().unwrap();

        assert_eq!(url.path(), "/v2/logout");
        assert_eq!(
            query(&url, "client_id").as_deref(),
            Some("n1542qV56wrriiEFP3Qk5Sr3wxeKb6Tr")
        );
        assert_eq!(query(&url, "returnTo").as_deref(), Some("http://localhost:8100/"));
    }

    #[test]
    fn test_malformed_callback_surfaces_on_link() {
        let mut config = DEVELOPMENT.auth0.clone();
        config.callback_url = "localhost 8100".into();

        // construction never fails
        let client = Auth0Client::new(&config);
        assert_eq!(client.redirect_uri(), "localhost 8100");

        assert!(matches!(
            client.authorize_url(""),
            Err(AuthError::InvalidRedirect { .. })
        ));
    }

    #[test]
    fn test_tenant_with_path_rejected() {
        let mut config = DEVELOPMENT.auth0.clone();
        config.url = "evil.example/x".into();

        let client = Auth0Client::new(&config);
        assert!(matches!(client.authority(), Err(AuthError::NotATenant { .. })));
    }

    #[test]
    fn test_tenant_with_url_delimiters_never_leaves_auth0() {
        for tenant in ["evil.example#", "evil.example?", "user@evil.example", "evil.example:8443"] {
            let mut config = DEVELOPMENT.auth0.clone();
            config.url = tenant.into();
            let client = Auth0Client::new(&config);

            assert!(
                matches!(client.authority(), Err(AuthError::NotATenant { .. })),
                "tenant {tenant:?}"
            );
            assert!(client.authorize_url("").is_err(), "tenant {tenant:?}");
            assert!(client.logout_url().is_err(), "tenant {tenant:?}");
        }
    }

    #[test]
    fn test_uppercase_tenant_is_normalized() {
        let mut config = DEVELOPMENT.auth0.clone();
        config.url = "FSND-Melaf.us".into();

        let authority = Auth0Client::new(&config).authority().unwrap();
        assert_eq!(authority.host_str(), Some("fsnd-melaf.us.auth0.com"));
    }

    proptest! {
        #[test]
        fn prop_tenant_and_redirect_pass_through(
            tenant in "[a-z][a-z0-9]{0,20}(-[a-z0-9]{1,8})?(\\.[a-z]{2})?",
            port in 1024u16..65535,
        ) {
            let config = Auth0Config {
                url: tenant.clone().into(),
                audience: "Coffee".into(),
                client_id: "client".into(),
                callback_url: format!("http://localhost:{}", port).into(),
            };
            let client = Auth0Client::new(&config);

            prop_assert_eq!(client.tenant_domain(), tenant.as_str());
            let expected_host = format!("{}.auth0.com", tenant);
            let url = client.authorize_url("").unwrap();
            prop_assert_eq!(url.host_str(), Some(expected_host.as_str()));
            let expected_redirect = format!("http://localhost:{}/", port);
            prop_assert_eq!(query(&url, "redirect_uri"), Some(expected_redirect));
        }
    }
}
