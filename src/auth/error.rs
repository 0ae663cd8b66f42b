//! Identity provider error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid Auth0 tenant '{tenant}': {source}")]
    InvalidTenant {
        tenant: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Auth0 tenant '{tenant}' is not a bare domain prefix under auth0.com")]
    NotATenant { tenant: String },

    #[error("Invalid redirect URI '{uri}': {source}")]
    InvalidRedirect {
        uri: String,
        #[source]
        source: url::ParseError,
    },
}
