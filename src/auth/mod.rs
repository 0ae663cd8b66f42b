//! Identity provider client construction
//!
//! The login flow itself lives in the frontend's Auth0 SDK. This module pins
//! down what that SDK is constructed with and the links it sends the user to.

pub mod client;
pub mod error;

pub use client::Auth0Client;
pub use error::AuthError;
