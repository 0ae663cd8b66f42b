//! The coffee shop backend that `apiServerUrl` points at
//!
//! Route table, the RBAC permission each route needs on the `Coffee`
//! audience, and the error body the backend answers with.

pub mod error;
pub mod routes;

pub use error::ApiErrorBody;
pub use routes::{Endpoint, Method, Permission};
