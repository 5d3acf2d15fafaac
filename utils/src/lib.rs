#![warn(missing_docs)]
//! [`reqwest`] and [`url`] helper operations shared by the API bindings

use base64::Engine;
mod query;
pub use query::*;
mod url;
pub use crate::url::*;
pub mod request;
pub use request::request;

/// Returns a standard (padded) base64 encoded `String` of the given `bytes`
pub fn base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Returns the value of an HTTP `Authorization` header for
/// [basic authentication](https://datatracker.ietf.org/doc/html/rfc7617) with the given credentials
pub fn basic_authorization(user: &str, password: &str) -> String {
    format!("Basic {}", base64(format!("{user}:{password}").as_bytes()))
}

/// Returns the value of an HTTP `Authorization` header for a bearer `token`
pub fn bearer_authorization(token: &str) -> String {
    format!("Bearer {token}")
}
