//! Operations for getting authorised access to the spotify API
//!
//! Access is granted with the [client credentials flow](https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow),
//! which authorises the application itself rather than a user,
//! so only publicly available information can be requested.
//!
//! ## Example
//! ```no_run
//! # async fn run() -> Result<(), spotify_api::authorisation::AccessTokenError> {
//! use spotify_api::authorisation::{Credentials, Session};
//!
//! let session = Session::new(Credentials::new("CLIENT_ID", "CLIENT_SECRET"));
//! // Requests a token the first time, reuses it until it is about to expire
//! let reused = session.ensure_valid_token().await?;
//! assert!(!reused);
//! # Ok(())
//! # }
//! ```

use lazy_static::lazy_static;

mod credentials;
pub use credentials::*;
mod session;
pub use session::*;
mod tokens;
pub use tokens::*;

lazy_static! {
    static ref ENDPOINT: utils::Url = url::Url::parse("https://accounts.spotify.com")
        .expect("Valid authorisation URL")
        .try_into()
        .expect("URL is a base URL");
    pub(crate) static ref TOKEN_ENDPOINT: utils::Url = ENDPOINT.with_path(["api", "token"]);
}
