#![warn(missing_docs)]
//! Rust bindings for the [Spotify Web API](https://developer.spotify.com/documentation/web-api/reference/#/)
//! authorised with the [client credentials flow](https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow)
//!
//! ## Example
//! ```no_run
//! # async fn run() -> Result<(), spotify_api::Error> {
//! use spotify_api::{authorisation::Credentials, Client, QueryParams};
//!
//! let client = Client::new(Credentials::new("CLIENT_ID", "CLIENT_SECRET"));
//! let album = client
//!     .get_album("4aawyAB9vmqN3uQ7FjRGTy", &QueryParams::new().with("market", "US"))
//!     .await?;
//! println!("{}", album["name"]);
//! # Ok(())
//! # }
//! ```

use lazy_static::lazy_static;

lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::ClientBuilder::new()
        .build()
        .expect("Default client should succeed");
    static ref ENDPOINT: utils::Url = url::Url::parse("https://api.spotify.com/v1")
        .expect("A valid API endpoint")
        .try_into()
        .expect("A base URL");
}

pub mod authorisation;
mod client;
pub use client::Client;
mod config;
pub use config::Config;
mod endpoint;
pub use endpoint::Endpoint;
mod error;
pub use error::{Error, Result};
pub use utils::QueryParams;
