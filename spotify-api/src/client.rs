use std::sync::Arc;

use crate::{authorisation::*, Config, Endpoint, Result};
use utils::QueryParams;

mod albums;
mod artists;
mod browse;
mod playlists;
mod search;
mod tracks;
mod users;

/// A client that abstracts the need for refreshing the [AccessToken] and authorises each API [request](Client::get)
///
/// Cloning is cheap, clones share the same [`Session`] and with it the access token.
#[derive(Clone, Debug)]
pub struct Client {
    session: Arc<Session>,
    client: reqwest::Client,
    api_url: utils::Url,
}

impl Client {
    /// Creates a client for the public Spotify endpoints
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(credentials, Config::default())
    }

    /// Creates a client for the configured endpoints
    pub fn with_config(credentials: Credentials, config: Config) -> Self {
        let session = Session::with_client(credentials, crate::CLIENT.clone(), config.token_url);
        Self::with_session(Arc::new(session), config.api_url)
    }

    /// Creates a client that takes its access tokens from an existing `session`
    pub fn with_session(session: Arc<Session>, api_url: utils::Url) -> Self {
        Self {
            session,
            client: crate::CLIENT.clone(),
            api_url,
        }
    }

    /// The session providing access tokens
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Creates the request URL of the `endpoint` with the query `params`
    pub fn url(&self, endpoint: Endpoint<'_>, params: &QueryParams) -> utils::Url {
        endpoint.url(&self.api_url, params)
    }

    /// Make an authorised request to the API `endpoint` and deserialize the response.
    ///
    /// An access token is requested first if there is no valid one.
    pub async fn get<R>(&self, endpoint: Endpoint<'_>, params: &QueryParams) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let token = self.session.token().await?;
        let url = self.url(endpoint, params);
        log::debug!("Requesting {} from {url}", endpoint.name());
        let res = utils::request(&self.client, |client| {
            client
                .request(endpoint.method(), url.as_str())
                .header(
                    reqwest::header::AUTHORIZATION,
                    utils::bearer_authorization(&token),
                )
        })
        .await
        .map_err(|err| {
            log::debug!("{} request failed: {err}", endpoint.name());
            err
        })?;
        Ok(res)
    }

    /// [`get()`](Self::get()) without query parameters, as JSON
    async fn get_json(&self, endpoint: Endpoint<'_>) -> Result<serde_json::Value> {
        self.get(endpoint, &QueryParams::new()).await
    }
}
