use std::time::Instant;

use super::{AccessToken, AccessTokenError, Credentials};

/// Owns the [`Credentials`] and the current [`AccessToken`],
/// requesting a new token whenever the current one is missing or expired.
///
/// Concurrent callers that find the token expired wait for a single shared token request
/// rather than each requesting their own.
///
/// A failed token request is returned to the caller and leaves the previous token in place,
/// the next call requests a token again. Nothing limits how often that happens,
/// so a persistently failing token endpoint is asked again on every call.
#[derive(Debug)]
pub struct Session {
    credentials: Credentials,
    client: reqwest::Client,
    token_url: utils::Url,
    token: tokio::sync::Mutex<Option<AccessToken>>,
}

impl Session {
    /// Creates a session that requests tokens from the Spotify accounts service.
    /// No token is requested until one is needed.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(credentials, &crate::Config::default())
    }

    /// Creates a session that requests tokens from the configured `token_url`
    pub fn with_config(credentials: Credentials, config: &crate::Config) -> Self {
        Self::with_client(credentials, crate::CLIENT.clone(), config.token_url.clone())
    }

    pub(crate) fn with_client(
        credentials: Credentials,
        client: reqwest::Client,
        token_url: utils::Url,
    ) -> Self {
        Self {
            credentials,
            client,
            token_url,
            token: tokio::sync::Mutex::new(None),
        }
    }

    /// The credentials tokens are requested with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Makes sure a valid token is stored, requesting a new one if it is missing or expired.
    ///
    /// Returns `true` if the stored token was still valid and reused,
    /// `false` if a new token was just issued.
    pub async fn ensure_valid_token(&self) -> Result<bool, AccessTokenError> {
        self.valid_token_at(Instant::now)
            .await
            .map(|(reused, _token)| reused)
    }

    /// Returns a valid access token, requesting a new one if it is missing or expired.
    pub async fn token(&self) -> Result<String, AccessTokenError> {
        self.valid_token_at(Instant::now)
            .await
            .map(|(_reused, token)| token)
    }

    /// The stored access token, without checking if it is still valid
    pub async fn current_token(&self) -> Option<String> {
        self.token
            .lock()
            .await
            .as_ref()
            .map(|token| token.as_str().to_owned())
    }

    /// Validity is judged against a reading of `clock`, taken once the token is locked
    async fn valid_token_at<C>(&self, clock: C) -> Result<(bool, String), AccessTokenError>
    where
        C: FnOnce() -> Instant,
    {
        // held across the token request so concurrent callers share it
        let mut current = self.token.lock().await;
        let now = clock();
        match current.as_ref() {
            Some(token) if !token.is_expired_at(now) => return Ok((true, token.as_str().to_owned())),
            Some(_expired) => log::debug!("Access token expired, requesting a new one"),
            None => log::debug!("No access token yet, requesting one"),
        }

        let token = AccessToken::request(&self.client, &self.token_url, &self.credentials)
            .await
            .map_err(|err| {
                log::warn!("Access token request failed: {err}");
                err
            })?;
        log::info!("Access token issued for client {}", self.credentials.client_id());

        let value = token.as_str().to_owned();
        *current = Some(token);
        Ok((false, value))
    }

    #[cfg(test)]
    pub(crate) async fn set_token(&self, token: AccessToken) {
        *self.token.lock().await = Some(token);
    }
}
