use std::time::{Duration, Instant};

use super::Credentials;

/// How long an [`AccessToken`] is used before it is replaced.
///
/// Spotify issues tokens for an hour, replacing them after 55 minutes
/// leaves room for requests that are still in flight.
pub const EXPIRY_WINDOW: Duration = Duration::from_millis(3_300_000);

/// [`AccessToken::request()`] Errors
#[derive(Debug)]
pub enum AccessTokenError {
    /// Errors requesting an access token, including rejected credentials
    Request(utils::request::Error),
    /// The token endpoint answered with a body that isn't a token response.
    /// The body itself is dropped as it may contain the token.
    MalformedResponse(serde_json::Error),
    /// The token endpoint answered with an empty `access_token`
    EmptyToken,
}
use AccessTokenError::*;
impl std::error::Error for AccessTokenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Request(err) => Some(err),
            MalformedResponse(err) => Some(err),
            EmptyToken => None,
        }
    }
}
impl std::fmt::Display for AccessTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Request(err) => write!(f, "requesting an access token failed, {err}"),
            MalformedResponse(err) => {
                write!(f, "the token endpoint returned a malformed response, {err}")
            }
            EmptyToken => write!(f, "the token endpoint returned an empty access token"),
        }
    }
}
impl From<utils::request::Error> for AccessTokenError {
    fn from(err: utils::request::Error) -> Self {
        Request(err)
    }
}

impl PartialEq for AccessTokenError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Request(l_req), Self::Request(r_req)) => l_req.to_string() == r_req.to_string(),
            (Self::MalformedResponse(l_err), Self::MalformedResponse(r_err)) => {
                l_err.to_string() == r_err.to_string()
            }
            (_self, _other) => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// A bearer token for authorising requests to the Spotify API
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct AccessToken {
    /// The access token
    token: String,
    /// The time at which this token was issued
    issued_at: Instant,
}

impl AccessToken {
    /// Wraps a token that was issued at `issued_at`
    pub fn new(token: impl Into<String>, issued_at: Instant) -> Self {
        Self {
            token: token.into(),
            issued_at,
        }
    }

    /// Exchanges the `credentials` for a new access token at the `endpoint`
    pub async fn request(
        client: &reqwest::Client,
        endpoint: &utils::Url,
        credentials: &Credentials,
    ) -> Result<Self, AccessTokenError> {
        // `token_type` and `expires_in` are ignored
        #[derive(Clone, Eq, PartialEq, Hash, Debug, Default, serde::Deserialize)]
        struct Response {
            access_token: String,
        }

        log::debug!(
            "Requesting an access token for client {} from {endpoint}",
            credentials.client_id()
        );
        let res: Response = utils::request(client, |client| {
            client
                .post(endpoint.as_str())
                .header(reqwest::header::AUTHORIZATION, credentials.authorization())
                .form(&[("grant_type", "client_credentials")])
        })
        .await
        .map_err(|err| match err {
            utils::request::Error::Body(json) => MalformedResponse(json.error),
            err => Request(err),
        })?;

        if res.access_token.is_empty() {
            return Err(EmptyToken);
        }
        Ok(AccessToken::new(res.access_token, Instant::now()))
    }

    /// The time at which this token was issued
    pub fn issued_at(&self) -> Instant {
        self.issued_at
    }

    /// Checks if the token has been in use for [`EXPIRY_WINDOW`] or longer at the time `now`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.issued_at) >= EXPIRY_WINDOW
    }

    /// Checks if the token has expired yet
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// get a reference to the access token
    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.token)
    }
}
