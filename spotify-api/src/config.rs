/// Where a [`Client`](crate::Client) sends its requests.
///
/// Defaults to the public Spotify endpoints, overriding them is mostly useful for proxies and tests.
#[derive(Clone, Eq, PartialEq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Web API, endpoint paths are appended to it
    pub api_url: utils::Url,
    /// URL of the accounts service token endpoint
    pub token_url: utils::Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: crate::ENDPOINT.clone(),
            token_url: crate::authorisation::TOKEN_ENDPOINT.clone(),
        }
    }
}

impl Config {
    /// Replaces the Web API base URL
    pub fn with_api_url(mut self, api_url: utils::Url) -> Self {
        self.api_url = api_url;
        self
    }

    /// Replaces the token endpoint URL
    pub fn with_token_url(mut self, token_url: utils::Url) -> Self {
        self.token_url = token_url;
        self
    }
}
