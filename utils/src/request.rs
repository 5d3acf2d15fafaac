//! [`reqwest`] wrapper for consistant error handling and formatted errors
use ::reqwest as req;

/// A human readable HTTP Status code error with response body
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct StatusError {
    /// The HTTP status code/error
    pub status: req::StatusCode,
    /// The body of the response
    pub body: Option<String>,
}
impl std::error::Error for StatusError {}
impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HTTP Error: {}{}{}",
            self.status.as_str(),
            if let Some(desc) = self.status.canonical_reason() {
                ", ".to_string() + desc
            } else {
                "".to_string()
            },
            if let Some(body) = &self.body {
                "\nBody:\n".to_string() + body
            } else {
                "".to_string()
            }
        )
    }
}

/// A human readable response body deserialization error
#[derive(Debug)]
pub struct JSONError {
    /// The deserialization error
    pub error: serde_json::Error,
    /// The response body that failed to deserialize
    pub body: String,
}
impl std::error::Error for JSONError {}
impl std::fmt::Display for JSONError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deserialization error, {} in {}", self.error, self.body)
    }
}

/// HTTP request error with human readable endpoint errors
#[derive(Debug)]
pub enum Error {
    /// The server answered with a client (4xx) or server (5xx) error status
    Status(StatusError),
    /// A successful response whose body isn't the expected JSON
    Body(JSONError),
    /// Transport and other reqwest errors
    Reqwest(req::Error),
}
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Status(status) => Some(status),
            Error::Body(body) => Some(&body.error),
            Error::Reqwest(req) => Some(req),
        }
    }
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Error::Status(status) => status.to_string(),
                Error::Reqwest(req) => req.to_string(),
                Error::Body(body) => body.to_string(),
            }
        )
    }
}

impl Error {
    /// The HTTP status if the server answered with an error status
    pub fn status(&self) -> Option<req::StatusCode> {
        match self {
            Error::Status(StatusError { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// HTTP request result
pub type Result<R> = std::result::Result<R, Error>;

/// [`reqwest`] wrapper for deserializing response and consistant error handling.
///
/// Client (4xx) and server (5xx) error statuses are returned as [`Error::Status`],
/// their bodies are never deserialized as `R`.
pub async fn request<R, F>(client: &req::Client, build_request: F) -> Result<R>
where
    R: serde::de::DeserializeOwned,
    F: Fn(&req::Client) -> req::RequestBuilder,
{
    let res = build_request(client)
        .header(
            req::header::ACCEPT,
            req::header::HeaderValue::from_static("application/json"),
        )
        .send()
        .await
        .map_err(Error::Reqwest)?;
    let status = res.status();
    log::trace!("{} responded {status}", res.url());
    if status.is_client_error() || status.is_server_error() {
        Err(Error::Status(StatusError {
            status,
            body: res.text().await.ok(),
        }))
    } else {
        let body = res.text().await.map_err(Error::Reqwest)?;
        Ok(serde_json::from_str(&body).map_err(|error| Error::Body(JSONError { error, body }))?)
    }
}
