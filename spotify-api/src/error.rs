use crate::authorisation::AccessTokenError;

/// [`Client`](crate::Client) request Errors
#[derive(Debug)]
pub enum Error {
    /// No valid access token could be obtained
    Authorisation(AccessTokenError),
    /// The API request itself failed
    Request(utils::request::Error),
}
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Authorisation(err) => Some(err),
            Error::Request(err) => Some(err),
        }
    }
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Error::Authorisation(err) => err.to_string(),
                Error::Request(err) => err.to_string(),
            }
        )
    }
}
impl From<AccessTokenError> for Error {
    fn from(err: AccessTokenError) -> Self {
        Error::Authorisation(err)
    }
}
impl From<utils::request::Error> for Error {
    fn from(err: utils::request::Error) -> Self {
        Error::Request(err)
    }
}

impl Error {
    /// The HTTP status if the API answered with an error status
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Request(err) => err.status(),
            Error::Authorisation(_) => None,
        }
    }
}

/// [`Client`](crate::Client) request result
pub type Result<R> = std::result::Result<R, Error>;
