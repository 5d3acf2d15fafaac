//! Helper URL functions for extending a single base URL for API endpoint variations

use crate::QueryParams;

/// Url continence wrapper for extending URLs
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Url(url::Url);

impl TryFrom<url::Url> for Url {
    type Error = NotABaseError;
    fn try_from(url: url::Url) -> Result<Self, Self::Error> {
        Url::new(url)
    }
}

impl std::ops::Deref for Url {
    type Target = url::Url;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Url {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::fmt::Display for Url {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for when a URL is not a base URL, meaning that parsing a relative URL string
/// with this URL as the base will return an error.
///
/// This is the case if the scheme and `:` delimiter are not followed by a `/` slash,
/// as is typically the case of `data:` and `mailto:` URLs.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct NotABaseError;
impl std::fmt::Display for NotABaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "URL is not a base URL")
    }
}
impl std::error::Error for NotABaseError {}

/// Errors parsing a [`Url`] from a string
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ParseError {
    /// The string is not a syntactically valid URL
    Invalid(url::ParseError),
    /// The URL is valid but cannot be a base URL
    NotABase(NotABaseError),
}
impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Invalid(err) => write!(f, "invalid URL, {err}"),
            ParseError::NotABase(err) => err.fmt(f),
        }
    }
}
impl std::error::Error for ParseError {}

impl std::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        url::Url::parse(s)
            .map_err(ParseError::Invalid)?
            .try_into()
            .map_err(ParseError::NotABase)
    }
}

impl Url {
    /// Errors if the given URL cannot be a base URL
    pub fn new(url: url::Url) -> Result<Url, NotABaseError> {
        if !url.cannot_be_a_base() {
            Ok(Url(url))
        } else {
            Err(NotABaseError)
        }
    }

    /// Creates a new URL with the given path segments appended.
    ///
    /// A trailing `/` on the base URL doesn't produce an empty segment.
    /// Segments are percent-encoded as path segments, so a `/` inside a segment never adds depth.
    pub fn with_path<I>(&self, path_segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut new_url = (*self).clone();
        new_url
            .path_segments_mut()
            .expect("A base URL")
            .pop_if_empty()
            .extend(path_segments);
        new_url
    }

    /// Creates a new URL with its query string replaced by `params`.
    ///
    /// An empty `params` removes the query entirely, leaving no trailing `?`.
    pub fn with_query(&self, params: &QueryParams) -> Url {
        let mut new_url = (*self).clone();
        if params.is_empty() {
            new_url.set_query(None);
        } else {
            new_url.set_query(Some(&params.to_string()));
        }
        new_url
    }
}

impl serde::Serialize for Url {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Url {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Url;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A string containing a valid URL")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
                url::Url::parse(value)
                    .map_err(|_| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Other(value), &self)
                    })?
                    .try_into()
                    .map_err(|_| {
                        serde::de::Error::invalid_value(
                            serde::de::Unexpected::Other(value),
                            &"A URL that is a base URL",
                        )
                    })
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
