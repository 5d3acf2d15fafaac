//! Query string parameters for API requests

use std::collections::BTreeMap;

/// A set of query string parameters.
///
/// Keys are unique, inserting an existing key replaces its value.
/// Parameters are serialised in key order, so the same set always produces the same query string.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Creates an empty set of parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the parameter, returning the modified set
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        self.insert(key, value);
        self
    }

    /// Inserts the parameter.
    /// Returns the previous value if the key was already present
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: ToString,
    {
        self.0.insert(key.into(), value.to_string())
    }

    /// Gets the value of the parameter `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Removes the parameter `key`, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// `true` if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// `application/x-www-form-urlencoded` serialisation, without a leading `?`
impl std::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.iter())
                .finish()
        )
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = QueryParams::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let mut params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.to_string(), "");

        assert_eq!(params.insert("market", "US"), None);
        assert_eq!(params.insert("limit", 10), None);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("market"), Some("US"));
        assert_eq!(params.get("limit"), Some("10"));
        assert_eq!(params.to_string(), "limit=10&market=US");

        assert_eq!(params.insert("market", "GB"), Some("US".to_owned()));
        assert_eq!(params.len(), 2);
        assert_eq!(params.remove("limit"), Some("10".to_owned()));
        assert_eq!(params.to_string(), "market=GB");
    }

    #[test]
    fn test_query_params_order_independent() {
        let forwards = QueryParams::from([("a", "1"), ("b", "2")]);
        let backwards = QueryParams::from([("b", "2"), ("a", "1")]);
        assert_eq!(forwards, backwards);
        assert_eq!(forwards.to_string(), backwards.to_string());
    }

    #[test]
    fn test_query_params_encoding() {
        let params = QueryParams::new()
            .with("q", "remaster track:Doxy artist:Miles Davis")
            .with("ids", "a,b,c")
            .with("seed_genres", "r&b");
        assert_eq!(
            params.to_string(),
            "ids=a%2Cb%2Cc&q=remaster+track%3ADoxy+artist%3AMiles+Davis&seed_genres=r%26b"
        );
    }
}
