use super::*;

impl Client {
    /// [Search for albums, artists, playlists, tracks, shows, episodes or audiobooks](https://developer.spotify.com/documentation/web-api/reference/search)
    /// that match a keyword string.
    ///
    /// `q` and `type` are required, `market`, `limit`, `offset` and `include_external` are optional.
    /// Field filters like `artist:` or `year:` are part of `q` and are encoded with it.
    pub async fn search(&self, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::Search, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::client;
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    #[tokio::test]
    async fn test_search() {
        let server = Server::run();
        let client = client(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/search"),
                request::query(url_decoded(contains(("q", "remaster track:Doxy artist:Miles Davis")))),
                request::query(url_decoded(contains(("type", "track,artist")))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "tracks": { "items": [{ "name": "Doxy - Remastered" }] },
                "artists": { "items": [] },
            }))),
        );

        let results = client
            .search(
                &QueryParams::new()
                    .with("q", "remaster track:Doxy artist:Miles Davis")
                    .with("type", "track,artist"),
            )
            .await
            .expect("A valid response");
        assert_eq!(results["tracks"]["items"][0]["name"], "Doxy - Remastered");
    }

    #[tokio::test]
    async fn test_search_rejected() {
        let server = Server::run();
        let client = client(&server);
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/search")).respond_with(
                status_code(400)
                    .body(r#"{"error":{"status":400,"message":"No search query"}}"#),
            ),
        );

        let err = client
            .search(&QueryParams::new())
            .await
            .expect_err("Missing query");
        assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_REQUEST));
        assert!(err.to_string().contains("No search query"));
    }
}
