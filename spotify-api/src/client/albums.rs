use super::*;

impl Client {
    /// [Get Spotify catalog information for a single album](https://developer.spotify.com/documentation/web-api/reference/get-an-album)
    ///
    /// Query parameters: `market`
    pub async fn get_album(&self, id: &str, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::Album(id), params).await
    }

    /// [Get Spotify catalog information for multiple albums](https://developer.spotify.com/documentation/web-api/reference/get-multiple-albums)
    ///
    /// Query parameters: `ids` (comma separated, at most 20), `market`
    pub async fn get_several_albums(&self, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::SeveralAlbums, params).await
    }

    /// [Get Spotify catalog information about an album's tracks](https://developer.spotify.com/documentation/web-api/reference/get-an-albums-tracks)
    ///
    /// Query parameters: `market`, `limit`, `offset`
    pub async fn get_album_tracks(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<serde_json::Value> {
        self.get(Endpoint::AlbumTracks(id), params).await
    }

    /// [Get a list of new album releases featured in Spotify](https://developer.spotify.com/documentation/web-api/reference/get-new-releases)
    ///
    /// Query parameters: `country`, `limit`, `offset`
    pub async fn get_new_releases(&self, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::NewReleases, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::client;
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    #[tokio::test]
    async fn test_get_album() {
        let server = Server::run();
        let client = client(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/albums/4aawyAB9vmqN3uQ7FjRGTy"),
                request::headers(contains(("authorization", "Bearer test-token"))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "album_type": "compilation",
                "id": "4aawyAB9vmqN3uQ7FjRGTy",
            }))),
        );

        let album = client
            .get_album("4aawyAB9vmqN3uQ7FjRGTy", &QueryParams::new())
            .await
            .expect("A valid response");
        assert_eq!(album["album_type"], "compilation");
    }

    #[tokio::test]
    async fn test_get_album_tracks() {
        let server = Server::run();
        let client = client(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/albums/4aawyAB9vmqN3uQ7FjRGTy/tracks"),
                request::query(url_decoded(contains(("market", "US")))),
                request::query(url_decoded(contains(("limit", "10")))),
                request::query(url_decoded(contains(("offset", "5")))),
            ])
            .respond_with(json_encoded(serde_json::json!({ "items": [], "limit": 10, "offset": 5 }))),
        );

        let params = QueryParams::from([("market", "US")])
            .with("limit", 10)
            .with("offset", 5);
        let tracks = client
            .get_album_tracks("4aawyAB9vmqN3uQ7FjRGTy", &params)
            .await
            .expect("A valid response");
        assert_eq!(tracks["limit"], 10);
    }

    #[tokio::test]
    async fn test_get_several_albums() {
        let server = Server::run();
        let client = client(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/albums"),
                request::query(url_decoded(contains((
                    "ids",
                    "382ObEPsp2rxGrnsizN5TX,1A2GTWGtFfWp7KSQTwWOyo"
                )))),
            ])
            .respond_with(json_encoded(serde_json::json!({ "albums": [{}, {}] }))),
        );

        let albums = client
            .get_several_albums(
                &QueryParams::new().with("ids", "382ObEPsp2rxGrnsizN5TX,1A2GTWGtFfWp7KSQTwWOyo"),
            )
            .await
            .expect("A valid response");
        assert_eq!(albums["albums"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_get_new_releases() {
        let server = Server::run();
        let client = client(&server);
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/browse/new-releases"))
                .respond_with(json_encoded(serde_json::json!({ "albums": { "items": [] } }))),
        );

        let releases = client
            .get_new_releases(&QueryParams::new().with("country", "SE"))
            .await
            .expect("A valid response");
        assert!(releases["albums"]["items"].is_array());
    }
}
