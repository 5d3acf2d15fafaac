use super::*;

impl Client {
    /// [Get a playlist owned by a Spotify user](https://developer.spotify.com/documentation/web-api/reference/get-playlist)
    ///
    /// Query parameters: `market`, `fields`, `additional_types`
    pub async fn get_playlist(&self, id: &str, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::Playlist(id), params).await
    }

    /// [Get full details of the items of a playlist](https://developer.spotify.com/documentation/web-api/reference/get-playlists-tracks)
    ///
    /// Query parameters: `market`, `fields`, `limit`, `offset`, `additional_types`
    pub async fn get_playlist_items(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<serde_json::Value> {
        self.get(Endpoint::PlaylistItems(id), params).await
    }

    /// [Get the current image associated with a specific playlist](https://developer.spotify.com/documentation/web-api/reference/get-playlist-cover)
    ///
    /// The response is a JSON array of images rather than an object.
    pub async fn get_playlist_cover_image(&self, id: &str) -> Result<serde_json::Value> {
        self.get_json(Endpoint::PlaylistCoverImage(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::client;
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    const PLAYLIST: &str = "3cEYpjA9oz9GiPac4AsH4n";

    #[tokio::test]
    async fn test_get_playlist() {
        let server = Server::run();
        let client = client(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/playlists/3cEYpjA9oz9GiPac4AsH4n"),
                request::query(url_decoded(contains(("fields", "name,owner(id)")))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "name": "Spotify Web API Testing playlist",
                "owner": { "id": "jmperezperez" },
            }))),
        );

        let playlist = client
            .get_playlist(PLAYLIST, &QueryParams::new().with("fields", "name,owner(id)"))
            .await
            .expect("A valid response");
        assert_eq!(playlist["owner"]["id"], "jmperezperez");
    }

    #[tokio::test]
    async fn test_playlist_items_and_cover() {
        let server = Server::run();
        let client = client(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/playlists/3cEYpjA9oz9GiPac4AsH4n/tracks"),
                request::query(url_decoded(contains(("offset", "100")))),
            ])
            .respond_with(json_encoded(serde_json::json!({ "items": [], "offset": 100 }))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/playlists/3cEYpjA9oz9GiPac4AsH4n/images",
            ))
            .respond_with(json_encoded(serde_json::json!([
                { "url": "https://i.scdn.co/image/ab67706c0000bebb", "height": 640, "width": 640 }
            ]))),
        );

        let items = client
            .get_playlist_items(PLAYLIST, &QueryParams::new().with("offset", 100))
            .await
            .expect("A valid response");
        assert_eq!(items["offset"], 100);
        let images = client
            .get_playlist_cover_image(PLAYLIST)
            .await
            .expect("A valid response");
        assert_eq!(images[0]["height"], 640);
    }
}
