use super::*;

impl Client {
    /// [Get Spotify catalog information for a single artist](https://developer.spotify.com/documentation/web-api/reference/get-an-artist)
    pub async fn get_artist(&self, id: &str) -> Result<serde_json::Value> {
        self.get_json(Endpoint::Artist(id)).await
    }

    /// [Get Spotify catalog information for several artists](https://developer.spotify.com/documentation/web-api/reference/get-multiple-artists)
    ///
    /// Query parameters: `ids` (comma separated, at most 50)
    pub async fn get_several_artists(&self, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::SeveralArtists, params).await
    }

    /// [Get Spotify catalog information about an artist's albums](https://developer.spotify.com/documentation/web-api/reference/get-an-artists-albums)
    ///
    /// Query parameters: `include_groups`, `market`, `limit`, `offset`
    pub async fn get_artist_albums(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<serde_json::Value> {
        self.get(Endpoint::ArtistAlbums(id), params).await
    }

    /// [Get Spotify catalog information about an artist's top tracks by country](https://developer.spotify.com/documentation/web-api/reference/get-an-artists-top-tracks)
    ///
    /// Query parameters: `market`
    pub async fn get_artist_top_tracks(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<serde_json::Value> {
        self.get(Endpoint::ArtistTopTracks(id), params).await
    }

    /// [Get Spotify catalog information about artists similar to a given artist](https://developer.spotify.com/documentation/web-api/reference/get-an-artists-related-artists)
    pub async fn get_artist_related_artists(&self, id: &str) -> Result<serde_json::Value> {
        self.get_json(Endpoint::ArtistRelatedArtists(id)).await
    }
}
