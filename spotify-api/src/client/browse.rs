use super::*;

impl Client {
    /// [Get a list of Spotify featured playlists](https://developer.spotify.com/documentation/web-api/reference/get-featured-playlists)
    ///
    /// Query parameters: `country`, `locale`, `timestamp`, `limit`, `offset`
    pub async fn get_featured_playlists(&self, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::FeaturedPlaylists, params).await
    }

    /// [Get a list of Spotify playlists tagged with a particular category](https://developer.spotify.com/documentation/web-api/reference/get-a-categories-playlists)
    ///
    /// Query parameters: `country`, `limit`, `offset`
    pub async fn get_category_playlists(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<serde_json::Value> {
        self.get(Endpoint::CategoryPlaylists(id), params).await
    }

    /// [Get a list of categories used to tag items in Spotify](https://developer.spotify.com/documentation/web-api/reference/get-categories)
    pub async fn get_categories(&self, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::Categories, params).await
    }

    /// [Get a single category used to tag items in Spotify](https://developer.spotify.com/documentation/web-api/reference/get-a-category)
    pub async fn get_category(&self, id: &str, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::Category(id), params).await
    }

    /// [Get the list of markets where Spotify is available](https://developer.spotify.com/documentation/web-api/reference/get-available-markets)
    pub async fn get_available_markets(&self) -> Result<serde_json::Value> {
        self.get_json(Endpoint::Markets).await
    }
}
