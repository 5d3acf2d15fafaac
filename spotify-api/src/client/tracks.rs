use super::*;

impl Client {
    /// [Get Spotify catalog information for a single track](https://developer.spotify.com/documentation/web-api/reference/get-track)
    ///
    /// Query parameters: `market`
    pub async fn get_track(&self, id: &str, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::Track(id), params).await
    }

    /// [Get Spotify catalog information for multiple tracks](https://developer.spotify.com/documentation/web-api/reference/get-several-tracks)
    ///
    /// Query parameters: `ids` (comma separated, at most 50), `market`
    pub async fn get_several_tracks(&self, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::SeveralTracks, params).await
    }

    /// [Get audio feature information for a single track](https://developer.spotify.com/documentation/web-api/reference/get-audio-features)
    pub async fn get_track_audio_features(&self, id: &str) -> Result<serde_json::Value> {
        self.get_json(Endpoint::AudioFeatures(id)).await
    }

    /// [Get audio features for multiple tracks](https://developer.spotify.com/documentation/web-api/reference/get-several-audio-features)
    ///
    /// Query parameters: `ids` (comma separated, at most 100)
    pub async fn get_several_audio_features(
        &self,
        params: &QueryParams,
    ) -> Result<serde_json::Value> {
        self.get(Endpoint::SeveralAudioFeatures, params).await
    }

    /// [Get a low-level audio analysis for a track](https://developer.spotify.com/documentation/web-api/reference/get-audio-analysis)
    pub async fn get_track_audio_analysis(&self, id: &str) -> Result<serde_json::Value> {
        self.get_json(Endpoint::AudioAnalysis(id)).await
    }

    /// [Get recommendations based on seed artists, genres and tracks](https://developer.spotify.com/documentation/web-api/reference/get-recommendations)
    ///
    /// Up to 5 seeds in any combination of `seed_artists`, `seed_genres` and `seed_tracks`,
    /// tunable attributes are passed as `min_*`, `max_*` and `target_*` parameters.
    pub async fn get_recommendations(&self, params: &QueryParams) -> Result<serde_json::Value> {
        self.get(Endpoint::Recommendations, params).await
    }

    /// [Get the genres available as `seed_genres`](https://developer.spotify.com/documentation/web-api/reference/get-recommendation-genres)
    pub async fn get_available_genre_seeds(&self) -> Result<serde_json::Value> {
        self.get_json(Endpoint::AvailableGenreSeeds).await
    }
}
