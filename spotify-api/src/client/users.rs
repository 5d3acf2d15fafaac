use super::*;

impl Client {
    /// [Get public profile information about a Spotify user](https://developer.spotify.com/documentation/web-api/reference/get-users-profile)
    pub async fn get_user_profile(&self, user_id: &str) -> Result<serde_json::Value> {
        self.get_json(Endpoint::UserProfile(user_id)).await
    }

    /// [Check if one or more users are following a playlist](https://developer.spotify.com/documentation/web-api/reference/check-if-user-follows-playlist)
    ///
    /// Query parameters: `ids` (comma separated user IDs, at most 5).
    /// The response is a JSON array of booleans in the order of `ids`.
    pub async fn check_users_follow_playlist(
        &self,
        playlist_id: &str,
        params: &QueryParams,
    ) -> Result<serde_json::Value> {
        self.get(Endpoint::UsersFollowPlaylist(playlist_id), params)
            .await
    }

    /// [Get the public playlists of a Spotify user](https://developer.spotify.com/documentation/web-api/reference/get-list-users-playlists)
    pub async fn get_user_playlists(
        &self,
        user_id: &str,
        params: &QueryParams,
    ) -> Result<serde_json::Value> {
        self.get(Endpoint::UserPlaylists(user_id), params).await
    }
}
