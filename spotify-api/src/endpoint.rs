use strum_macros::IntoStaticStr;

/// The [Web API endpoints](https://developer.spotify.com/documentation/web-api/reference/)
/// available with client credentials, with their path parameters.
///
/// Path parameters are appended to the URL as path segments and are expected to be URL safe IDs.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Endpoint<'a> {
    /// [Get Album](https://developer.spotify.com/documentation/web-api/reference/get-an-album)
    Album(&'a str),
    /// [Get Several Albums](https://developer.spotify.com/documentation/web-api/reference/get-multiple-albums)
    SeveralAlbums,
    /// [Get Album Tracks](https://developer.spotify.com/documentation/web-api/reference/get-an-albums-tracks)
    AlbumTracks(&'a str),
    /// [Get New Releases](https://developer.spotify.com/documentation/web-api/reference/get-new-releases)
    NewReleases,
    /// [Get Artist](https://developer.spotify.com/documentation/web-api/reference/get-an-artist)
    Artist(&'a str),
    /// [Get Several Artists](https://developer.spotify.com/documentation/web-api/reference/get-multiple-artists)
    SeveralArtists,
    /// [Get Artist's Albums](https://developer.spotify.com/documentation/web-api/reference/get-an-artists-albums)
    ArtistAlbums(&'a str),
    /// [Get Artist's Top Tracks](https://developer.spotify.com/documentation/web-api/reference/get-an-artists-top-tracks)
    ArtistTopTracks(&'a str),
    /// [Get Artist's Related Artists](https://developer.spotify.com/documentation/web-api/reference/get-an-artists-related-artists)
    ArtistRelatedArtists(&'a str),
    /// [Get Playlist](https://developer.spotify.com/documentation/web-api/reference/get-playlist)
    Playlist(&'a str),
    /// [Get Playlist Items](https://developer.spotify.com/documentation/web-api/reference/get-playlists-tracks)
    PlaylistItems(&'a str),
    /// [Get Playlist Cover Image](https://developer.spotify.com/documentation/web-api/reference/get-playlist-cover)
    PlaylistCoverImage(&'a str),
    /// [Get Featured Playlists](https://developer.spotify.com/documentation/web-api/reference/get-featured-playlists)
    FeaturedPlaylists,
    /// [Get Category's Playlists](https://developer.spotify.com/documentation/web-api/reference/get-a-categories-playlists)
    CategoryPlaylists(&'a str),
    /// [Get Several Browse Categories](https://developer.spotify.com/documentation/web-api/reference/get-categories)
    Categories,
    /// [Get Single Browse Category](https://developer.spotify.com/documentation/web-api/reference/get-a-category)
    Category(&'a str),
    /// [Get Track](https://developer.spotify.com/documentation/web-api/reference/get-track)
    Track(&'a str),
    /// [Get Several Tracks](https://developer.spotify.com/documentation/web-api/reference/get-several-tracks)
    SeveralTracks,
    /// [Get Track's Audio Features](https://developer.spotify.com/documentation/web-api/reference/get-audio-features)
    AudioFeatures(&'a str),
    /// [Get Tracks' Audio Features](https://developer.spotify.com/documentation/web-api/reference/get-several-audio-features)
    SeveralAudioFeatures,
    /// [Get Track's Audio Analysis](https://developer.spotify.com/documentation/web-api/reference/get-audio-analysis)
    AudioAnalysis(&'a str),
    /// [Get Recommendations](https://developer.spotify.com/documentation/web-api/reference/get-recommendations)
    Recommendations,
    /// [Get Available Genre Seeds](https://developer.spotify.com/documentation/web-api/reference/get-recommendation-genres)
    AvailableGenreSeeds,
    /// [Get User's Profile](https://developer.spotify.com/documentation/web-api/reference/get-users-profile)
    UserProfile(&'a str),
    /// [Check if Users Follow Playlist](https://developer.spotify.com/documentation/web-api/reference/check-if-user-follows-playlist)
    UsersFollowPlaylist(&'a str),
    /// [Get User's Playlists](https://developer.spotify.com/documentation/web-api/reference/get-list-users-playlists)
    UserPlaylists(&'a str),
    /// [Search for Item](https://developer.spotify.com/documentation/web-api/reference/search)
    Search,
    /// [Get Available Markets](https://developer.spotify.com/documentation/web-api/reference/get-available-markets)
    Markets,
}
use Endpoint::*;

impl<'a> Endpoint<'a> {
    /// The path segments following the API base URL
    pub fn path(&self) -> Vec<&'a str> {
        match *self {
            Album(id) => vec!["albums", id],
            SeveralAlbums => vec!["albums"],
            AlbumTracks(id) => vec!["albums", id, "tracks"],
            NewReleases => vec!["browse", "new-releases"],
            Artist(id) => vec!["artists", id],
            SeveralArtists => vec!["artists"],
            ArtistAlbums(id) => vec!["artists", id, "albums"],
            ArtistTopTracks(id) => vec!["artists", id, "top-tracks"],
            ArtistRelatedArtists(id) => vec!["artists", id, "related-artists"],
            Playlist(id) => vec!["playlists", id],
            PlaylistItems(id) => vec!["playlists", id, "tracks"],
            PlaylistCoverImage(id) => vec!["playlists", id, "images"],
            FeaturedPlaylists => vec!["browse", "featured-playlists"],
            CategoryPlaylists(id) => vec!["browse", "categories", id, "playlists"],
            Categories => vec!["browse", "categories"],
            Category(id) => vec!["browse", "categories", id],
            Track(id) => vec!["tracks", id],
            SeveralTracks => vec!["tracks"],
            AudioFeatures(id) => vec!["audio-features", id],
            SeveralAudioFeatures => vec!["audio-features"],
            AudioAnalysis(id) => vec!["audio-analysis", id],
            Recommendations => vec!["recommendations"],
            AvailableGenreSeeds => vec!["recommendations", "available-genre-seeds"],
            UserProfile(id) => vec!["users", id],
            UsersFollowPlaylist(id) => vec!["playlists", id, "followers", "contains"],
            UserPlaylists(id) => vec!["users", id, "playlists"],
            Search => vec!["search"],
            Markets => vec!["markets"],
        }
    }

    /// The HTTP method of the endpoint
    pub fn method(&self) -> reqwest::Method {
        reqwest::Method::GET
    }

    /// The endpoint name, for diagnostics
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Creates the request URL from the API `base` URL and the query `params`
    pub fn url(&self, base: &utils::Url, params: &utils::QueryParams) -> utils::Url {
        base.with_path(self.path()).with_query(params)
    }
}

impl std::fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} /{}", self.method(), self.path().join("/"))
    }
}
