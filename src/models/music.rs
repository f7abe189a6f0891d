//! Music and lyrics search models.
//!
//! Shapes returned by the Genius, Spotify, Deezer, SoundCloud, Apple Music
//! and generic track search endpoints.

use serde::{Deserialize, Serialize};

/// Artist as returned by the Genius search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeniusArtist {
    pub name: String,
    pub url: String,
    pub avatar: String,
    pub verified: bool,
}

/// One song entry in a Genius search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeniusSong {
    pub title: String,
    #[serde(rename = "fullTitle")]
    pub full_title: String,
    pub url: String,
    pub thumbnail: String,
    pub image: String,
    pub id: u64,
    /// API endpoint fragment for fetching the song's lyrics.
    pub endpoint: String,
    pub instrumental: bool,
    pub publish: String,
    pub artist: GeniusArtist,
}

/// Lyrics fetched by Genius URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lyrics {
    pub lyrics: String,
}

/// One track in a Spotify search result.
///
/// All fields come back as strings from the upstream API, including
/// duration and popularity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpotifyTrack {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
    pub popularity: String,
    pub publish: String,
    pub url: String,
    pub image: String,
}

/// Spotify search envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpotifySearch {
    pub creator: String,
    pub status: bool,
    pub data: Vec<SpotifyTrack>,
}

/// Duration of a generic track result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackDuration {
    pub seconds: u64,
    pub label: String,
}

/// One result from the generic track search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    #[serde(rename = "isYtMusic")]
    pub is_yt_music: bool,
    pub title: String,
    pub artist: String,
    pub id: String,
    pub url: String,
    pub album: String,
    pub duration: TrackDuration,
    pub image: String,
}

/// One result from the Apple Music search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppleMusicResult {
    pub title: String,
    pub url: String,
    pub artists: String,
    /// "song" or "album".
    #[serde(rename = "type")]
    pub type_: String,
    pub image: String,
}

/// One track in a SoundCloud search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoundCloudTrack {
    pub title: String,
    pub genre: String,
    pub duration: u64,
    pub likes: u64,
    pub play: u64,
    pub comments: u64,
    pub id: u64,
    pub created: String,
    pub link: String,
}

/// SoundCloud search envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoundCloudSearch {
    pub creator: String,
    pub status: bool,
    pub data: Vec<SoundCloudTrack>,
}

/// One track in a Deezer search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeezerTrack {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub rank: String,
    /// Preview audio URL.
    pub preview: String,
    pub image: String,
    pub url: String,
    pub explicit_lyrics: bool,
}

/// Deezer search envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeezerSearch {
    pub creator: String,
    pub status: bool,
    pub data: Vec<DeezerTrack>,
}
