//! Video search models: TikTok, YouTube and the movie database.

use serde::{Deserialize, Serialize};

/// Author of a TikTok video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TikTokAuthor {
    pub id: String,
    pub username: String,
    pub nickname: String,
    pub avatar: String,
}

/// Background music of a TikTok video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TikTokMusic {
    pub id: String,
    pub title: String,
    /// Playback URL for the track.
    pub play: String,
    pub author: String,
}

/// One video in a TikTok search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TikTokVideo {
    pub id: String,
    pub title: String,
    pub region: String,
    /// HD download URL.
    pub hd: String,
    pub duration: u64,
    pub play: u64,
    // The upstream field is spelled "coment".
    #[serde(rename = "coment")]
    pub comments: u64,
    pub share: u64,
    pub like: u64,
    pub download: u64,
    pub publish: u64,
    pub url: String,
    pub author: TikTokAuthor,
    pub music: TikTokMusic,
}

/// TikTok search envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TikTokSearch {
    pub creator: String,
    pub status: u64,
    pub meta: Vec<TikTokVideo>,
}

/// Duration of a YouTube video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YouTubeDuration {
    pub seconds: u64,
    pub timestamp: String,
}

/// Channel that published a YouTube video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YouTubeChannel {
    pub name: String,
    pub url: String,
}

/// One video in a YouTube search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YouTubeVideo {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub thumbnail: String,
    pub seconds: u64,
    pub timestamp: String,
    pub duration: YouTubeDuration,
    /// Human-readable age, e.g. "3 years ago".
    pub ago: String,
    pub views: u64,
    pub author: YouTubeChannel,
}

/// One movie in a movie database search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub adult: bool,
    pub genre_ids: Vec<u64>,
    pub id: u64,
    pub original_language: String,
    pub original_title: String,
    pub overview: String,
    pub popularity: f64,
    pub release_date: String,
    pub title: String,
    pub video: bool,
    pub vote_average: f64,
    pub vote_count: u64,
    pub image: String,
}

/// Movie search envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSearch {
    pub creator: String,
    pub status: bool,
    pub data: Vec<Movie>,
}
