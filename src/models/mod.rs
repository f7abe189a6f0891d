//! Data models for Delirius API responses.
//!
//! Each response shape is an immutable record matching one remote
//! endpoint's JSON contract, grouped here by domain.

pub mod image;
pub mod music;
pub mod search;
pub mod store;
pub mod tools;
pub mod video;

// Re-exports for convenience
pub use image::{
    BingImage, GoogleImage, GoogleImageOrigin, GoogleImageSearch, GoogleImageWebsite,
    PinterestImage, PinterestMedia, Rule34Search, TenorGif, TenorSearch,
};
pub use music::{
    AppleMusicResult, DeezerSearch, DeezerTrack, GeniusArtist, GeniusSong, Lyrics,
    SoundCloudSearch, SoundCloudTrack, SpotifySearch, SpotifyTrack, Track, TrackDuration,
};
pub use search::{BingResult, BingSearch, GoogleResult, GoogleSearch};
pub use store::{AppStoreApp, AppStoreSearch, NpmEmail, NpmMaintainer, NpmPackage, NpmSearch};
pub use tools::{
    ChannelInfo, CountryInfo, EmojiArt, EmojiInfo, HtmlExtract, MixedEmoji, NewsArticle, NewsFeed,
    SimiReply, TikTokProfile, Translation, UrlCheck,
};
pub use video::{
    Movie, MovieSearch, TikTokAuthor, TikTokMusic, TikTokSearch, TikTokVideo, YouTubeChannel,
    YouTubeDuration, YouTubeVideo,
};
