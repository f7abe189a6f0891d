//! Utility tool models.
//!
//! The tools endpoints are not strictly versioned upstream; fields that the
//! remote sometimes omits are optional or defaulted here.

use serde::{Deserialize, Serialize};

/// Result of a URL reachability check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UrlCheck {
    pub url: String,
    pub online: bool,
    /// HTTP status observed by the checker, when it got that far.
    #[serde(default)]
    pub status: Option<u16>,
}

/// Raw HTML extracted from a page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HtmlExtract {
    pub url: String,
    pub html: String,
}

/// Result of a text translation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Translation {
    /// Original input text.
    pub text: String,
    /// Target language code.
    pub language: String,
    pub translation: String,
}

/// ASCII-art rendering of an emoji.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmojiArt {
    pub emoji: String,
    pub art: String,
}

/// Chat-bot reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimiReply {
    #[serde(default)]
    pub success: bool,
    pub response: String,
}

/// One article in a news feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// News headline envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsFeed {
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub status: bool,
    pub data: Vec<NewsArticle>,
}

/// TikTok profile lookup result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TikTokProfile {
    pub username: String,
    pub nickname: String,
    pub avatar: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub videos: u64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Image generated from two combined emojis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MixedEmoji {
    /// URL of the generated image.
    pub url: String,
}

/// Telegram channel metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelInfo {
    pub username: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subscribers: Option<u64>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Metadata for a single emoji character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmojiInfo {
    pub emoji: String,
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub subgroup: Option<String>,
    #[serde(default)]
    pub unicode: Option<String>,
}

/// Country resolved from a phone number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryInfo {
    pub country: String,
    #[serde(default)]
    pub code: Option<String>,
    /// Flag emoji for the country.
    #[serde(default)]
    pub emoji: Option<String>,
}
