//! Image and GIF search models.

use serde::{Deserialize, Serialize};

/// Media attachment of a Pinterest pin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PinterestMedia {
    pub width: u64,
    pub height: u64,
    pub url: String,
}

/// One pin in a Pinterest image search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PinterestImage {
    pub title: String,
    pub media: PinterestMedia,
    pub created_at: String,
    pub id: String,
    pub domain: String,
    #[serde(rename = "usernameAvatar")]
    pub username_avatar: String,
    #[serde(rename = "idUser")]
    pub id_user: String,
    pub fullname: String,
    pub username: String,
    // Upstream field name is Spanish.
    #[serde(rename = "seguidores")]
    pub followers: u64,
    #[serde(rename = "descriptionImage")]
    pub description: String,
}

/// Rule34 search envelope; results are bare image URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rule34Search {
    pub creator: String,
    pub status: bool,
    pub images: Vec<String>,
}

/// Site of origin of a Google image result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleImageWebsite {
    pub domain: String,
    pub url: String,
}

/// Page a Google image result was found on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleImageOrigin {
    pub title: String,
    pub website: GoogleImageWebsite,
}

/// One image in a Google image search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleImage {
    pub url: String,
    pub width: u64,
    pub height: u64,
    pub preview: String,
    pub origin: GoogleImageOrigin,
}

/// Google image search envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleImageSearch {
    pub creator: String,
    pub status: bool,
    pub data: Vec<GoogleImage>,
}

/// One image in a Bing image search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BingImage {
    pub thumbnail: String,
    /// Page the image was found on.
    pub source: String,
    /// Direct image URL.
    pub direct: String,
    pub description: String,
    pub title: String,
}

/// One GIF in a Tenor search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TenorGif {
    pub title: String,
    pub created: String,
    pub mp4: String,
    pub gif: String,
}

/// Tenor search envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TenorSearch {
    pub creator: String,
    pub status: bool,
    pub data: Vec<TenorGif>,
}
