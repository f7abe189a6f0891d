//! Marketplace search models: the npm registry and the App Store.

use serde::{Deserialize, Serialize};

/// Contact details of an npm package author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NpmEmail {
    pub name: String,
    pub gmail: String,
}

/// Maintainer of an npm package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NpmMaintainer {
    pub username: String,
    pub email: String,
}

/// One package in an npm registry search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NpmPackage {
    pub package: String,
    pub author: String,
    pub email: NpmEmail,
    pub publish: String,
    pub version: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub url: String,
    pub maintainers: Vec<NpmMaintainer>,
}

/// npm registry search envelope.
///
/// `total` and `limit` come back as strings from the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NpmSearch {
    pub creator: String,
    pub status: bool,
    pub total: String,
    pub limit: String,
    pub results: Vec<NpmPackage>,
}

/// One application in an App Store search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppStoreApp {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub image: String,
    pub genre: Vec<String>,
    pub rating: String,
    pub size: String,
    pub released: String,
    pub updated: String,
    pub version: String,
    pub price: String,
    pub currency: String,
    pub developer: String,
    pub score: f64,
    pub reviews: String,
    #[serde(rename = "currentVersionScore")]
    pub current_version_score: f64,
    pub screenshots: Vec<String>,
    #[serde(rename = "currentVersionReviews")]
    pub current_version_reviews: u64,
    pub website: String,
}

/// App Store search envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppStoreSearch {
    pub creator: String,
    pub status: bool,
    pub data: Vec<AppStoreApp>,
}
