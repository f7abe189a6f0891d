//! Web search models: Google and Bing.

use serde::{Deserialize, Serialize};

/// One result in a Google web search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleResult {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Google web search envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleSearch {
    pub creator: String,
    pub status: bool,
    pub data: Vec<GoogleResult>,
}

/// One result in a Bing web search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BingResult {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Bing web search envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BingSearch {
    /// URL of the results page the entries were scraped from.
    #[serde(rename = "currHref")]
    pub curr_href: String,
    pub results: Vec<BingResult>,
}
