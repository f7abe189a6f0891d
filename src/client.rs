//! Delirius API client.
//!
//! Every public method issues a single GET request against one of the fixed
//! Delirius hosts and decodes the body into its documented shape. Calls are
//! fully independent: no state is shared between them, nothing is retried,
//! and any number of operations may run concurrently.

use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::endpoints::{
    self, Endpoint, ErrorPolicy, Hosts, DEFAULT_NEWS_COUNTRY, DEFAULT_NEWS_LANGUAGE,
    DEFAULT_SEARCH_LIMIT,
};
use crate::error::{DeliriusError, Result};
use crate::models::{
    AppStoreSearch, AppleMusicResult, BingImage, BingSearch, ChannelInfo, CountryInfo,
    DeezerSearch, EmojiArt, EmojiInfo, GeniusSong, GoogleImageSearch, GoogleSearch, HtmlExtract,
    Lyrics, MixedEmoji, MovieSearch, NewsFeed, NpmSearch, PinterestImage, Rule34Search, SimiReply,
    SoundCloudSearch, SpotifySearch, TenorSearch, TikTokProfile, TikTokSearch, Track, Translation,
    UrlCheck, YouTubeVideo,
};

/// Bing image results come wrapped in an envelope the caller never sees.
#[derive(serde::Deserialize)]
struct BingImageResults {
    results: Vec<BingImage>,
}

/// Delirius API client.
///
/// Holds one shared HTTP client and the host table. No authentication is
/// required for any operation.
///
/// # Example
///
/// ```rust,no_run
/// use delirius::DeliriusClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = DeliriusClient::new();
///     let songs = api.genius_search("Taylor Swift Love Story").await?;
///     println!("Found {} songs", songs.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DeliriusClient {
    client: Client,
    hosts: Hosts,
}

impl Default for DeliriusClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliriusClient {
    /// Create a new client against the production hosts.
    pub fn new() -> Self {
        Self::with_hosts(Hosts::default())
    }

    /// Create a new client with overridden hosts.
    ///
    /// Mainly useful for pointing operations at a local test server.
    pub fn with_hosts(hosts: Hosts) -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, hosts }
    }

    /// GET an endpoint and decode the JSON body, applying the endpoint's
    /// error policy to non-success responses.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        values: &[&str],
    ) -> Result<T> {
        let url = endpoint.url(&self.hosts, values);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(match endpoint.policy {
                // Suppression happens at the call site; until then the
                // failure is carried unchanged.
                ErrorPolicy::AsIs | ErrorPolicy::Suppress => DeliriusError::Status { status, body },
                ErrorPolicy::Wrapped => {
                    if serde_json::from_str::<Value>(&body).is_ok() {
                        DeliriusError::Status { status, body }
                    } else {
                        DeliriusError::Api(body)
                    }
                }
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// GET an endpoint and return the raw response bytes.
    ///
    /// Only as-is endpoints may return binary payloads; the wrapped and
    /// suppress policies are not implemented for this path.
    async fn fetch_bytes(&self, endpoint: &Endpoint, values: &[&str]) -> Result<Bytes> {
        debug_assert_eq!(endpoint.policy, ErrorPolicy::AsIs);

        let url = endpoint.url(&self.hosts, values);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(DeliriusError::Status { status, body });
        }

        Ok(response.bytes().await?)
    }

    // ---- Media search ----

    /// Search songs on Genius.
    pub async fn genius_search(&self, query: &str) -> Result<Vec<GeniusSong>> {
        self.fetch_json(&endpoints::GENIUS_SEARCH, &[query]).await
    }

    /// Fetch lyrics by Genius song URL.
    pub async fn search_lyrics(&self, url: &str) -> Result<Lyrics> {
        self.fetch_json(&endpoints::SEARCH_LYRICS, &[url]).await
    }

    /// Search TikTok videos.
    pub async fn search_tiktok(&self, query: &str) -> Result<TikTokSearch> {
        self.fetch_json(&endpoints::SEARCH_TIKTOK, &[query]).await
    }

    /// Search YouTube videos.
    pub async fn search_youtube(&self, query: &str) -> Result<Vec<YouTubeVideo>> {
        self.fetch_json(&endpoints::SEARCH_YOUTUBE, &[query]).await
    }

    /// Search tracks on Spotify.
    ///
    /// `limit` defaults to 20 when `None`.
    pub async fn search_spotify(&self, query: &str, limit: Option<u32>) -> Result<SpotifySearch> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT).to_string();
        self.fetch_json(&endpoints::SEARCH_SPOTIFY, &[query, &limit])
            .await
    }

    /// Generic track search.
    pub async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        self.fetch_json(&endpoints::SEARCH_TRACKS, &[query]).await
    }

    /// Search songs and albums on Apple Music.
    pub async fn search_apple_music(&self, text: &str) -> Result<Vec<AppleMusicResult>> {
        self.fetch_json(&endpoints::SEARCH_APPLE_MUSIC, &[text])
            .await
    }

    /// Search tracks on SoundCloud.
    pub async fn soundcloud_search(&self, query: &str) -> Result<SoundCloudSearch> {
        self.fetch_json(&endpoints::SOUNDCLOUD_SEARCH, &[query])
            .await
    }

    /// Search tracks on Deezer.
    pub async fn deezer_search(&self, query: &str) -> Result<DeezerSearch> {
        self.fetch_json(&endpoints::DEEZER_SEARCH, &[query]).await
    }

    /// Search GIFs on Tenor.
    pub async fn tenor_search(&self, query: &str) -> Result<TenorSearch> {
        self.fetch_json(&endpoints::TENOR_SEARCH, &[query]).await
    }

    // ---- Image and content search ----

    /// Fetch a Pokémon card image.
    ///
    /// Returns the raw image bytes.
    pub async fn search_pokemon(&self, text: &str) -> Result<Bytes> {
        self.fetch_bytes(&endpoints::SEARCH_POKEMON, &[text]).await
    }

    /// Search images on Pinterest.
    ///
    /// This is the one operation that never fails the call: a remote
    /// failure is logged and reported as `None`, indistinguishable from a
    /// missing result set.
    pub async fn search_pinterest(&self, text: &str) -> Option<Vec<PinterestImage>> {
        match self.fetch_json(&endpoints::SEARCH_PINTEREST, &[text]).await {
            Ok(images) => Some(images),
            Err(err) => {
                error!("Error searching for Pinterest images: {}", err);
                None
            }
        }
    }

    /// Search images on Rule34.
    pub async fn search_rule34(&self, query: &str) -> Result<Rule34Search> {
        self.fetch_json(&endpoints::SEARCH_RULE34, &[query]).await
    }

    /// Search images on Google.
    pub async fn search_google_image(&self, query: &str) -> Result<GoogleImageSearch> {
        self.fetch_json(&endpoints::SEARCH_GOOGLE_IMAGE, &[query])
            .await
    }

    /// Search the web on Google.
    pub async fn search_google(&self, query: &str) -> Result<GoogleSearch> {
        self.fetch_json(&endpoints::SEARCH_GOOGLE, &[query]).await
    }

    /// Search the web on Bing.
    pub async fn search_bing(&self, query: &str) -> Result<BingSearch> {
        self.fetch_json(&endpoints::SEARCH_BING, &[query]).await
    }

    /// Search images on Bing.
    pub async fn search_bing_image(&self, query: &str) -> Result<Vec<BingImage>> {
        let envelope: BingImageResults = self
            .fetch_json(&endpoints::SEARCH_BING_IMAGE, &[query])
            .await?;
        Ok(envelope.results)
    }

    // ---- Marketplace search ----

    /// Search packages on the npm registry.
    ///
    /// `limit` defaults to 20 when `None`.
    pub async fn search_npmjs(&self, query: &str, limit: Option<u32>) -> Result<NpmSearch> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT).to_string();
        self.fetch_json(&endpoints::SEARCH_NPMJS, &[query, &limit])
            .await
    }

    /// Search applications on the App Store.
    pub async fn search_app_store(&self, query: &str) -> Result<AppStoreSearch> {
        self.fetch_json(&endpoints::SEARCH_APP_STORE, &[query])
            .await
    }

    /// Search the movie database.
    pub async fn search_movie(&self, query: &str) -> Result<MovieSearch> {
        self.fetch_json(&endpoints::SEARCH_MOVIE, &[query]).await
    }

    // ---- Tools ----

    /// Check whether a URL is reachable.
    pub async fn check_url(&self, url: &str) -> Result<UrlCheck> {
        self.fetch_json(&endpoints::CHECK_URL, &[url]).await
    }

    /// Extract the raw HTML of a page.
    pub async fn extract_html(&self, url: &str) -> Result<HtmlExtract> {
        self.fetch_json(&endpoints::EXTRACT_HTML, &[url]).await
    }

    /// Translate text into the given target language code.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use delirius::DeliriusClient;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let api = DeliriusClient::new();
    /// let t = api.translate("Hola, bienvenido", "en").await?;
    /// println!("{}", t.translation);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn translate(&self, text: &str, language: &str) -> Result<Translation> {
        self.fetch_json(&endpoints::TRANSLATE, &[text, language])
            .await
    }

    /// Render an emoji as ASCII art.
    pub async fn emojito(&self, emoji: &str) -> Result<EmojiArt> {
        self.fetch_json(&endpoints::EMOJITO, &[emoji]).await
    }

    /// Get a conversational reply for the given text.
    pub async fn simisimi(&self, text: &str) -> Result<SimiReply> {
        self.fetch_json(&endpoints::SIMISIMI, &[text]).await
    }

    /// Fetch headline stories.
    ///
    /// `language` defaults to "es" and `country` to "PE" when `None`.
    pub async fn google_news(
        &self,
        language: Option<&str>,
        country: Option<&str>,
    ) -> Result<NewsFeed> {
        let language = language.unwrap_or(DEFAULT_NEWS_LANGUAGE);
        let country = country.unwrap_or(DEFAULT_NEWS_COUNTRY);
        self.fetch_json(&endpoints::GOOGLE_NEWS, &[language, country])
            .await
    }

    /// Look up a TikTok profile by username.
    pub async fn tiktok_stalk(&self, username: &str) -> Result<TikTokProfile> {
        self.fetch_json(&endpoints::TIKTOK_STALK, &[username]).await
    }

    /// Generate an image from two combined emojis.
    pub async fn emoji_mix(&self, emoji1: &str, emoji2: &str) -> Result<MixedEmoji> {
        self.fetch_json(&endpoints::EMOJI_MIX, &[emoji1, emoji2])
            .await
    }

    /// Look up a Telegram channel by handle.
    pub async fn telegram_stalk_channel(&self, channel: &str) -> Result<ChannelInfo> {
        self.fetch_json(&endpoints::TELEGRAM_STALK_CHANNEL, &[channel])
            .await
    }

    /// Look up metadata for an emoji character.
    pub async fn emoji_info(&self, text: &str) -> Result<EmojiInfo> {
        self.fetch_json(&endpoints::EMOJI_INFO, &[text]).await
    }

    /// Resolve the country of a phone number.
    pub async fn country_from_phone(&self, phone_number: &str) -> Result<CountryInfo> {
        self.fetch_json(&endpoints::COUNTRY_FROM_PHONE, &[phone_number])
            .await
    }
}
