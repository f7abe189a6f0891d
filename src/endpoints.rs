//! Endpoint configuration for the Delirius API.
//!
//! Every operation exposed by [`crate::DeliriusClient`] is described here as
//! an [`Endpoint`]: which host it lives on, its path, the names of its query
//! parameters, whether each parameter is percent-encoded before
//! interpolation, and which error policy applies to failures. The client
//! methods are thin typed wrappers over this table.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Default result limit for the limit-bearing search operations.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Default language code for the news feed.
pub const DEFAULT_NEWS_LANGUAGE: &str = "es";

/// Default country code for the news feed.
pub const DEFAULT_NEWS_COUNTRY: &str = "PE";

/// Characters escaped for encoded parameters.
///
/// Matches JavaScript's `encodeURIComponent`: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )` is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The fixed Delirius API hosts.
///
/// The production values are process-wide constants exposed through
/// [`Hosts::default`]; each one can be overridden so tests can point an
/// operation at a local server.
#[derive(Debug, Clone)]
pub struct Hosts {
    /// `delirios-api-delta.vercel.app` deployment.
    pub delta: String,
    /// `delirius-api-oficial.vercel.app` deployment.
    pub oficial: String,
    /// `controlled-gae-deliriusapi.koyeb.app` deployment.
    pub gae: String,
}

impl Default for Hosts {
    fn default() -> Self {
        Self {
            delta: "https://delirios-api-delta.vercel.app".to_string(),
            oficial: "https://delirius-api-oficial.vercel.app".to_string(),
            gae: "https://controlled-gae-deliriusapi.koyeb.app".to_string(),
        }
    }
}

impl Hosts {
    fn resolve(&self, host: Host) -> &str {
        match host {
            Host::Delta => &self.delta,
            Host::Oficial => &self.oficial,
            Host::Gae => &self.gae,
        }
    }
}

/// Which of the fixed hosts an endpoint lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    Delta,
    Oficial,
    Gae,
}

/// Error policy applied to a failed request, fixed per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Hand the failure back to the caller unchanged.
    AsIs,
    /// Wrap a bare text failure body into [`crate::DeliriusError::Api`];
    /// pass any other failure through unchanged.
    Wrapped,
    /// Log the failure and complete with an empty result instead of
    /// failing the call. Applied at the call site; only `SEARCH_PINTEREST`
    /// uses this.
    Suppress,
}

/// One query parameter of an endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    /// Query-string key.
    pub name: &'static str,
    /// Whether the value is percent-encoded before interpolation.
    ///
    /// The upstream API applies encoding inconsistently across operations;
    /// this flag preserves the per-operation behavior rather than unifying
    /// it.
    pub encode: bool,
}

impl Param {
    const fn raw(name: &'static str) -> Self {
        Self {
            name,
            encode: false,
        }
    }

    const fn encoded(name: &'static str) -> Self {
        Self { name, encode: true }
    }
}

/// Static description of one remote operation.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub host: Host,
    pub path: &'static str,
    pub params: &'static [Param],
    pub policy: ErrorPolicy,
}

impl Endpoint {
    /// Build the request URL for this endpoint.
    ///
    /// `values` must match `params` in order and length.
    pub fn url(&self, hosts: &Hosts, values: &[&str]) -> String {
        debug_assert_eq!(self.params.len(), values.len());

        let mut url = format!("{}{}", hosts.resolve(self.host), self.path);
        for (i, (param, value)) in self.params.iter().zip(values).enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(param.name);
            url.push('=');
            if param.encode {
                url.extend(utf8_percent_encode(value, COMPONENT));
            } else {
                url.push_str(value);
            }
        }
        url
    }
}

const fn endpoint(
    host: Host,
    path: &'static str,
    params: &'static [Param],
    policy: ErrorPolicy,
) -> Endpoint {
    Endpoint {
        host,
        path,
        params,
        policy,
    }
}

// Media search
pub const GENIUS_SEARCH: Endpoint = endpoint(
    Host::Delta,
    "/search/genius",
    &[Param::raw("q")],
    ErrorPolicy::AsIs,
);
pub const SEARCH_LYRICS: Endpoint = endpoint(
    Host::Delta,
    "/search/lyrics",
    &[Param::encoded("url")],
    ErrorPolicy::AsIs,
);
pub const SEARCH_TIKTOK: Endpoint = endpoint(
    Host::Gae,
    "/api/tiktoksearch",
    &[Param::encoded("query")],
    ErrorPolicy::AsIs,
);
pub const SEARCH_YOUTUBE: Endpoint = endpoint(
    Host::Oficial,
    "/api/ytsearch",
    &[Param::encoded("q")],
    ErrorPolicy::AsIs,
);
pub const SEARCH_SPOTIFY: Endpoint = endpoint(
    Host::Delta,
    "/search/spotify",
    &[Param::raw("q"), Param::raw("limit")],
    ErrorPolicy::AsIs,
);
pub const SEARCH_TRACKS: Endpoint = endpoint(
    Host::Gae,
    "/api/searchtrack",
    &[Param::raw("q")],
    ErrorPolicy::AsIs,
);
pub const SEARCH_APPLE_MUSIC: Endpoint = endpoint(
    Host::Delta,
    "/search/applemusic",
    &[Param::raw("text")],
    ErrorPolicy::AsIs,
);
pub const SOUNDCLOUD_SEARCH: Endpoint = endpoint(
    Host::Oficial,
    "/api/soundcloud",
    &[Param::raw("q")],
    ErrorPolicy::AsIs,
);
pub const DEEZER_SEARCH: Endpoint = endpoint(
    Host::Delta,
    "/search/deezer",
    &[Param::raw("q")],
    ErrorPolicy::AsIs,
);
pub const TENOR_SEARCH: Endpoint = endpoint(
    Host::Delta,
    "/search/tenor",
    &[Param::raw("q")],
    ErrorPolicy::AsIs,
);

// Image and content search
pub const SEARCH_POKEMON: Endpoint = endpoint(
    Host::Delta,
    "/search/pokecard",
    &[Param::raw("text")],
    ErrorPolicy::AsIs,
);
pub const SEARCH_PINTEREST: Endpoint = endpoint(
    Host::Delta,
    "/search/pinterest",
    &[Param::raw("text")],
    ErrorPolicy::Suppress,
);
pub const SEARCH_RULE34: Endpoint = endpoint(
    Host::Oficial,
    "/api/rule34",
    &[Param::raw("query")],
    ErrorPolicy::Wrapped,
);
pub const SEARCH_GOOGLE_IMAGE: Endpoint = endpoint(
    Host::Delta,
    "/search/gimage",
    &[Param::raw("query")],
    ErrorPolicy::Wrapped,
);
pub const SEARCH_GOOGLE: Endpoint = endpoint(
    Host::Delta,
    "/search/googlesearch",
    &[Param::raw("query")],
    ErrorPolicy::Wrapped,
);
pub const SEARCH_BING: Endpoint = endpoint(
    Host::Oficial,
    "/api/bingsearch",
    &[Param::raw("query")],
    ErrorPolicy::AsIs,
);
pub const SEARCH_BING_IMAGE: Endpoint = endpoint(
    Host::Oficial,
    "/api/bingimage",
    &[Param::raw("query")],
    ErrorPolicy::Wrapped,
);

// Marketplace search
pub const SEARCH_NPMJS: Endpoint = endpoint(
    Host::Delta,
    "/search/npm",
    &[Param::raw("q"), Param::raw("limit")],
    ErrorPolicy::AsIs,
);
pub const SEARCH_APP_STORE: Endpoint = endpoint(
    Host::Delta,
    "/search/appstore",
    &[Param::raw("q")],
    ErrorPolicy::AsIs,
);
pub const SEARCH_MOVIE: Endpoint = endpoint(
    Host::Oficial,
    "/api/movie",
    &[Param::raw("query")],
    ErrorPolicy::Wrapped,
);

// Tools
pub const CHECK_URL: Endpoint = endpoint(
    Host::Delta,
    "/tools/checkurl",
    &[Param::raw("url")],
    ErrorPolicy::Wrapped,
);
pub const EXTRACT_HTML: Endpoint = endpoint(
    Host::Delta,
    "/tools/htmlextract",
    &[Param::raw("url")],
    ErrorPolicy::Wrapped,
);
pub const TRANSLATE: Endpoint = endpoint(
    Host::Delta,
    "/tools/translate",
    &[Param::encoded("text"), Param::raw("language")],
    ErrorPolicy::Wrapped,
);
pub const EMOJITO: Endpoint = endpoint(
    Host::Delta,
    "/tools/mojito",
    &[Param::encoded("emoji")],
    ErrorPolicy::Wrapped,
);
pub const SIMISIMI: Endpoint = endpoint(
    Host::Gae,
    "/api/simi",
    &[Param::raw("text")],
    ErrorPolicy::Wrapped,
);
pub const GOOGLE_NEWS: Endpoint = endpoint(
    Host::Gae,
    "/api/noticias",
    &[Param::raw("language"), Param::raw("country")],
    ErrorPolicy::Wrapped,
);
pub const TIKTOK_STALK: Endpoint = endpoint(
    Host::Delta,
    "/tools/tiktokstalk",
    &[Param::encoded("q")],
    ErrorPolicy::Wrapped,
);
pub const EMOJI_MIX: Endpoint = endpoint(
    Host::Delta,
    "/tools/mixed",
    &[Param::encoded("emoji1"), Param::encoded("emoji2")],
    ErrorPolicy::Wrapped,
);
pub const TELEGRAM_STALK_CHANNEL: Endpoint = endpoint(
    Host::Delta,
    "/tools/channelstalk",
    &[Param::raw("channel")],
    ErrorPolicy::Wrapped,
);
pub const EMOJI_INFO: Endpoint = endpoint(
    Host::Gae,
    "/api/emoji",
    &[Param::encoded("text")],
    ErrorPolicy::Wrapped,
);
pub const COUNTRY_FROM_PHONE: Endpoint = endpoint(
    Host::Oficial,
    "/api/country",
    &[Param::encoded("text")],
    ErrorPolicy::Wrapped,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hosts_point_at_production() {
        let hosts = Hosts::default();
        assert_eq!(hosts.delta, "https://delirios-api-delta.vercel.app");
        assert_eq!(hosts.oficial, "https://delirius-api-oficial.vercel.app");
        assert_eq!(hosts.gae, "https://controlled-gae-deliriusapi.koyeb.app");
    }

    #[test]
    fn raw_param_is_interpolated_verbatim() {
        let url = GENIUS_SEARCH.url(&Hosts::default(), &["Taylor Swift Love Story"]);
        assert_eq!(
            url,
            "https://delirios-api-delta.vercel.app/search/genius?q=Taylor Swift Love Story"
        );
    }

    #[test]
    fn raw_param_keeps_reserved_characters() {
        // Upstream interpolates these operations without encoding, so an
        // ampersand survives into the query string.
        let url = DEEZER_SEARCH.url(&Hosts::default(), &["drum & bass"]);
        assert!(url.ends_with("/search/deezer?q=drum & bass"));
    }

    #[test]
    fn encoded_param_matches_encode_uri_component() {
        let url = SEARCH_LYRICS.url(
            &Hosts::default(),
            &["https://genius.com/Taylor-swift-love-story-lyrics"],
        );
        assert_eq!(
            url,
            "https://delirios-api-delta.vercel.app/search/lyrics?url=https%3A%2F%2Fgenius.com%2FTaylor-swift-love-story-lyrics"
        );
    }

    #[test]
    fn encoded_param_preserves_unescaped_set() {
        // encodeURIComponent leaves - _ . ! ~ * ' ( ) alone.
        let url = SEARCH_YOUTUBE.url(&Hosts::default(), &["a-b_c.d!e~f*g'h(i)j"]);
        assert!(url.ends_with("/api/ytsearch?q=a-b_c.d!e~f*g'h(i)j"));
    }

    #[test]
    fn encoded_param_escapes_spaces_and_unicode() {
        let url = SEARCH_TIKTOK.url(&Hosts::default(), &["nayeon twice"]);
        assert_eq!(
            url,
            "https://controlled-gae-deliriusapi.koyeb.app/api/tiktoksearch?query=nayeon%20twice"
        );

        let url = EMOJITO.url(&Hosts::default(), &["😀"]);
        assert!(url.ends_with("/tools/mojito?emoji=%F0%9F%98%80"));
    }

    #[test]
    fn multi_param_endpoints_join_with_ampersand() {
        let url = SEARCH_SPOTIFY.url(&Hosts::default(), &["lovesick girls", "20"]);
        assert_eq!(
            url,
            "https://delirios-api-delta.vercel.app/search/spotify?q=lovesick girls&limit=20"
        );

        let url = GOOGLE_NEWS.url(&Hosts::default(), &["en", "US"]);
        assert!(url.ends_with("/api/noticias?language=en&country=US"));
    }

    #[test]
    fn translate_encodes_text_but_not_language() {
        let url = TRANSLATE.url(&Hosts::default(), &["¿cómo estás?", "en"]);
        assert!(url.ends_with("/tools/translate?text=%C2%BFc%C3%B3mo%20est%C3%A1s%3F&language=en"));
    }

    #[test]
    fn emoji_mix_encodes_both_parameters() {
        let url = EMOJI_MIX.url(&Hosts::default(), &["😝", "😊"]);
        assert!(url.ends_with("/tools/mixed?emoji1=%F0%9F%98%9D&emoji2=%F0%9F%98%8A"));
    }

    #[test]
    fn every_endpoint_builds_its_documented_url() {
        let hosts = Hosts::default();
        let delta = "https://delirios-api-delta.vercel.app";
        let oficial = "https://delirius-api-oficial.vercel.app";
        let gae = "https://controlled-gae-deliriusapi.koyeb.app";

        // One row per endpoint constant. The two-word value also pins each
        // parameter's encode flag: raw interpolation keeps the space,
        // encoding turns it into %20.
        let cases: Vec<(Endpoint, Vec<&str>, String)> = vec![
            (
                GENIUS_SEARCH,
                vec!["two words"],
                format!("{delta}/search/genius?q=two words"),
            ),
            (
                SEARCH_LYRICS,
                vec!["https://genius.com/a-lyrics"],
                format!("{delta}/search/lyrics?url=https%3A%2F%2Fgenius.com%2Fa-lyrics"),
            ),
            (
                SEARCH_TIKTOK,
                vec!["two words"],
                format!("{gae}/api/tiktoksearch?query=two%20words"),
            ),
            (
                SEARCH_YOUTUBE,
                vec!["two words"],
                format!("{oficial}/api/ytsearch?q=two%20words"),
            ),
            (
                SEARCH_SPOTIFY,
                vec!["two words", "20"],
                format!("{delta}/search/spotify?q=two words&limit=20"),
            ),
            (
                SEARCH_TRACKS,
                vec!["two words"],
                format!("{gae}/api/searchtrack?q=two words"),
            ),
            (
                SEARCH_APPLE_MUSIC,
                vec!["two words"],
                format!("{delta}/search/applemusic?text=two words"),
            ),
            (
                SOUNDCLOUD_SEARCH,
                vec!["two words"],
                format!("{oficial}/api/soundcloud?q=two words"),
            ),
            (
                DEEZER_SEARCH,
                vec!["two words"],
                format!("{delta}/search/deezer?q=two words"),
            ),
            (
                TENOR_SEARCH,
                vec!["two words"],
                format!("{delta}/search/tenor?q=two words"),
            ),
            (
                SEARCH_POKEMON,
                vec!["two words"],
                format!("{delta}/search/pokecard?text=two words"),
            ),
            (
                SEARCH_PINTEREST,
                vec!["two words"],
                format!("{delta}/search/pinterest?text=two words"),
            ),
            (
                SEARCH_RULE34,
                vec!["two words"],
                format!("{oficial}/api/rule34?query=two words"),
            ),
            (
                SEARCH_GOOGLE_IMAGE,
                vec!["two words"],
                format!("{delta}/search/gimage?query=two words"),
            ),
            (
                SEARCH_GOOGLE,
                vec!["two words"],
                format!("{delta}/search/googlesearch?query=two words"),
            ),
            (
                SEARCH_BING,
                vec!["two words"],
                format!("{oficial}/api/bingsearch?query=two words"),
            ),
            (
                SEARCH_BING_IMAGE,
                vec!["two words"],
                format!("{oficial}/api/bingimage?query=two words"),
            ),
            (
                SEARCH_NPMJS,
                vec!["two words", "20"],
                format!("{delta}/search/npm?q=two words&limit=20"),
            ),
            (
                SEARCH_APP_STORE,
                vec!["two words"],
                format!("{delta}/search/appstore?q=two words"),
            ),
            (
                SEARCH_MOVIE,
                vec!["two words"],
                format!("{oficial}/api/movie?query=two words"),
            ),
            (
                CHECK_URL,
                vec!["https://example.com/a b"],
                format!("{delta}/tools/checkurl?url=https://example.com/a b"),
            ),
            (
                EXTRACT_HTML,
                vec!["https://example.com/a b"],
                format!("{delta}/tools/htmlextract?url=https://example.com/a b"),
            ),
            (
                TRANSLATE,
                vec!["two words", "en"],
                format!("{delta}/tools/translate?text=two%20words&language=en"),
            ),
            (
                EMOJITO,
                vec!["😀"],
                format!("{delta}/tools/mojito?emoji=%F0%9F%98%80"),
            ),
            (
                SIMISIMI,
                vec!["two words"],
                format!("{gae}/api/simi?text=two words"),
            ),
            (
                GOOGLE_NEWS,
                vec!["es", "PE"],
                format!("{gae}/api/noticias?language=es&country=PE"),
            ),
            (
                TIKTOK_STALK,
                vec!["two words"],
                format!("{delta}/tools/tiktokstalk?q=two%20words"),
            ),
            (
                EMOJI_MIX,
                vec!["😝", "😊"],
                format!("{delta}/tools/mixed?emoji1=%F0%9F%98%9D&emoji2=%F0%9F%98%8A"),
            ),
            (
                TELEGRAM_STALK_CHANNEL,
                vec!["two words"],
                format!("{delta}/tools/channelstalk?channel=two words"),
            ),
            (
                EMOJI_INFO,
                vec!["two words"],
                format!("{gae}/api/emoji?text=two%20words"),
            ),
            (
                COUNTRY_FROM_PHONE,
                vec!["+34 613 28 81 16"],
                format!("{oficial}/api/country?text=%2B34%20613%2028%2081%2016"),
            ),
        ];

        assert_eq!(cases.len(), 31);
        for (endpoint, values, expected) in &cases {
            assert_eq!(&endpoint.url(&hosts, values), expected);
        }
    }

    #[test]
    fn host_overrides_are_respected() {
        let hosts = Hosts {
            gae: "http://127.0.0.1:9000".to_string(),
            ..Hosts::default()
        };
        let url = SIMISIMI.url(&hosts, &["hola"]);
        assert_eq!(url, "http://127.0.0.1:9000/api/simi?text=hola");
    }
}
