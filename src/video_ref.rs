use once_cell::sync::Lazy;
use regex::Regex;

// @module: Video reference resolution from URL strings

// @const: Ordered URL shapes; first match wins
static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?:https?://)?(?:www\.|m\.)?youtube\.com/watch\?v=([^&\n?#]+)",
        r"(?:https?://)?(?:www\.|m\.)?youtube\.com/embed/([^&\n?#]+)",
        r"(?:https?://)?(?:www\.|m\.)?youtube\.com/v/([^&\n?#]+)",
        r"(?:https?://)?(?:www\.|m\.)?youtu\.be/([^&\n?#]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static URL pattern must compile"))
    .collect()
});

/// A bare video identifier resolved from a URL.
///
/// Owns nothing beyond the id string; retrieval of captions for the video is
/// entirely the provider's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    /// The resolved video identifier
    pub id: String,
}

impl VideoRef {
    pub fn new(id: impl Into<String>) -> Self {
        VideoRef { id: id.into() }
    }

    /// Canonical watch URL for the video
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    /// Resolve a video reference from an arbitrary URL string.
    ///
    /// Tries a fixed, ordered set of URL shapes (`watch?v=`, `/embed/`,
    /// `/v/`, `youtu.be/`), each with optional scheme and `www.`/`m.`
    /// subdomain. The captured id stops at `&`, newline, `?`, or `#`, so
    /// playlist ids and fragments never leak into it. Pure string matching,
    /// no network, no retry.
    pub fn resolve(url: &str) -> Option<Self> {
        for pattern in URL_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(url) {
                if let Some(id) = caps.get(1) {
                    return Some(VideoRef::new(id.as_str()));
                }
            }
        }
        None
    }
}

impl std::fmt::Display for VideoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
