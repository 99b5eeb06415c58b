use once_cell::sync::Lazy;
use regex::Regex;

use super::MediaProvider;

static YT_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:youtu\.be/|youtube\.com(?:/embed/|/v/|/watch\?v=|/watch\?.+&v=))(?P<id>[A-Za-z0-9_-]{11})",
    )
    .unwrap()
});

pub struct YouTube;

impl MediaProvider for YouTube {
    fn extract_id(url: &str) -> Option<&str> {
        extract_youtube_id(url)
    }

    fn embed_url(id: &str) -> String {
        format!("https://www.youtube.com/embed/{}", id)
    }

    /// YouTube only serves fixed thumbnail sizes, `hqdefault` is 480x360
    fn thumbnail_url(id: &str, _size: u32) -> String {
        format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id)
    }
}

/// Find the 11 character video id in a `youtu.be`, `/embed/`, `/v/` or `/watch` link
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    Some(YT_ID_RE.captures(url)?.name("id")?.as_str())
}

pub fn is_youtube_url(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}
