use once_cell::sync::Lazy;
use regex::Regex;

use super::classify::BARE_ID_RE;
use super::MediaProvider;

static PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/d/(?P<id>[A-Za-z0-9_-]+)").unwrap());
static QUERY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&]id=(?P<id>[A-Za-z0-9_-]+)").unwrap());

pub struct GoogleDrive;

impl MediaProvider for GoogleDrive {
    fn extract_id(url: &str) -> Option<&str> {
        extract_drive_id(url)
    }

    fn direct_url(id: &str) -> String {
        format!("https://drive.google.com/uc?export=view&id={}", id)
    }

    fn thumbnail_url(id: &str, size: u32) -> String {
        format!("https://drive.google.com/thumbnail?id={}&sz=w{}", id, size)
    }

    fn embed_url(id: &str) -> String {
        format!("https://drive.google.com/file/d/{}/preview", id)
    }
}

/// Extract a Drive file id from `/d/<id>`, `?id=<id>`, or a bare id
pub fn extract_drive_id(url: &str) -> Option<&str> {
    [&*PATH_RE, &*QUERY_RE]
        .into_iter()
        .find_map(|re| re.captures(url))
        .and_then(|cap| cap.name("id"))
        .map(|id| id.as_str())
        .or_else(|| BARE_ID_RE.is_match(url).then_some(url))
}

pub fn is_drive_url(url: &str) -> bool {
    url.contains("drive.google.com")
}
