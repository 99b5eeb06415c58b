use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::gdrive::is_drive_url;
use super::youtube::is_youtube_url;

pub(crate) static BARE_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Where a pasted media string points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Empty,
    BareId,
    #[serde(rename = "youtube")]
    YouTube,
    GoogleDrive,
    AbsoluteUrl,
    RelativePath,
}

/// Classify a media string by its shape.
///
/// Provider domains are checked before the scheme, since YouTube and Drive links are
/// absolute urls themselves.
pub fn classify(input: &str) -> Classification {
    let input = input.trim();
    if input.is_empty() {
        Classification::Empty
    } else if BARE_ID_RE.is_match(input) {
        Classification::BareId
    } else if is_youtube_url(input) {
        Classification::YouTube
    } else if is_drive_url(input) {
        Classification::GoogleDrive
    } else if is_absolute(input) {
        Classification::AbsoluteUrl
    } else {
        Classification::RelativePath
    }
}

pub(crate) fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
