//! Resolve stored media references into direct, thumbnail and embed urls.
//!
//! Everything here is pure: no I/O, no global state. Callers pass the API origin in and
//! render a placeholder whenever a representation comes back as `None`.

pub mod classify;
pub mod gdrive;
pub mod reference;
pub mod resolve;
pub mod youtube;

pub use classify::{classify, Classification};
pub use gdrive::{extract_drive_id, GoogleDrive};
pub use reference::{AssetReference, MediaKind, Representation};
pub use resolve::{is_embeddable, resolve, resolve_all, ResolvedMedia};
pub use youtube::{extract_youtube_id, YouTube};

/// A hosted media provider that can build urls from its own file ids
pub trait MediaProvider {
    fn extract_id(url: &str) -> Option<&str>;

    fn embed_url(id: &str) -> String;

    fn thumbnail_url(id: &str, size: u32) -> String;

    fn direct_url(id: &str) -> String {
        Self::embed_url(id)
    }

    fn url_for(id: &str, representation: Representation) -> String {
        match representation {
            Representation::Direct => Self::direct_url(id),
            Representation::Thumbnail(size) => Self::thumbnail_url(id, size),
            Representation::Embed => Self::embed_url(id),
        }
    }

    /// Extract the id from `url` and build the requested representation
    fn resolve(url: &str, representation: Representation) -> Option<String> {
        Self::extract_id(url).map(|id| Self::url_for(id, representation))
    }
}
