//! Portfolio records as served by the backend's public listing endpoints.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::media::{AssetReference, MediaKind, ResolvedMedia};

pub use client::CatalogClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Photos,
    Videos,
    Edits,
    Profile,
}

impl Collection {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Collection::Photos => "/api/photos",
            Collection::Videos => "/api/videos",
            Collection::Edits => "/api/edits",
            Collection::Profile => "/api/profile",
        }
    }

    /// The profile is a single record and has no categories
    pub fn categories_endpoint(&self) -> Option<&'static str> {
        match self {
            Collection::Photos => Some("/api/photos/categories"),
            Collection::Videos => Some("/api/videos/categories"),
            Collection::Edits => Some("/api/edits/categories"),
            Collection::Profile => None,
        }
    }
}

pub static FEATURED_EDIT_ENDPOINT: &str = "/api/edits/featured";

/// A backend record that can be shown as one or more titled assets
pub trait CatalogRecord {
    fn titled_assets(&self) -> Vec<(String, AssetReference)>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Categories {
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub drive_file_id: Option<String>,
}

impl Photo {
    pub fn asset(&self) -> AssetReference {
        AssetReference {
            explicit_id: self.drive_file_id.clone(),
            primary_url: self.image_url.clone(),
            thumbnail_override_url: self.thumbnail_url.clone(),
            kind_hint: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_kind")]
    pub video_type: Option<MediaKind>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub drive_file_id: Option<String>,
}

impl CatalogRecord for Photo {
    fn titled_assets(&self) -> Vec<(String, AssetReference)> {
        vec![(self.title.clone(), self.asset())]
    }
}

impl Video {
    pub fn asset(&self) -> AssetReference {
        AssetReference {
            explicit_id: self.drive_file_id.clone(),
            primary_url: self.video_url.clone(),
            thumbnail_override_url: self.thumbnail_url.clone(),
            kind_hint: self.video_type,
        }
    }
}

/// A before/after color grade or retouch, with the edited video itself
#[derive(Debug, Clone, Deserialize)]
pub struct Edit {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub category: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub before_url: Option<String>,
    pub after_url: Option<String>,
    pub drive_file_id: Option<String>,
    pub before_drive_id: Option<String>,
    pub after_drive_id: Option<String>,
}

impl CatalogRecord for Video {
    fn titled_assets(&self) -> Vec<(String, AssetReference)> {
        vec![(self.title.clone(), self.asset())]
    }
}

impl Edit {
    pub fn asset(&self) -> AssetReference {
        AssetReference {
            explicit_id: self.drive_file_id.clone(),
            primary_url: self.video_url.clone(),
            thumbnail_override_url: self.thumbnail_url.clone(),
            kind_hint: None,
        }
    }

    pub fn before(&self) -> AssetReference {
        AssetReference {
            explicit_id: self.before_drive_id.clone(),
            primary_url: self.before_url.clone(),
            ..Default::default()
        }
    }

    pub fn after(&self) -> AssetReference {
        AssetReference {
            explicit_id: self.after_drive_id.clone(),
            primary_url: self.after_url.clone(),
            ..Default::default()
        }
    }
}

/// The edited video always, the comparison images only when set
impl CatalogRecord for Edit {
    fn titled_assets(&self) -> Vec<(String, AssetReference)> {
        let comparisons = [("before", self.before()), ("after", self.after())]
            .into_iter()
            .filter(|(_, asset)| !asset.is_empty())
            .map(|(side, asset)| (format!("{} ({})", self.title, side), asset));
        std::iter::once((self.title.clone(), self.asset()))
            .chain(comparisons)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub tagline: String,
    pub profile_image: Option<String>,
    pub profile_drive_id: Option<String>,
}

impl Profile {
    pub fn portrait(&self) -> AssetReference {
        AssetReference {
            explicit_id: self.profile_drive_id.clone(),
            primary_url: self.profile_image.clone(),
            ..Default::default()
        }
    }
}

impl CatalogRecord for Profile {
    fn titled_assets(&self) -> Vec<(String, AssetReference)> {
        vec![(self.full_name.clone(), self.portrait())]
    }
}

/// One displayable asset of a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub title: String,
    pub media: ResolvedMedia,
}

/// Older records carry video types this crate has no use for, e.g. `vimeo`
fn lenient_kind<'de, D>(deserializer: D) -> Result<Option<MediaKind>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
