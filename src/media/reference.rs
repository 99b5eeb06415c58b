use serde::{Deserialize, Serialize};

/// Declared source of a video, as stored in the backend's `video_type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    YouTube,
    GDrive,
    #[serde(alias = "mp4")]
    Direct,
    Upload,
}

/// The form of a media url a view needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Full resolution, for `<img>` and `<video>` tags
    Direct,
    /// Preview image at the given width in pixels
    Thumbnail(u32),
    /// Player url for an iframe
    Embed,
}

/// The fields of a photo, video, edit or profile record that describe where its media lives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetReference {
    pub explicit_id: Option<String>,
    pub primary_url: Option<String>,
    pub thumbnail_override_url: Option<String>,
    pub kind_hint: Option<MediaKind>,
}

impl AssetReference {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            primary_url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn with_explicit_id(mut self, id: impl Into<String>) -> Self {
        self.explicit_id = Some(id.into());
        self
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_override_url = Some(url.into());
        self
    }

    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kind_hint = Some(kind);
        self
    }

    pub fn explicit_id(&self) -> Option<&str> {
        non_blank(&self.explicit_id)
    }

    pub fn primary_url(&self) -> Option<&str> {
        non_blank(&self.primary_url)
    }

    pub fn thumbnail_override_url(&self) -> Option<&str> {
        non_blank(&self.thumbnail_override_url)
    }

    /// True if no field carries anything resolvable
    pub fn is_empty(&self) -> bool {
        self.explicit_id().is_none()
            && self.primary_url().is_none()
            && self.thumbnail_override_url().is_none()
    }
}

/// Backend records use both `null` and `""` for missing values
fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
