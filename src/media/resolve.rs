use serde::Serialize;

use super::classify::{classify, is_absolute, Classification};
use super::gdrive::GoogleDrive;
use super::reference::{AssetReference, MediaKind, Representation};
use super::youtube::YouTube;
use super::MediaProvider;

/// Every representation of one asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedMedia {
    pub direct: Option<String>,
    pub thumbnail: Option<String>,
    pub embed: Option<String>,
    pub embeddable: bool,
}

/// Build the url for one representation of an asset.
///
/// A stored Drive id wins over everything, then an explicit thumbnail (thumbnails only),
/// then whatever the primary url turns out to be. `None` means nothing usable.
pub fn resolve(
    reference: &AssetReference,
    representation: Representation,
    api_origin: &str,
) -> Option<String> {
    if let Some(id) = reference.explicit_id() {
        return Some(GoogleDrive::url_for(id, representation));
    }

    if let Representation::Thumbnail(_) = representation {
        if let Some(thumbnail) = reference.thumbnail_override_url() {
            return Some(qualify(thumbnail, api_origin));
        }
    }

    let url = reference.primary_url()?;
    match classify(url) {
        Classification::YouTube => YouTube::resolve(url, representation),
        Classification::GoogleDrive => GoogleDrive::resolve(url, representation),
        Classification::BareId => Some(GoogleDrive::url_for(url, representation)),
        Classification::AbsoluteUrl => Some(url.to_owned()),
        Classification::RelativePath => Some(qualify(url, api_origin)),
        Classification::Empty => None,
    }
}

/// Whether the asset plays inside a provider's iframe rather than a native media tag
pub fn is_embeddable(reference: &AssetReference) -> bool {
    if reference.explicit_id().is_some() {
        return true;
    }
    match reference.primary_url().map(classify) {
        Some(Classification::YouTube | Classification::GoogleDrive) => true,
        Some(Classification::BareId) => reference.kind_hint == Some(MediaKind::GDrive),
        Some(
            Classification::AbsoluteUrl | Classification::RelativePath | Classification::Empty,
        )
        | None => false,
    }
}

pub fn resolve_all(
    reference: &AssetReference,
    thumbnail_size: u32,
    api_origin: &str,
) -> ResolvedMedia {
    ResolvedMedia {
        direct: resolve(reference, Representation::Direct, api_origin),
        thumbnail: resolve(reference, Representation::Thumbnail(thumbnail_size), api_origin),
        embed: resolve(reference, Representation::Embed, api_origin),
        embeddable: is_embeddable(reference),
    }
}

/// Prefix a backend-relative path with the API origin.
///
/// Only `http://` and `https://` count as absolute, so a scheme-relative `//cdn/a.jpg` is
/// prefixed like any other path.
fn qualify(url: &str, api_origin: &str) -> String {
    if is_absolute(url) {
        return url.to_owned();
    }
    let origin = api_origin.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{}{}", origin, url)
    } else {
        format!("{}/{}", origin, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:8000";

    fn all_representations() -> [Representation; 3] {
        [
            Representation::Direct,
            Representation::Thumbnail(400),
            Representation::Embed,
        ]
    }

    #[test]
    fn test_explicit_id_wins() {
        let reference = AssetReference::from_url("https://youtu.be/dQw4w9WgXcQ")
            .with_explicit_id("F1")
            .with_thumbnail("/uploads/thumb.jpg");
        assert_eq!(
            Some("https://drive.google.com/thumbnail?id=F1&sz=w400".to_owned()),
            resolve(&reference, Representation::Thumbnail(400), ORIGIN)
        );
        assert_eq!(
            Some("https://drive.google.com/uc?export=view&id=F1".to_owned()),
            resolve(&reference, Representation::Direct, ORIGIN)
        );
        assert_eq!(
            Some("https://drive.google.com/file/d/F1/preview".to_owned()),
            resolve(&reference, Representation::Embed, ORIGIN)
        );
    }

    #[test]
    fn test_thumbnail_override() {
        let reference = AssetReference::from_url("https://youtu.be/dQw4w9WgXcQ")
            .with_thumbnail("/uploads/t.jpg");
        assert_eq!(
            Some("http://localhost:8000/uploads/t.jpg".to_owned()),
            resolve(&reference, Representation::Thumbnail(400), ORIGIN)
        );
        assert_eq!(
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_owned()),
            resolve(&reference, Representation::Embed, ORIGIN)
        );

        let reference = AssetReference::from_url("https://cdn.example.com/v.mp4")
            .with_thumbnail("https://cdn.example.com/v.jpg");
        assert_eq!(
            Some("https://cdn.example.com/v.jpg".to_owned()),
            resolve(&reference, Representation::Thumbnail(400), ORIGIN)
        );
        assert_eq!(
            Some("https://cdn.example.com/v.mp4".to_owned()),
            resolve(&reference, Representation::Direct, ORIGIN)
        );
    }

    #[test]
    fn test_relative_path() {
        let reference = AssetReference::from_url("/uploads/x.jpg");
        assert_eq!(
            Some(format!("{}/uploads/x.jpg", ORIGIN)),
            resolve(&reference, Representation::Direct, ORIGIN)
        );
        assert_eq!(
            Some("http://localhost:8000/uploads/x.jpg".to_owned()),
            resolve(&reference, Representation::Direct, "http://localhost:8000/")
        );
        assert_eq!(
            Some("http://localhost:8000/uploads/x.jpg".to_owned()),
            resolve(
                &AssetReference::from_url("uploads/x.jpg"),
                Representation::Thumbnail(800),
                ORIGIN
            )
        );
    }

    #[test]
    fn test_scheme_relative_override_is_prefixed() {
        let reference = AssetReference::from_url("/uploads/a.mp4")
            .with_thumbnail("//cdn.example.com/a.jpg");
        assert_eq!(
            Some("http://localhost:8000//cdn.example.com/a.jpg".to_owned()),
            resolve(&reference, Representation::Thumbnail(400), ORIGIN)
        );
    }

    #[test]
    fn test_youtube() {
        let reference = AssetReference::from_url("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_owned()),
            resolve(&reference, Representation::Embed, ORIGIN)
        );
        assert_eq!(
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_owned()),
            resolve(&reference, Representation::Direct, ORIGIN)
        );
        assert_eq!(
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_owned()),
            resolve(&reference, Representation::Thumbnail(400), ORIGIN)
        );

        let broken = AssetReference::from_url("https://www.youtube.com/@channel");
        for representation in all_representations() {
            assert_eq!(None, resolve(&broken, representation, ORIGIN));
        }
    }

    #[test]
    fn test_drive_url_and_bare_id() {
        let photo = AssetReference::from_url("https://drive.google.com/open?id=9Zk");
        assert_eq!(
            Some("https://drive.google.com/thumbnail?id=9Zk&sz=w800".to_owned()),
            resolve(&photo, Representation::Thumbnail(800), ORIGIN)
        );

        let bare = AssetReference::from_url("9Zk");
        assert_eq!(
            Some("https://drive.google.com/file/d/9Zk/preview".to_owned()),
            resolve(&bare, Representation::Embed, ORIGIN)
        );

        let no_id = AssetReference::from_url("https://drive.google.com/drive/my-drive");
        for representation in all_representations() {
            assert_eq!(None, resolve(&no_id, representation, ORIGIN));
        }
    }

    #[test]
    fn test_empty_reference() {
        let references = [
            AssetReference::default(),
            AssetReference {
                explicit_id: Some(" ".into()),
                primary_url: Some("".into()),
                thumbnail_override_url: Some("\t".into()),
                kind_hint: Some(MediaKind::YouTube),
            },
        ];
        for reference in &references {
            for representation in all_representations() {
                assert_eq!(None, resolve(reference, representation, ORIGIN));
            }
            assert!(!is_embeddable(reference));
            assert_eq!(ResolvedMedia::default(), resolve_all(reference, 800, ORIGIN));
        }
    }

    #[test]
    fn test_resolve_leaves_reference_untouched() {
        let reference = AssetReference::from_url(" https://youtu.be/dQw4w9WgXcQ ")
            .with_kind(MediaKind::YouTube);
        let before = reference.clone();
        let _ = resolve_all(&reference, 400, ORIGIN);
        assert_eq!(before, reference);
    }

    #[test]
    fn test_embeddable() {
        assert!(is_embeddable(&AssetReference::from_url(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        )));
        assert!(is_embeddable(&AssetReference::from_url(
            "https://drive.google.com/file/d/ABC123/view"
        )));
        assert!(is_embeddable(
            &AssetReference::from_url("https://cdn.example.com/v.mp4").with_explicit_id("F1")
        ));
        assert!(is_embeddable(
            &AssetReference::from_url("ABC123").with_kind(MediaKind::GDrive)
        ));

        assert!(!is_embeddable(&AssetReference::from_url(
            "https://cdn.example.com/v.mp4"
        )));
        assert!(!is_embeddable(&AssetReference::from_url("/uploads/v.mp4")));
        assert!(!is_embeddable(&AssetReference::from_url("ABC123")));
        assert!(!is_embeddable(
            &AssetReference::from_url("ABC123").with_kind(MediaKind::Upload)
        ));
    }

    #[test]
    fn test_resolve_all() {
        let media = resolve_all(
            &AssetReference::from_url("https://drive.google.com/file/d/ABC123/view"),
            640,
            ORIGIN,
        );
        assert_eq!(
            ResolvedMedia {
                direct: Some("https://drive.google.com/uc?export=view&id=ABC123".into()),
                thumbnail: Some("https://drive.google.com/thumbnail?id=ABC123&sz=w640".into()),
                embed: Some("https://drive.google.com/file/d/ABC123/preview".into()),
                embeddable: true,
            },
            media
        );
    }
}
