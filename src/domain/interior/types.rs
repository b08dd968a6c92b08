// SPDX-License-Identifier: MPL-2.0
//! Interior showcase records and the media items derived from them.
//!
//! These types represent pure data without any presentation dependencies.
//! Deserialization lives in [`crate::media::source`], which normalizes the
//! loosely typed JSON rows into these structures.

/// Stable identifier of an interior, assigned by the catalog backend.
pub type InteriorId = i64;

/// An attachment shown in the metadata panel (plans, specifications, ...).
///
/// Documents are listed but never part of the viewer's navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// Public URL of the file.
    pub url: String,
    /// Optional human readable name.
    pub name: Option<String>,
}

impl DocumentFile {
    /// Returns the display label: the explicit name, or the last URL segment.
    #[must_use]
    pub fn label(&self) -> &str {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name;
        }
        self.url
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.url)
    }
}

/// A showcased client project.
///
/// The record is read-only for the gallery: the viewer derives its media
/// lists from it and never mutates it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Interior {
    pub id: InteriorId,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    /// Primary image URL.
    pub cover_image: Option<String>,
    /// Smaller variant of the cover image.
    pub cover_preview: Option<String>,
    /// Ordered gallery image URLs.
    pub gallery_images: Vec<String>,
    /// Preview URLs index-aligned with `gallery_images`. May be shorter and
    /// may contain gaps.
    pub gallery_previews: Vec<Option<String>>,
    /// Ordered video URLs, independent from the image sequence.
    pub video_urls: Vec<String>,
    pub document_files: Vec<DocumentFile>,
    pub location: Option<String>,
    pub area: Option<String>,
    pub style: Option<String>,
}

impl Interior {
    /// Creates an interior with only an id and a title.
    #[must_use]
    pub fn new(id: InteriorId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns the best URL to use for the grid tile: the cover preview, the
    /// cover itself, or the first gallery image.
    #[must_use]
    pub fn tile_image(&self) -> Option<&str> {
        self.cover_preview
            .as_deref()
            .or(self.cover_image.as_deref())
            .or_else(|| self.gallery_images.first().map(String::as_str))
    }
}

/// A single navigable entry of an interior's gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaItem {
    /// Still image with an optional faster-loading preview.
    Image {
        url: String,
        preview_url: Option<String>,
    },
    /// Video, played by an external player.
    Video { url: String },
}

impl MediaItem {
    /// Returns the full resolution URL.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            MediaItem::Image { url, .. } | MediaItem::Video { url } => url,
        }
    }

    /// Returns the URL to use for thumbnails. Falls back to the full URL
    /// when no preview exists.
    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        match self {
            MediaItem::Image {
                url, preview_url, ..
            } => preview_url.as_deref().unwrap_or(url),
            MediaItem::Video { url } => url,
        }
    }

    /// Returns whether this item is a still image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self, MediaItem::Image { .. })
    }
}
