// SPDX-License-Identifier: MPL-2.0
//! Derives the navigable media lists of an interior.
//!
//! The image list is the cover (when present) followed by the gallery images,
//! each paired by position with its preview. The video list is independent
//! and navigated with its own index.

use crate::domain::interior::{DocumentFile, Interior, MediaItem};

/// Ordered image and video lists derived from a single [`Interior`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaCatalog {
    images: Vec<MediaItem>,
    videos: Vec<MediaItem>,
    documents: Vec<DocumentFile>,
}

impl MediaCatalog {
    /// Builds the catalog for an interior.
    ///
    /// Never fails: absent or empty sources produce empty lists, and a
    /// preview missing at a given position falls back to the full URL.
    #[must_use]
    pub fn from_interior(interior: &Interior) -> Self {
        let mut images = Vec::with_capacity(interior.gallery_images.len() + 1);

        if let Some(cover) = non_empty(interior.cover_image.as_deref()) {
            images.push(MediaItem::Image {
                url: cover.to_string(),
                preview_url: non_empty(interior.cover_preview.as_deref()).map(str::to_string),
            });
        }

        for (position, url) in interior.gallery_images.iter().enumerate() {
            let Some(url) = non_empty(Some(url)) else {
                continue;
            };
            let preview = interior
                .gallery_previews
                .get(position)
                .and_then(|p| non_empty(p.as_deref()))
                .map(str::to_string);
            images.push(MediaItem::Image {
                url: url.to_string(),
                preview_url: preview,
            });
        }

        let videos = interior
            .video_urls
            .iter()
            .filter_map(|url| non_empty(Some(url)))
            .map(|url| MediaItem::Video {
                url: url.to_string(),
            })
            .collect();

        Self {
            images,
            videos,
            documents: interior.document_files.clone(),
        }
    }

    /// Returns the ordered image items.
    #[must_use]
    pub fn images(&self) -> &[MediaItem] {
        &self.images
    }

    /// Returns the ordered video items.
    #[must_use]
    pub fn videos(&self) -> &[MediaItem] {
        &self.videos
    }

    /// Returns the attached documents.
    #[must_use]
    pub fn documents(&self) -> &[DocumentFile] {
        &self.documents
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&MediaItem> {
        self.images.get(index)
    }

    #[must_use]
    pub fn video(&self, index: usize) -> Option<&MediaItem> {
        self.videos.get(index)
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// Returns true when there is nothing to show in the viewer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.videos.is_empty()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
