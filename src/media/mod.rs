// SPDX-License-Identifier: MPL-2.0
//! Media sources for the gallery.
//!
//! This module derives navigable media lists from interiors, loads the
//! interior list itself, and fetches and caches image bytes by URL.

pub mod cache;
pub mod catalog;
pub mod fetch;
pub mod source;

// Re-export commonly used types
pub use cache::ImageCache;
pub use catalog::MediaCatalog;
pub use fetch::fetch_image;
pub use source::{load_interiors, InteriorSource};
