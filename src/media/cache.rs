// SPDX-License-Identifier: MPL-2.0
//! Image handle cache keyed by URL.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used handles are evicted first
//! - **Count-bounded**: Capacity comes from [`CacheCapacity`]
//! - **In-flight tracking**: A URL being fetched is marked `Loading` so the
//!   same image is never requested twice
//! - **Sticky failures**: A failed URL stays `Failed` for the session; the
//!   viewer shows a placeholder instead of retrying

use crate::domain::gallery::CacheCapacity;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;

/// State of a cached URL.
#[derive(Debug, Clone)]
pub enum Entry {
    /// A fetch is in flight.
    Loading,
    /// The image is available.
    Ready(image::Handle),
    /// The fetch failed.
    Failed,
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub failures: u64,
}

/// LRU cache of decoded image handles.
pub struct ImageCache {
    entries: LruCache<String, Entry>,
    stats: CacheStats,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.entries.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl ImageCache {
    /// Creates a cache with the given capacity.
    #[must_use]
    pub fn new(capacity: CacheCapacity) -> Self {
        let capacity = NonZeroUsize::new(capacity.value()).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Marks the given URLs as loading and returns those that must be fetched.
    ///
    /// URLs already loading, ready or failed are skipped, as are duplicates
    /// inside `urls`. Ready entries are promoted in LRU order.
    pub fn request<'a, I>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut to_fetch = Vec::new();
        for url in urls {
            if url.is_empty() {
                continue;
            }
            if self.entries.get(url).is_some() {
                self.stats.hits += 1;
                continue;
            }
            self.stats.misses += 1;
            if self.entries.push(url.to_string(), Entry::Loading).is_some() {
                self.stats.evictions += 1;
            }
            to_fetch.push(url.to_string());
        }
        to_fetch
    }

    /// Stores the outcome of a fetch.
    pub fn complete(&mut self, url: String, handle: Option<image::Handle>) {
        let entry = match handle {
            Some(handle) => Entry::Ready(handle),
            None => {
                self.stats.failures += 1;
                Entry::Failed
            }
        };
        if let Some((evicted, _)) = self.entries.push(url.clone(), entry) {
            if evicted != url {
                self.stats.evictions += 1;
            }
        }
    }

    /// Returns the handle for a URL without touching LRU order.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&image::Handle> {
        match self.entries.peek(url) {
            Some(Entry::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Returns the entry for a URL without touching LRU order.
    #[must_use]
    pub fn entry(&self, url: &str) -> Option<&Entry> {
        self.entries.peek(url)
    }

    /// Returns whether the URL failed to load.
    #[must_use]
    pub fn is_failed(&self, url: &str) -> bool {
        matches!(self.entries.peek(url), Some(Entry::Failed))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![0u8; 4])
    }

    #[test]
    fn request_returns_only_unknown_urls() {
        let mut cache = ImageCache::new(CacheCapacity::default());
        let first = cache.request(["a.jpg", "b.jpg", "a.jpg"]);
        assert_eq!(first, vec!["a.jpg".to_string(), "b.jpg".to_string()]);

        let second = cache.request(["a.jpg", "c.jpg"]);
        assert_eq!(second, vec!["c.jpg".to_string()]);
    }

    #[test]
    fn complete_stores_ready_handles() {
        let mut cache = ImageCache::new(CacheCapacity::default());
        cache.request(["a.jpg"]);
        assert!(cache.handle("a.jpg").is_none());

        cache.complete("a.jpg".into(), Some(handle()));
        assert!(cache.handle("a.jpg").is_some());
        assert!(matches!(cache.entry("a.jpg"), Some(Entry::Ready(_))));
    }

    #[test]
    fn failures_are_not_requested_again() {
        let mut cache = ImageCache::new(CacheCapacity::default());
        cache.request(["broken.jpg"]);
        cache.complete("broken.jpg".into(), None);

        assert!(cache.is_failed("broken.jpg"));
        assert!(cache.request(["broken.jpg"]).is_empty());
        assert_eq!(cache.stats().failures, 1);
    }

    #[test]
    fn least_recently_used_entries_are_evicted() {
        let mut cache = ImageCache::new(CacheCapacity::new(0));
        let capacity = CacheCapacity::new(0).value();
        let urls: Vec<String> = (0..=capacity).map(|i| format!("{i}.jpg")).collect();
        cache.request(urls.iter().map(String::as_str));

        assert_eq!(cache.len(), capacity);
        assert!(cache.entry("0.jpg").is_none());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn empty_urls_are_ignored() {
        let mut cache = ImageCache::new(CacheCapacity::default());
        assert!(cache.request([""]).is_empty());
        assert!(cache.is_empty());
    }
}
