// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for gallery tuning values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Thumbnail Window Bounds
// =============================================================================

/// Visible thumbnail count bounds.
pub mod thumbnail_bounds {
    /// Minimum number of thumbnails rendered at once.
    pub const MIN: usize = 1;
    /// Maximum number of thumbnails rendered at once.
    pub const MAX: usize = 12;
    /// Default number of thumbnails rendered at once.
    pub const DEFAULT: usize = 5;
}

/// Number of thumbnails visible in the strip, guaranteed to be within 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleThumbnails(usize);

impl VisibleThumbnails {
    /// Creates a new value, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(thumbnail_bounds::MIN, thumbnail_bounds::MAX))
    }

    /// Returns the raw count.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns the largest valid window offset for a list of `total` images.
    #[must_use]
    pub fn max_offset(self, total: usize) -> usize {
        total.saturating_sub(self.0)
    }
}

impl Default for VisibleThumbnails {
    fn default() -> Self {
        Self(thumbnail_bounds::DEFAULT)
    }
}

// =============================================================================
// Transition Delay Bounds
// =============================================================================

/// Transition delay bounds, in milliseconds.
pub mod delay_bounds {
    /// Maximum delay for any gallery transition.
    pub const MAX_MS: u64 = 2000;
    /// Default cross-fade delay between two images.
    pub const DEFAULT_CROSS_FADE_MS: u64 = 180;
    /// Default delay between the close request and the state reset.
    pub const DEFAULT_CLOSE_MS: u64 = 360;
}

/// Delay between fading out the displayed image and fading in the selected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossFadeDelay(u64);

impl CrossFadeDelay {
    /// Creates a new delay, clamping to 0–2000 ms.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.min(delay_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for CrossFadeDelay {
    fn default() -> Self {
        Self(delay_bounds::DEFAULT_CROSS_FADE_MS)
    }
}

/// Delay given to the exit transition before the modal state is cleared.
///
/// A zero delay closes immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseDelay(u64);

impl CloseDelay {
    /// Creates a new delay, clamping to 0–2000 ms.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.min(delay_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true when closing should not wait for an exit transition.
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0 == 0
    }
}

impl Default for CloseDelay {
    fn default() -> Self {
        Self(delay_bounds::DEFAULT_CLOSE_MS)
    }
}

// =============================================================================
// Cache Capacity
// =============================================================================

/// Image cache capacity bounds (number of decoded handles).
pub mod cache_bounds {
    /// Minimum number of cached images.
    pub const MIN: usize = 8;
    /// Maximum number of cached images.
    pub const MAX: usize = 512;
    /// Default number of cached images.
    pub const DEFAULT: usize = 64;
}

/// Capacity of the image handle cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheCapacity(usize);

impl CacheCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(cache_bounds::MIN, cache_bounds::MAX))
    }

    /// Returns the raw capacity.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for CacheCapacity {
    fn default() -> Self {
        Self(cache_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_thumbnails_clamps_to_valid_range() {
        assert_eq!(VisibleThumbnails::new(0).value(), thumbnail_bounds::MIN);
        assert_eq!(VisibleThumbnails::new(100).value(), thumbnail_bounds::MAX);
        assert_eq!(VisibleThumbnails::new(7).value(), 7);
        assert_eq!(VisibleThumbnails::default().value(), 5);
    }

    #[test]
    fn max_offset_never_underflows() {
        let visible = VisibleThumbnails::default();
        assert_eq!(visible.max_offset(0), 0);
        assert_eq!(visible.max_offset(3), 0);
        assert_eq!(visible.max_offset(5), 0);
        assert_eq!(visible.max_offset(9), 4);
    }

    #[test]
    fn delays_clamp_and_convert() {
        assert_eq!(CrossFadeDelay::default().millis(), 180);
        assert_eq!(CloseDelay::default().millis(), 360);
        assert_eq!(CrossFadeDelay::from_millis(10_000).millis(), delay_bounds::MAX_MS);
        assert_eq!(
            CloseDelay::from_millis(250).as_duration(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn zero_close_delay_is_immediate() {
        assert!(CloseDelay::from_millis(0).is_immediate());
        assert!(!CloseDelay::default().is_immediate());
    }

    #[test]
    fn cache_capacity_clamps_to_valid_range() {
        assert_eq!(CacheCapacity::new(0).value(), cache_bounds::MIN);
        assert_eq!(CacheCapacity::new(10_000).value(), cache_bounds::MAX);
        assert_eq!(CacheCapacity::default().value(), cache_bounds::DEFAULT);
    }
}
