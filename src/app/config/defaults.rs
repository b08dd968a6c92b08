// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Thumbnail window and transition timing
//! - **Gesture**: Swipe recognition thresholds
//! - **Media**: Image cache size

use crate::domain::gallery::newtypes::{cache_bounds, delay_bounds, thumbnail_bounds};

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of thumbnails visible in the strip.
pub const DEFAULT_VISIBLE_THUMBNAILS: usize = thumbnail_bounds::DEFAULT;

/// Default cross-fade delay between two images (milliseconds).
pub const DEFAULT_CROSS_FADE_MS: u64 = delay_bounds::DEFAULT_CROSS_FADE_MS;

/// Default delay before a closing modal is cleared (milliseconds).
/// Zero closes immediately, without an exit transition.
pub const DEFAULT_CLOSE_DELAY_MS: u64 = delay_bounds::DEFAULT_CLOSE_MS;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Movement (px) on an axis before a touch gesture is classified.
pub const DEFAULT_LOCK_DISTANCE_PX: f32 = 8.0;

/// Minimum lock distance (px).
pub const MIN_LOCK_DISTANCE_PX: f32 = 1.0;

/// Maximum lock distance (px).
pub const MAX_LOCK_DISTANCE_PX: f32 = 100.0;

/// Horizontal/vertical ratio that locks a swipe while moving.
pub const DEFAULT_HORIZONTAL_LOCK_RATIO: f32 = 3.0;

/// Vertical/horizontal ratio that locks a page scroll while moving.
pub const DEFAULT_VERTICAL_LOCK_RATIO: f32 = 2.0;

/// Horizontal/vertical ratio that counts as a swipe at release.
pub const DEFAULT_RELEASE_RATIO: f32 = 2.5;

/// Minimum axis ratio.
pub const MIN_AXIS_RATIO: f32 = 1.0;

/// Maximum axis ratio.
pub const MAX_AXIS_RATIO: f32 = 10.0;

/// Gestures shorter than this are flicks (milliseconds).
pub const DEFAULT_FLICK_WINDOW_MS: u64 = 300;

/// Minimum flick window (milliseconds).
pub const MIN_FLICK_WINDOW_MS: u64 = 50;

/// Maximum flick window (milliseconds).
pub const MAX_FLICK_WINDOW_MS: u64 = 1000;

/// Minimum travel (px) for a flick.
pub const DEFAULT_FLICK_DISTANCE_PX: f32 = 20.0;

/// Minimum travel (px) for a slower, deliberate drag.
pub const DEFAULT_DRAG_DISTANCE_PX: f32 = 35.0;

/// Smallest accepted swipe distance setting (px).
pub const MIN_SWIPE_DISTANCE_PX: f32 = 1.0;

/// Largest accepted swipe distance setting (px).
pub const MAX_SWIPE_DISTANCE_PX: f32 = 400.0;

/// Velocity (px/ms) that accepts a swipe below the distance floor.
pub const DEFAULT_MIN_VELOCITY: f32 = 0.2;

/// Minimum velocity setting (px/ms).
pub const MIN_VELOCITY: f32 = 0.01;

/// Maximum velocity setting (px/ms).
pub const MAX_VELOCITY: f32 = 5.0;

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Default number of decoded images kept in memory.
pub const DEFAULT_CACHE_ENTRIES: usize = cache_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Gallery
    assert!(DEFAULT_VISIBLE_THUMBNAILS >= thumbnail_bounds::MIN);
    assert!(DEFAULT_VISIBLE_THUMBNAILS <= thumbnail_bounds::MAX);
    assert!(DEFAULT_CROSS_FADE_MS <= delay_bounds::MAX_MS);
    assert!(DEFAULT_CLOSE_DELAY_MS <= delay_bounds::MAX_MS);

    // Gesture
    assert!(DEFAULT_LOCK_DISTANCE_PX >= MIN_LOCK_DISTANCE_PX);
    assert!(DEFAULT_LOCK_DISTANCE_PX <= MAX_LOCK_DISTANCE_PX);
    assert!(DEFAULT_HORIZONTAL_LOCK_RATIO > DEFAULT_RELEASE_RATIO);
    assert!(DEFAULT_RELEASE_RATIO > DEFAULT_VERTICAL_LOCK_RATIO);
    assert!(DEFAULT_VERTICAL_LOCK_RATIO >= MIN_AXIS_RATIO);
    assert!(DEFAULT_HORIZONTAL_LOCK_RATIO <= MAX_AXIS_RATIO);
    assert!(DEFAULT_FLICK_WINDOW_MS >= MIN_FLICK_WINDOW_MS);
    assert!(DEFAULT_FLICK_WINDOW_MS <= MAX_FLICK_WINDOW_MS);
    assert!(DEFAULT_FLICK_DISTANCE_PX < DEFAULT_DRAG_DISTANCE_PX);
    assert!(DEFAULT_FLICK_DISTANCE_PX >= MIN_SWIPE_DISTANCE_PX);
    assert!(DEFAULT_DRAG_DISTANCE_PX <= MAX_SWIPE_DISTANCE_PX);
    assert!(DEFAULT_MIN_VELOCITY >= MIN_VELOCITY);
    assert!(DEFAULT_MIN_VELOCITY <= MAX_VELOCITY);

    // Media
    assert!(DEFAULT_CACHE_ENTRIES >= cache_bounds::MIN);
    assert!(DEFAULT_CACHE_ENTRIES <= cache_bounds::MAX);
};
