// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Value objects shared by the navigation state, the gesture interpreter
//! and the configuration layer. Independent of any presentation framework.

pub mod newtypes;

pub use newtypes::{CacheCapacity, CloseDelay, CrossFadeDelay, VisibleThumbnails};

/// Direction of a navigation step through a media list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move to the following item, wrapping to the first.
    Next,
    /// Move to the preceding item, wrapping to the last.
    Previous,
}

impl Direction {
    /// Returns the index reached from `current` in a list of `len` items,
    /// wrapping at both ends. Returns `None` for an empty list.
    #[must_use]
    pub fn step(self, current: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let current = current.min(len - 1);
        Some(match self {
            Direction::Next => (current + 1) % len,
            Direction::Previous => (current + len - 1) % len,
        })
    }
}
