// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

/// Activity log capacity bounds, in events.
pub mod buffer_capacity_bounds {
    /// Smallest log that still covers one gallery session.
    pub const MIN: usize = 50;
    /// Largest log kept in memory.
    pub const MAX: usize = 5000;
    /// Default log size.
    pub const DEFAULT: usize = 500;
}

/// Number of events the activity log keeps before evicting the oldest.
///
/// Always within 50–5000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}
