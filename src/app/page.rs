// SPDX-License-Identifier: MPL-2.0
//! The tile page behind the gallery modal.

use crate::ui::gallery::subcomponents::scroll_lock::{Overflow, ScrollSurface};

/// Scroll state of the interior grid.
///
/// The grid scrollable is only rendered as scrollable while the overflow is
/// not [`Overflow::Hidden`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSurface {
    overflow: Overflow,
}

impl PageSurface {
    #[must_use]
    pub fn new(overflow: Overflow) -> Self {
        Self { overflow }
    }

    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.overflow != Overflow::Hidden
    }
}

impl ScrollSurface for PageSurface {
    fn overflow(&self) -> Overflow {
        self.overflow
    }

    fn set_overflow(&mut self, overflow: Overflow) {
        self.overflow = overflow;
    }
}
