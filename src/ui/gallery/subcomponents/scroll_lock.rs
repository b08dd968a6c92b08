// SPDX-License-Identifier: MPL-2.0
//! Page scroll lock held while the gallery modal is visible.
//!
//! The lock remembers the overflow the page had before locking and puts
//! exactly that value back on release, so a page that was already using a
//! non-default overflow is not reset to a default.

/// Overflow behaviour of a scrollable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Scrollbars appear when content overflows.
    #[default]
    Auto,
    /// Always scrollable.
    Scroll,
    /// Content is clipped and the page cannot scroll.
    Hidden,
}

/// A surface whose scrolling can be locked.
pub trait ScrollSurface {
    fn overflow(&self) -> Overflow;
    fn set_overflow(&mut self, overflow: Overflow);
}

/// Saved state of an active scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollLock {
    saved: Option<Overflow>,
}

impl ScrollLock {
    /// Locks the surface. Locking twice keeps the first saved value.
    pub fn lock(&mut self, surface: &mut dyn ScrollSurface) {
        if self.saved.is_none() {
            self.saved = Some(surface.overflow());
        }
        surface.set_overflow(Overflow::Hidden);
    }

    /// Restores the saved overflow. Does nothing when not locked.
    pub fn release(&mut self, surface: &mut dyn ScrollSurface) {
        if let Some(previous) = self.saved.take() {
            surface.set_overflow(previous);
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.saved.is_some()
    }

    /// The overflow that will be restored on release.
    #[must_use]
    pub fn saved(&self) -> Option<Overflow> {
        self.saved
    }
}
