// SPDX-License-Identifier: MPL-2.0
//! Single-shot, cancellable timers identified by generation tokens.
//!
//! The gallery never sleeps itself. Arming a slot hands out a token; the host
//! schedules a wake-up and delivers the token back. Only the token of the
//! most recent arming is accepted, so re-arming or cancelling makes every
//! earlier delivery a no-op.

/// Named timers owned by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Swaps the displayed image after the fade-out.
    CrossFade,
    /// Clears the modal after the exit transition.
    Close,
    /// Flips the modal from its entering state to animated-in.
    EnterFrame,
}

/// Identifies one arming of a timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    kind: TimerKind,
    generation: u64,
}

impl TimerToken {
    #[must_use]
    pub fn kind(self) -> TimerKind {
        self.kind
    }
}

/// A slot holding at most one pending timer.
#[derive(Debug, Clone)]
pub struct TimerSlot {
    kind: TimerKind,
    generation: u64,
    pending: bool,
}

impl TimerSlot {
    #[must_use]
    pub fn new(kind: TimerKind) -> Self {
        Self {
            kind,
            generation: 0,
            pending: false,
        }
    }

    /// Arms the slot, cancelling any pending timer, and returns the new token.
    pub fn arm(&mut self) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        TimerToken {
            kind: self.kind,
            generation: self.generation,
        }
    }

    /// Cancels the pending timer, if any.
    pub fn cancel(&mut self) {
        if self.pending {
            self.generation = self.generation.wrapping_add(1);
            self.pending = false;
        }
    }

    /// Accepts a delivered token. Returns true only for the live token, and
    /// disarms the slot when it does.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.pending && token.kind == self.kind && token.generation == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_accepts_live_token_once() {
        let mut slot = TimerSlot::new(TimerKind::CrossFade);
        let token = slot.arm();
        assert!(slot.is_pending());
        assert!(slot.fire(token));
        assert!(!slot.is_pending());
        assert!(!slot.fire(token));
    }

    #[test]
    fn rearming_invalidates_previous_token() {
        let mut slot = TimerSlot::new(TimerKind::CrossFade);
        let first = slot.arm();
        let second = slot.arm();
        assert!(!slot.fire(first));
        assert!(slot.is_pending());
        assert!(slot.fire(second));
    }

    #[test]
    fn cancel_invalidates_token() {
        let mut slot = TimerSlot::new(TimerKind::Close);
        let token = slot.arm();
        slot.cancel();
        assert!(!slot.is_pending());
        assert!(!slot.fire(token));
    }

    #[test]
    fn tokens_from_other_slots_are_rejected() {
        let mut fade = TimerSlot::new(TimerKind::CrossFade);
        let mut close = TimerSlot::new(TimerKind::Close);
        let close_token = close.arm();
        fade.arm();
        assert!(!fade.fire(close_token));
        assert_eq!(close_token.kind(), TimerKind::Close);
    }
}
