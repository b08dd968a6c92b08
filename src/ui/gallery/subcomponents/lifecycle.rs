// SPDX-License-Identifier: MPL-2.0
//! Modal lifecycle: phases, visual transition states and the timers that
//! move between them.
//!
//! ```text
//!          open                enter frame
//! Closed ─────────▶ Opening ─────────────▶ Open
//!   ▲                  │                    │
//!   │  close timer     │ close              │ close
//!   └──────────── Closing ◀─────────────────┘
//! ```
//!
//! `open` is accepted from every phase, including `Closing`, where it
//! cancels the pending close.

use super::timer::{TimerKind, TimerSlot, TimerToken};
use crate::domain::gallery::CloseDelay;
use iced::keyboard::{self, key};
use std::time::Duration;

/// Lifecycle phase of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Visual state driving the modal's enter and exit transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visual {
    #[default]
    Hidden,
    /// Rendered in its initial, transparent state.
    Entering,
    AnimatedIn,
    AnimatedOut,
}

/// Keyboard shortcuts understood by the open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl Shortcut {
    /// Maps a key press to a shortcut.
    #[must_use]
    pub fn from_key(key: &keyboard::Key) -> Option<Self> {
        match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Shortcut::Escape),
            keyboard::Key::Named(key::Named::ArrowLeft) => Some(Shortcut::ArrowLeft),
            keyboard::Key::Named(key::Named::ArrowRight) => Some(Shortcut::ArrowRight),
            _ => None,
        }
    }
}

/// Lifecycle sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    visual: Visual,
    close_delay: CloseDelay,
    enter_frame: TimerSlot,
    close: TimerSlot,
}

/// Messages for the lifecycle sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Open,
    Close,
    TimerElapsed(TimerToken),
}

/// Effects produced by lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The host must deliver `token` back after `delay`.
    Schedule { token: TimerToken, delay: Duration },
    /// The modal left the animated-out state and is now closed.
    Closed,
}

impl Default for State {
    fn default() -> Self {
        Self::new(CloseDelay::default())
    }
}

impl State {
    #[must_use]
    pub fn new(close_delay: CloseDelay) -> Self {
        Self {
            phase: Phase::Closed,
            visual: Visual::Hidden,
            close_delay,
            enter_frame: TimerSlot::new(TimerKind::EnterFrame),
            close: TimerSlot::new(TimerKind::Close),
        }
    }

    /// Handle a lifecycle message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open => {
                self.close.cancel();
                self.phase = Phase::Opening;
                self.visual = Visual::Entering;
                // Flip to animated-in on the next frame, after the entering
                // state has been rendered once.
                let token = self.enter_frame.arm();
                Effect::Schedule {
                    token,
                    delay: Duration::ZERO,
                }
            }
            Message::Close => {
                if !matches!(self.phase, Phase::Opening | Phase::Open) {
                    return Effect::None;
                }
                self.enter_frame.cancel();
                self.phase = Phase::Closing;
                self.visual = Visual::AnimatedOut;

                if self.close_delay.is_immediate() {
                    self.finish_close();
                    return Effect::Closed;
                }
                let token = self.close.arm();
                Effect::Schedule {
                    token,
                    delay: self.close_delay.as_duration(),
                }
            }
            Message::TimerElapsed(token) => match token.kind() {
                TimerKind::EnterFrame => {
                    if self.enter_frame.fire(token) && self.phase == Phase::Opening {
                        self.phase = Phase::Open;
                        self.visual = Visual::AnimatedIn;
                    }
                    Effect::None
                }
                TimerKind::Close => {
                    if self.close.fire(token) && self.phase == Phase::Closing {
                        self.finish_close();
                        Effect::Closed
                    } else {
                        Effect::None
                    }
                }
                TimerKind::CrossFade => Effect::None,
            },
        }
    }

    fn finish_close(&mut self) {
        self.phase = Phase::Closed;
        self.visual = Visual::Hidden;
    }

    /// Cancels every pending lifecycle timer without changing the phase.
    pub fn cancel_timers(&mut self) {
        self.enter_frame.cancel();
        self.close.cancel();
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn visual(&self) -> Visual {
        self.visual
    }

    /// Whether the modal is shown at all (any phase but `Closed`).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Keyboard shortcuts are honored only once fully open.
    #[must_use]
    pub fn accepts_shortcuts(&self) -> bool {
        self.phase == Phase::Open
    }

    #[must_use]
    pub fn close_delay(&self) -> CloseDelay {
        self.close_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(effect: Effect) -> TimerToken {
        match effect {
            Effect::Schedule { token, .. } => token,
            other => panic!("expected Schedule, got {other:?}"),
        }
    }

    #[test]
    fn open_then_frame_reaches_open() {
        let mut state = State::default();
        let token = scheduled(state.handle(Message::Open));
        assert_eq!(state.phase(), Phase::Opening);
        assert_eq!(state.visual(), Visual::Entering);
        assert_eq!(token.kind(), TimerKind::EnterFrame);

        state.handle(Message::TimerElapsed(token));
        assert_eq!(state.phase(), Phase::Open);
        assert_eq!(state.visual(), Visual::AnimatedIn);
        assert!(state.accepts_shortcuts());
    }

    #[test]
    fn close_waits_for_delay() {
        let mut state = State::default();
        let frame = scheduled(state.handle(Message::Open));
        state.handle(Message::TimerElapsed(frame));

        let effect = state.handle(Message::Close);
        let Effect::Schedule { token, delay } = effect else {
            panic!("expected Schedule");
        };
        assert_eq!(delay, Duration::from_millis(360));
        assert_eq!(state.phase(), Phase::Closing);
        assert_eq!(state.visual(), Visual::AnimatedOut);
        assert!(!state.accepts_shortcuts());

        assert_eq!(state.handle(Message::TimerElapsed(token)), Effect::Closed);
        assert_eq!(state.phase(), Phase::Closed);
        assert_eq!(state.visual(), Visual::Hidden);
    }

    #[test]
    fn zero_delay_closes_synchronously() {
        let mut state = State::new(CloseDelay::from_millis(0));
        state.handle(Message::Open);
        assert_eq!(state.handle(Message::Close), Effect::Closed);
        assert_eq!(state.phase(), Phase::Closed);
    }

    #[test]
    fn close_when_closed_or_closing_is_noop() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Close), Effect::None);

        state.handle(Message::Open);
        let first = scheduled(state.handle(Message::Close));
        assert_eq!(state.handle(Message::Close), Effect::None);

        // The original close timer is still the live one.
        assert_eq!(state.handle(Message::TimerElapsed(first)), Effect::Closed);
    }

    #[test]
    fn close_during_opening_cancels_enter_frame() {
        let mut state = State::default();
        let frame = scheduled(state.handle(Message::Open));
        state.handle(Message::Close);

        state.handle(Message::TimerElapsed(frame));
        assert_eq!(state.phase(), Phase::Closing);
    }

    #[test]
    fn reopen_while_closing_cancels_pending_close() {
        let mut state = State::default();
        let frame = scheduled(state.handle(Message::Open));
        state.handle(Message::TimerElapsed(frame));
        let close = scheduled(state.handle(Message::Close));

        let frame = scheduled(state.handle(Message::Open));
        assert_eq!(state.handle(Message::TimerElapsed(close)), Effect::None);
        assert_eq!(state.phase(), Phase::Opening);

        state.handle(Message::TimerElapsed(frame));
        assert_eq!(state.phase(), Phase::Open);
    }

    #[test]
    fn shortcuts_map_named_keys() {
        assert_eq!(
            Shortcut::from_key(&keyboard::Key::Named(key::Named::Escape)),
            Some(Shortcut::Escape)
        );
        assert_eq!(
            Shortcut::from_key(&keyboard::Key::Named(key::Named::ArrowRight)),
            Some(Shortcut::ArrowRight)
        );
        assert_eq!(
            Shortcut::from_key(&keyboard::Key::Character("a".into())),
            None
        );
    }
}
