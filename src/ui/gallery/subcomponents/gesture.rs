// SPDX-License-Identifier: MPL-2.0
//! Touch gesture interpreter for swipe navigation.
//!
//! Classification is split into two pure functions, [`classify_move`] and
//! [`classify_release`], so the thresholds can be tested without an event
//! loop. [`State`] wraps them with single-finger tracking.
//!
//! Horizontal intent needs a clear majority over vertical movement (3:1
//! while moving, 2.5:1 at release) so that scrolling the page on a touch
//! screen does not flip images by accident.

use crate::app::config::defaults;
use crate::domain::gallery::Direction;
use iced::touch::Finger;
use iced::Point;
use std::time::{Duration, Instant};

/// Thresholds used to interpret a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Movement (px) needed on an axis before intent is locked.
    pub lock_distance: f32,
    /// `dx / dy` ratio that locks horizontal intent while moving.
    pub horizontal_lock_ratio: f32,
    /// `dy / dx` ratio that locks vertical intent while moving.
    pub vertical_lock_ratio: f32,
    /// `|dx| / dy` ratio that counts as horizontal at release.
    pub release_ratio: f32,
    /// Gestures shorter than this are flicks and use `flick_distance`.
    pub flick_window: Duration,
    /// Minimum travel (px) for a flick.
    pub flick_distance: f32,
    /// Minimum travel (px) for a deliberate drag.
    pub drag_distance: f32,
    /// Velocity (px/ms) that qualifies a swipe below the distance floor.
    pub min_velocity: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            lock_distance: defaults::DEFAULT_LOCK_DISTANCE_PX,
            horizontal_lock_ratio: defaults::DEFAULT_HORIZONTAL_LOCK_RATIO,
            vertical_lock_ratio: defaults::DEFAULT_VERTICAL_LOCK_RATIO,
            release_ratio: defaults::DEFAULT_RELEASE_RATIO,
            flick_window: Duration::from_millis(defaults::DEFAULT_FLICK_WINDOW_MS),
            flick_distance: defaults::DEFAULT_FLICK_DISTANCE_PX,
            drag_distance: defaults::DEFAULT_DRAG_DISTANCE_PX,
            min_velocity: defaults::DEFAULT_MIN_VELOCITY,
        }
    }
}

/// Intent of an in-progress gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    /// Not enough movement to decide.
    #[default]
    Undecided,
    /// Media swipe; native scrolling is suppressed.
    Horizontal,
    /// Page scroll; left to the scroll container.
    Vertical,
}

/// Which media list a gesture navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSurface {
    Images,
    Videos,
}

/// Classifies the movement from `start` to `current`.
#[must_use]
pub fn classify_move(start: Point, current: Point, config: &GestureConfig) -> Intent {
    let dx = (current.x - start.x).abs();
    let dy = (current.y - start.y).abs();

    if dx > config.lock_distance && dx > config.horizontal_lock_ratio * dy {
        Intent::Horizontal
    } else if dy > config.lock_distance && dy > config.vertical_lock_ratio * dx {
        Intent::Vertical
    } else {
        Intent::Undecided
    }
}

/// Decides whether a finished gesture is a swipe, and in which direction.
///
/// Dragging content to the left reveals the next item.
#[must_use]
pub fn classify_release(
    start: Point,
    end: Point,
    duration: Duration,
    confirmed_horizontal: bool,
    config: &GestureConfig,
) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = (start.y - end.y).abs();
    let distance = dx.abs();

    let is_horizontal = confirmed_horizontal || distance > config.release_ratio * dy;
    if !is_horizontal {
        return None;
    }

    let min_distance = if duration < config.flick_window {
        config.flick_distance
    } else {
        config.drag_distance
    };
    let elapsed_ms = (duration.as_secs_f32() * 1000.0).max(1.0);
    let velocity = distance / elapsed_ms;

    if distance > min_distance || velocity > config.min_velocity {
        if dx < 0.0 {
            Some(Direction::Next)
        } else if dx > 0.0 {
            Some(Direction::Previous)
        } else {
            None
        }
    } else {
        None
    }
}

#[derive(Debug, Clone)]
struct Tracking {
    finger: Finger,
    surface: GestureSurface,
    start: Point,
    started_at: Instant,
    intent: Intent,
}

/// Gesture sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    config: GestureConfig,
    tracking: Option<Tracking>,
    fingers_down: usize,
}

/// Messages for the gesture sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A finger touched the media pane.
    TouchStarted {
        finger: Finger,
        position: Point,
        at: Instant,
        surface: GestureSurface,
    },
    /// A finger moved.
    TouchMoved { finger: Finger, position: Point },
    /// A finger was lifted.
    TouchEnded {
        finger: Finger,
        position: Point,
        at: Instant,
    },
    /// The platform cancelled the touch.
    TouchCancelled { finger: Finger },
}

/// Effects produced by gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The gesture is a horizontal swipe; the page must not scroll.
    SuppressScroll,
    /// A swipe completed.
    Navigate {
        surface: GestureSurface,
        direction: Direction,
    },
}

impl State {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            tracking: None,
            fingers_down: 0,
        }
    }

    /// Handle a gesture message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::TouchStarted {
                finger,
                position,
                at,
                surface,
            } => {
                self.fingers_down += 1;
                if self.fingers_down > 1 {
                    // Multi-touch (pinch, two-finger scroll) is not a swipe.
                    self.tracking = None;
                    return Effect::None;
                }
                self.tracking = Some(Tracking {
                    finger,
                    surface,
                    start: position,
                    started_at: at,
                    intent: Intent::Undecided,
                });
                Effect::None
            }
            Message::TouchMoved { finger, position } => {
                let Some(tracking) = self.tracking.as_mut().filter(|t| t.finger == finger) else {
                    return Effect::None;
                };
                match classify_move(tracking.start, position, &self.config) {
                    Intent::Horizontal => {
                        tracking.intent = Intent::Horizontal;
                        Effect::SuppressScroll
                    }
                    Intent::Vertical => {
                        tracking.intent = Intent::Vertical;
                        Effect::None
                    }
                    Intent::Undecided => Effect::None,
                }
            }
            Message::TouchEnded {
                finger,
                position,
                at,
            } => {
                self.fingers_down = self.fingers_down.saturating_sub(1);
                let Some(tracking) = self.tracking.take() else {
                    return Effect::None;
                };
                if tracking.finger != finger {
                    // Another finger lifted; the tracked gesture is over too.
                    return Effect::None;
                }
                let duration = at.saturating_duration_since(tracking.started_at);
                let confirmed = tracking.intent == Intent::Horizontal;
                match classify_release(tracking.start, position, duration, confirmed, &self.config)
                {
                    Some(direction) => Effect::Navigate {
                        surface: tracking.surface,
                        direction,
                    },
                    None => Effect::None,
                }
            }
            Message::TouchCancelled { finger } => {
                self.fingers_down = self.fingers_down.saturating_sub(1);
                if self.tracking.as_ref().is_some_and(|t| t.finger == finger) {
                    self.tracking = None;
                }
                Effect::None
            }
        }
    }

    /// Drops any in-progress gesture (used when the modal closes).
    pub fn reset(&mut self) {
        self.tracking = None;
        self.fingers_down = 0;
    }

    /// Returns whether a single-finger gesture is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Returns the current intent of the tracked gesture.
    #[must_use]
    pub fn intent(&self) -> Option<Intent> {
        self.tracking.as_ref().map(|t| t.intent)
    }
}
