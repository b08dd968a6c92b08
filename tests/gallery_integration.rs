// SPDX-License-Identifier: MPL-2.0
//! End-to-end behaviour of the gallery controller, driven through its public
//! message API the same way the application does.

use iced::touch::Finger;
use iced::Point;
use interior_gallery::domain::gallery::VisibleThumbnails;
use interior_gallery::domain::interior::Interior;
use interior_gallery::ui::gallery::subcomponents::gesture::{self, GestureSurface};
use interior_gallery::ui::gallery::subcomponents::lifecycle::{Phase, Shortcut};
use interior_gallery::ui::gallery::subcomponents::scroll_lock::{Overflow, ScrollSurface};
use interior_gallery::ui::gallery::subcomponents::timer::{TimerKind, TimerToken};
use interior_gallery::ui::gallery::{Context, Effect, Message, Settings, State};
use std::time::{Duration, Instant};

struct Page {
    overflow: Overflow,
}

impl ScrollSurface for Page {
    fn overflow(&self) -> Overflow {
        self.overflow
    }

    fn set_overflow(&mut self, overflow: Overflow) {
        self.overflow = overflow;
    }
}

struct Harness {
    gallery: State,
    interiors: Vec<Interior>,
    page: Page,
}

impl Harness {
    fn new(interiors: Vec<Interior>) -> Self {
        Self {
            gallery: State::new(Settings::default()),
            interiors,
            page: Page {
                overflow: Overflow::Auto,
            },
        }
    }

    fn send(&mut self, message: Message) -> Effect {
        let mut ctx = Context {
            interiors: &self.interiors,
            page: &mut self.page,
        };
        self.gallery.handle(message, &mut ctx)
    }

    fn selected(&self) -> usize {
        self.gallery.navigation().selected_image()
    }

    fn displayed(&self) -> usize {
        self.gallery.navigation().displayed_image()
    }

    /// Opens the interior and lets the enter frame elapse.
    fn open(&mut self, index: usize) {
        let effect = self.send(Message::Open(index));
        for token in tokens(&effect, TimerKind::EnterFrame) {
            self.send(Message::TimerElapsed(token));
        }
        assert_eq!(self.gallery.phase(), Phase::Open);
    }

    fn swipe(&mut self, from: Point, to: Point, duration: Duration) -> Effect {
        let finger = Finger(7);
        let at = Instant::now();
        self.send(Message::Gesture(gesture::Message::TouchStarted {
            finger,
            position: from,
            at,
            surface: GestureSurface::Images,
        }));
        self.send(Message::Gesture(gesture::Message::TouchEnded {
            finger,
            position: to,
            at: at + duration,
        }))
    }
}

fn interior(id: i64, images: usize, videos: usize) -> Interior {
    let mut interior = Interior::new(id, format!("Interior {id}"));
    interior.gallery_images = (0..images)
        .map(|i| format!("https://cdn.test/{id}/{i}.jpg"))
        .collect();
    interior.video_urls = (0..videos)
        .map(|i| format!("https://cdn.test/{id}/{i}.mp4"))
        .collect();
    interior
}

fn tokens(effect: &Effect, kind: TimerKind) -> Vec<TimerToken> {
    match effect {
        Effect::Schedule { token, .. } if token.kind() == kind => vec![*token],
        Effect::Batch(effects) => effects.iter().flat_map(|e| tokens(e, kind)).collect(),
        _ => Vec::new(),
    }
}

#[test]
fn advancing_length_times_returns_to_start() {
    for len in 1..=7 {
        let mut harness = Harness::new(vec![interior(1, len, 0)]);
        harness.open(0);
        for start in 0..len {
            harness.send(Message::SelectImage(start));
            for _ in 0..len {
                harness.send(Message::NextImage);
            }
            assert_eq!(harness.selected(), start, "next, len {len}");
            for _ in 0..len {
                harness.send(Message::PreviousImage);
            }
            assert_eq!(harness.selected(), start, "previous, len {len}");
        }
    }
}

#[test]
fn single_image_never_starts_cross_fade() {
    for len in 0..=1 {
        let mut harness = Harness::new(vec![interior(1, len, 0)]);
        harness.open(0);
        for message in [
            Message::NextImage,
            Message::PreviousImage,
            Message::Shortcut(Shortcut::ArrowRight),
            Message::Shortcut(Shortcut::ArrowLeft),
        ] {
            let effect = harness.send(message);
            assert!(tokens(&effect, TimerKind::CrossFade).is_empty());
            assert_eq!(harness.selected(), 0);
        }
    }
}

#[test]
fn selected_image_stays_inside_thumbnail_window() {
    let visible = VisibleThumbnails::default().value();
    for len in [0_usize, 1, 4, 5, 6, 13, 40] {
        let mut harness = Harness::new(vec![interior(1, len, 0)]);
        harness.open(0);

        let mut seed: u64 = 0x2545_f491;
        for _ in 0..200 {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let target = (seed >> 33) as usize % (len + 2);
            harness.send(Message::SelectImage(target));

            if len == 0 {
                assert_eq!(harness.selected(), 0);
                continue;
            }
            let offset = harness.gallery.navigation().thumbnail_offset();
            let selected = harness.selected();
            assert!(
                (offset..offset + visible).contains(&selected),
                "len {len}: {selected} outside [{offset}, {})",
                offset + visible
            );
            assert!(offset <= len.saturating_sub(visible));
        }
    }
}

#[test]
fn opening_resets_navigation() {
    let mut harness = Harness::new(vec![interior(1, 12, 3), interior(2, 4, 2)]);
    harness.open(0);
    harness.send(Message::SelectImage(9));
    harness.send(Message::NextVideo);
    harness.send(Message::NextVideo);
    assert_ne!(harness.gallery.navigation().thumbnail_offset(), 0);

    harness.send(Message::Open(1));

    let navigation = harness.gallery.navigation();
    assert_eq!(navigation.selected_image(), 0);
    assert_eq!(navigation.displayed_image(), 0);
    assert_eq!(navigation.active_video(), 0);
    assert_eq!(navigation.thumbnail_offset(), 0);
    assert_eq!(harness.gallery.active_index(), Some(1));
}

#[test]
fn drag_left_shows_next_and_drag_right_shows_previous() {
    let mut harness = Harness::new(vec![interior(1, 3, 0)]);
    harness.open(0);

    harness.swipe(
        Point::new(300.0, 200.0),
        Point::new(200.0, 200.0),
        Duration::from_millis(150),
    );
    assert_eq!(harness.selected(), 1);

    harness.swipe(
        Point::new(200.0, 200.0),
        Point::new(300.0, 200.0),
        Duration::from_millis(150),
    );
    assert_eq!(harness.selected(), 0);
}

#[test]
fn vertical_dominant_drag_is_not_a_swipe() {
    let mut harness = Harness::new(vec![interior(1, 3, 0)]);
    harness.open(0);

    let effect = harness.swipe(
        Point::new(100.0, 100.0),
        Point::new(140.0, 160.0),
        Duration::from_millis(200),
    );

    assert_eq!(effect, Effect::None);
    assert_eq!(harness.selected(), 0);
}

#[test]
fn fast_short_flick_advances() {
    let mut harness = Harness::new(vec![interior(1, 3, 0)]);
    harness.open(0);

    harness.swipe(
        Point::new(200.0, 200.0),
        Point::new(175.0, 200.0),
        Duration::from_millis(100),
    );

    assert_eq!(harness.selected(), 1);
}

#[test]
fn very_fast_short_swipe_advances_on_velocity() {
    let mut harness = Harness::new(vec![interior(1, 3, 0)]);
    harness.open(0);

    harness.swipe(
        Point::new(200.0, 200.0),
        Point::new(182.0, 200.0),
        Duration::from_millis(50),
    );
    assert_eq!(harness.selected(), 1);

    harness.swipe(
        Point::new(200.0, 200.0),
        Point::new(182.0, 200.0),
        Duration::from_millis(100),
    );
    assert_eq!(harness.selected(), 1, "too slow to count as a flick");
}

#[test]
fn second_selection_wins_cross_fade() {
    let mut harness = Harness::new(vec![interior(1, 6, 0)]);
    harness.open(0);

    let first = tokens(&harness.send(Message::SelectImage(2)), TimerKind::CrossFade);
    let second = tokens(&harness.send(Message::SelectImage(4)), TimerKind::CrossFade);
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);

    harness.send(Message::TimerElapsed(first[0]));
    assert_eq!(harness.displayed(), 0, "stale fade must not land");
    assert!(!harness.gallery.navigation().is_entering());

    harness.send(Message::TimerElapsed(second[0]));
    assert_eq!(harness.displayed(), 4);
    assert!(harness.gallery.navigation().is_entering());

    harness.send(Message::TimerElapsed(second[0]));
    assert_eq!(harness.displayed(), 4);
}

#[test]
fn page_overflow_is_restored_after_close() {
    let mut harness = Harness::new(vec![interior(1, 2, 0)]);
    harness.page.overflow = Overflow::Scroll;
    harness.open(0);
    assert_eq!(harness.page.overflow, Overflow::Hidden);

    let effect = harness.send(Message::Shortcut(Shortcut::Escape));
    assert_eq!(harness.gallery.phase(), Phase::Closing);
    assert_eq!(harness.page.overflow, Overflow::Hidden);

    for token in tokens(&effect, TimerKind::Close) {
        harness.send(Message::TimerElapsed(token));
    }

    assert_eq!(harness.gallery.phase(), Phase::Closed);
    assert_eq!(harness.page.overflow, Overflow::Scroll);
    assert!(!harness.gallery.is_scroll_locked());
}

#[test]
fn reopening_while_closing_ignores_stale_close_timer() {
    let mut harness = Harness::new(vec![interior(1, 2, 0), interior(2, 3, 0)]);
    harness.open(0);
    let close = tokens(&harness.send(Message::Close), TimerKind::Close);

    harness.open(1);
    for token in close {
        harness.send(Message::TimerElapsed(token));
    }

    assert_eq!(harness.gallery.phase(), Phase::Open);
    assert_eq!(harness.gallery.active_interior_id(), Some(2));
    assert_eq!(harness.page.overflow, Overflow::Hidden);
}

#[test]
fn closing_cancels_pending_cross_fade() {
    let mut harness = Harness::new(vec![interior(1, 4, 0)]);
    harness.open(0);
    let fade = tokens(&harness.send(Message::SelectImage(3)), TimerKind::CrossFade);

    harness.send(Message::Close);
    assert_eq!(harness.displayed(), 3);
    assert!(harness.gallery.navigation().is_entering());

    for token in fade {
        assert_eq!(harness.send(Message::TimerElapsed(token)), Effect::None);
    }
    assert_eq!(harness.displayed(), 3);
}

#[test]
fn shortcuts_are_ignored_while_closed() {
    let mut harness = Harness::new(vec![interior(1, 4, 0)]);

    assert_eq!(harness.send(Message::Shortcut(Shortcut::ArrowRight)), Effect::None);
    assert_eq!(harness.send(Message::Shortcut(Shortcut::Escape)), Effect::None);
    assert_eq!(harness.gallery.phase(), Phase::Closed);
    assert_eq!(harness.page.overflow, Overflow::Auto);
}

#[test]
fn immediate_close_delay_closes_synchronously() {
    let mut harness = Harness::new(vec![interior(1, 2, 0)]);
    harness.gallery = State::new(Settings {
        close_delay: interior_gallery::domain::gallery::CloseDelay::from_millis(0),
        ..Settings::default()
    });
    harness.open(0);

    let effect = harness.send(Message::Close);

    assert_eq!(effect, Effect::Closed);
    assert_eq!(harness.gallery.phase(), Phase::Closed);
    assert_eq!(harness.page.overflow, Overflow::Auto);
}
