// SPDX-License-Identifier: MPL-2.0
//! Gallery modal controller.
//!
//! Owns one set of sub-component states for the whole application; opening
//! an interior re-initializes them and closing tears them down. The host
//! supplies the interior list and the page's scroll surface on every call
//! through [`Context`], and turns returned [`Effect`]s into tasks.

use super::subcomponents::gesture::{self, GestureConfig, GestureSurface};
use super::subcomponents::lifecycle::{self, Phase, Shortcut, Visual};
use super::subcomponents::navigation;
use super::subcomponents::scroll_lock::{ScrollLock, ScrollSurface};
use super::subcomponents::timer::{TimerKind, TimerToken};
use crate::domain::gallery::{CloseDelay, CrossFadeDelay, Direction, VisibleThumbnails};
use crate::domain::interior::{Interior, InteriorId, MediaItem};
use crate::media::MediaCatalog;
use std::time::Duration;

/// Borrowed collaborators the controller needs to act.
pub struct Context<'a> {
    /// The externally-owned list the open index refers to.
    pub interiors: &'a [Interior],
    /// The page whose scrolling is locked while the modal is visible.
    pub page: &'a mut dyn ScrollSurface,
}

/// Tunables applied to the sub-components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    pub visible_thumbnails: VisibleThumbnails,
    pub cross_fade_delay: CrossFadeDelay,
    pub close_delay: CloseDelay,
    pub gesture: GestureConfig,
}

#[derive(Debug, Clone)]
struct ActiveInterior {
    index: usize,
    id: InteriorId,
    catalog: MediaCatalog,
}

/// Gallery controller state.
#[derive(Debug, Clone)]
pub struct State {
    lifecycle: lifecycle::State,
    navigation: navigation::State,
    gesture: gesture::State,
    scroll_lock: ScrollLock,
    active: Option<ActiveInterior>,
    scroll_suppressed: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Open the interior at this index of the host's list.
    Open(usize),
    Close,
    /// Click on the dimmed area around the panel.
    BackdropPressed,
    Shortcut(Shortcut),
    SelectImage(usize),
    PreviousImage,
    NextImage,
    SelectVideo(usize),
    PreviousVideo,
    NextVideo,
    Gesture(gesture::Message),
    TimerElapsed(TimerToken),
}

/// Side effects the application should perform after handling a gallery message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Deliver `Message::TimerElapsed(token)` after `delay`.
    Schedule {
        token: TimerToken,
        delay: Duration,
    },
    Batch(Vec<Effect>),
    /// A horizontal swipe is in progress; page scrolling must not react.
    SuppressScroll,
    /// A completed swipe was accepted as navigation.
    Swiped {
        surface: GestureSurface,
        direction: Direction,
    },
    /// Image URLs the view is about to need.
    LoadMedia(Vec<String>),
    Opened {
        interior_id: InteriorId,
    },
    Closed,
}

impl Effect {
    fn batch(effects: Vec<Effect>) -> Effect {
        let mut effects: Vec<Effect> = effects
            .into_iter()
            .filter(|effect| *effect != Effect::None)
            .collect();
        match effects.len() {
            0 => Effect::None,
            1 => effects.remove(0),
            _ => Effect::Batch(effects),
        }
    }

    fn from_lifecycle(effect: lifecycle::Effect) -> Effect {
        match effect {
            lifecycle::Effect::None => Effect::None,
            lifecycle::Effect::Schedule { token, delay } => Effect::Schedule { token, delay },
            lifecycle::Effect::Closed => Effect::Closed,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl State {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            lifecycle: lifecycle::State::new(settings.close_delay),
            navigation: navigation::State::new(
                settings.visible_thumbnails,
                settings.cross_fade_delay,
            ),
            gesture: gesture::State::new(settings.gesture),
            scroll_lock: ScrollLock::default(),
            active: None,
            scroll_suppressed: false,
        }
    }

    /// Opens the gallery on the interior at `index`.
    ///
    /// Any timer from a previous session is cancelled first, so a close that
    /// was still pending cannot clear the newly opened interior. Out-of-range
    /// indices are ignored.
    pub fn open_gallery(&mut self, index: usize, ctx: &mut Context<'_>) -> Effect {
        let Some(interior) = ctx.interiors.get(index) else {
            return Effect::None;
        };

        self.lifecycle.cancel_timers();
        self.navigation.reset();
        self.gesture.reset();
        self.scroll_suppressed = false;

        let catalog = MediaCatalog::from_interior(interior);
        self.navigation
            .sync_counts(catalog.image_count(), catalog.video_count());
        self.active = Some(ActiveInterior {
            index,
            id: interior.id,
            catalog,
        });
        self.scroll_lock.lock(ctx.page);

        let enter = Effect::from_lifecycle(self.lifecycle.handle(lifecycle::Message::Open));
        Effect::batch(vec![
            enter,
            Effect::Opened {
                interior_id: interior.id,
            },
            self.load_media(),
        ])
    }

    /// Starts the exit transition. Ignored unless opening or open.
    pub fn close_gallery(&mut self, ctx: &mut Context<'_>) -> Effect {
        let effect = self.lifecycle.handle(lifecycle::Message::Close);
        if effect == lifecycle::Effect::None {
            return Effect::None;
        }
        self.navigation.cancel_cross_fade();
        self.gesture.reset();
        self.scroll_suppressed = false;

        if effect == lifecycle::Effect::Closed {
            self.finish_close(ctx);
        }
        Effect::from_lifecycle(effect)
    }

    fn finish_close(&mut self, ctx: &mut Context<'_>) {
        self.navigation.reset();
        self.navigation.sync_counts(0, 0);
        self.active = None;
        self.scroll_lock.release(ctx.page);
    }

    /// Handle a gallery message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, ctx: &mut Context<'_>) -> Effect {
        match msg {
            Message::Open(index) => self.open_gallery(index, ctx),
            Message::Close | Message::BackdropPressed => self.close_gallery(ctx),
            Message::Shortcut(shortcut) => {
                if !self.lifecycle.accepts_shortcuts() {
                    return Effect::None;
                }
                match shortcut {
                    Shortcut::Escape => self.close_gallery(ctx),
                    Shortcut::ArrowLeft => {
                        self.navigate(navigation::Message::AdvanceImage(Direction::Previous))
                    }
                    Shortcut::ArrowRight => {
                        self.navigate(navigation::Message::AdvanceImage(Direction::Next))
                    }
                }
            }
            Message::SelectImage(index) => self.navigate(navigation::Message::SelectImage(index)),
            Message::PreviousImage => {
                self.navigate(navigation::Message::AdvanceImage(Direction::Previous))
            }
            Message::NextImage => self.navigate(navigation::Message::AdvanceImage(Direction::Next)),
            Message::SelectVideo(index) => self.navigate(navigation::Message::SelectVideo(index)),
            Message::PreviousVideo => {
                self.navigate(navigation::Message::AdvanceVideo(Direction::Previous))
            }
            Message::NextVideo => self.navigate(navigation::Message::AdvanceVideo(Direction::Next)),
            Message::Gesture(gesture_msg) => self.handle_gesture(gesture_msg),
            Message::TimerElapsed(token) => match token.kind() {
                TimerKind::CrossFade => {
                    self.navigation
                        .handle(navigation::Message::CrossFadeElapsed(token));
                    Effect::None
                }
                TimerKind::EnterFrame | TimerKind::Close => {
                    let effect = self
                        .lifecycle
                        .handle(lifecycle::Message::TimerElapsed(token));
                    if effect == lifecycle::Effect::Closed {
                        self.finish_close(ctx);
                    }
                    Effect::from_lifecycle(effect)
                }
            },
        }
    }

    fn accepts_navigation(&self) -> bool {
        self.active.is_some() && matches!(self.lifecycle.phase(), Phase::Opening | Phase::Open)
    }

    fn navigate(&mut self, msg: navigation::Message) -> Effect {
        if !self.accepts_navigation() {
            return Effect::None;
        }
        match self.navigation.handle(msg) {
            navigation::Effect::ScheduleCrossFade { token, delay } => {
                Effect::batch(vec![Effect::Schedule { token, delay }, self.load_media()])
            }
            navigation::Effect::None
            | navigation::Effect::ImageDisplayed(_)
            | navigation::Effect::VideoChanged(_) => Effect::None,
        }
    }

    fn handle_gesture(&mut self, msg: gesture::Message) -> Effect {
        if !self.accepts_navigation() {
            self.gesture.reset();
            self.scroll_suppressed = false;
            return Effect::None;
        }
        let ends_touch = matches!(
            msg,
            gesture::Message::TouchEnded { .. } | gesture::Message::TouchCancelled { .. }
        );
        let effect = self.gesture.handle(msg);
        if ends_touch {
            self.scroll_suppressed = false;
        }
        match effect {
            gesture::Effect::None => Effect::None,
            gesture::Effect::SuppressScroll => {
                self.scroll_suppressed = true;
                Effect::SuppressScroll
            }
            gesture::Effect::Navigate { surface, direction } => {
                let effect = match surface {
                    GestureSurface::Images => {
                        self.navigate(navigation::Message::AdvanceImage(direction))
                    }
                    GestureSurface::Videos => {
                        self.navigate(navigation::Message::AdvanceVideo(direction))
                    }
                };
                Effect::batch(vec![Effect::Swiped { surface, direction }, effect])
            }
        }
    }

    /// Rebuilds the open catalog after the interior list was reloaded.
    ///
    /// The open interior is found again by id. If it disappeared the modal
    /// closes; otherwise indices that fell out of range are pulled back.
    pub fn refresh(&mut self, ctx: &mut Context<'_>) -> Effect {
        let Some(id) = self.active_interior_id() else {
            return Effect::None;
        };
        let Some((index, interior)) = ctx
            .interiors
            .iter()
            .enumerate()
            .find(|(_, interior)| interior.id == id)
        else {
            return self.close_gallery(ctx);
        };

        let catalog = MediaCatalog::from_interior(interior);
        self.navigation
            .sync_counts(catalog.image_count(), catalog.video_count());
        self.active = Some(ActiveInterior { index, id, catalog });
        self.load_media()
    }

    fn load_media(&self) -> Effect {
        let urls = self.media_requests();
        if urls.is_empty() {
            Effect::None
        } else {
            Effect::LoadMedia(urls)
        }
    }

    /// Image URLs needed to render the current state: the displayed and
    /// selected images, their neighbours, and the visible thumbnails.
    #[must_use]
    pub fn media_requests(&self) -> Vec<String> {
        let Some(catalog) = self.catalog() else {
            return Vec::new();
        };
        let count = catalog.image_count();
        if count == 0 {
            return Vec::new();
        }

        let selected = self.navigation.selected_image();
        let mut indices = vec![self.navigation.displayed_image(), selected];
        if count > 1 {
            indices.extend(Direction::Next.step(selected, count));
            indices.extend(Direction::Previous.step(selected, count));
        }

        let mut urls: Vec<String> = Vec::new();
        let mut push = |url: &str| {
            if !url.is_empty() && !urls.iter().any(|u| u == url) {
                urls.push(url.to_string());
            }
        };
        for index in indices {
            if let Some(item) = catalog.image(index) {
                push(item.url());
            }
        }
        for (_, item) in self.visible_thumbnails() {
            push(item.thumbnail_url());
        }
        urls
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    #[must_use]
    pub fn visual(&self) -> Visual {
        self.lifecycle.visual()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.lifecycle.is_visible()
    }

    #[must_use]
    pub fn navigation(&self) -> &navigation::State {
        &self.navigation
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    /// Whether a horizontal swipe currently owns touch movement.
    #[must_use]
    pub fn is_scroll_suppressed(&self) -> bool {
        self.scroll_suppressed
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active.as_ref().map(|active| active.index)
    }

    #[must_use]
    pub fn active_interior_id(&self) -> Option<InteriorId> {
        self.active.as_ref().map(|active| active.id)
    }

    /// Looks the open interior up in the host's list.
    #[must_use]
    pub fn active_interior<'a>(&self, interiors: &'a [Interior]) -> Option<&'a Interior> {
        let active = self.active.as_ref()?;
        interiors
            .get(active.index)
            .filter(|interior| interior.id == active.id)
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&MediaCatalog> {
        self.active.as_ref().map(|active| &active.catalog)
    }

    /// The image currently rendered in the main pane.
    #[must_use]
    pub fn displayed_image(&self) -> Option<&MediaItem> {
        self.catalog()?.image(self.navigation.displayed_image())
    }

    #[must_use]
    pub fn active_video(&self) -> Option<&MediaItem> {
        self.catalog()?.video(self.navigation.active_video())
    }

    /// Thumbnails inside the visible window, with their catalog indices.
    #[must_use]
    pub fn visible_thumbnails(&self) -> Vec<(usize, &MediaItem)> {
        let Some(catalog) = self.catalog() else {
            return Vec::new();
        };
        self.navigation
            .thumbnail_range()
            .filter_map(|index| catalog.image(index).map(|item| (index, item)))
            .collect()
    }

    /// One-based position of the selected image and the image count.
    #[must_use]
    pub fn image_counter(&self) -> Option<(usize, usize)> {
        let count = self.navigation.image_count();
        (count > 0).then(|| (self.navigation.selected_image() + 1, count))
    }
}
