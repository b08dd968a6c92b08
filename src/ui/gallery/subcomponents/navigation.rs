// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: image and video indices, cross-fade and
//! thumbnail window bookkeeping.
//!
//! The image list and the video list are navigated independently. The
//! displayed image lags the selected one for the duration of a cross-fade;
//! outside a transition both are equal.

use super::timer::{TimerKind, TimerSlot, TimerToken};
use crate::domain::gallery::{CrossFadeDelay, Direction, VisibleThumbnails};
use std::ops::Range;
use std::time::Duration;

/// Navigation sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    selected_image: usize,
    displayed_image: usize,
    /// False while the displayed image is fading out.
    is_entering: bool,
    active_video: usize,
    thumbnail_offset: usize,
    image_count: usize,
    video_count: usize,
    visible_thumbnails: VisibleThumbnails,
    cross_fade_delay: CrossFadeDelay,
    cross_fade: TimerSlot,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Select an image by index (thumbnail click).
    SelectImage(usize),
    /// Step through the image list with wraparound.
    AdvanceImage(Direction),
    /// Select a video by index (selector pill).
    SelectVideo(usize),
    /// Step through the video list with wraparound.
    AdvanceVideo(Direction),
    /// The cross-fade timer elapsed.
    CrossFadeElapsed(TimerToken),
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The host must deliver `token` back after `delay`.
    ScheduleCrossFade { token: TimerToken, delay: Duration },
    /// The cross-fade completed and this image is now displayed.
    ImageDisplayed(usize),
    /// The active video changed.
    VideoChanged(usize),
}

impl Default for State {
    fn default() -> Self {
        Self::new(VisibleThumbnails::default(), CrossFadeDelay::default())
    }
}

impl State {
    /// Creates an empty navigation state.
    #[must_use]
    pub fn new(visible_thumbnails: VisibleThumbnails, cross_fade_delay: CrossFadeDelay) -> Self {
        Self {
            selected_image: 0,
            displayed_image: 0,
            is_entering: true,
            active_video: 0,
            thumbnail_offset: 0,
            image_count: 0,
            video_count: 0,
            visible_thumbnails,
            cross_fade_delay,
            cross_fade: TimerSlot::new(TimerKind::CrossFade),
        }
    }

    /// Handle a navigation message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::SelectImage(index) => self.select_image(index),
            Message::AdvanceImage(direction) => {
                if self.image_count <= 1 {
                    return Effect::None;
                }
                match direction.step(self.selected_image, self.image_count) {
                    Some(index) => self.select_image(index),
                    None => Effect::None,
                }
            }
            Message::SelectVideo(index) => self.select_video(index),
            Message::AdvanceVideo(direction) => {
                if self.video_count <= 1 {
                    return Effect::None;
                }
                match direction.step(self.active_video, self.video_count) {
                    Some(index) => self.select_video(index),
                    None => Effect::None,
                }
            }
            Message::CrossFadeElapsed(token) => {
                if !self.cross_fade.fire(token) {
                    return Effect::None;
                }
                self.displayed_image = self.selected_image;
                self.is_entering = true;
                Effect::ImageDisplayed(self.displayed_image)
            }
        }
    }

    fn select_image(&mut self, index: usize) -> Effect {
        if index >= self.image_count || index == self.selected_image {
            return Effect::None;
        }
        self.selected_image = index;
        self.reconcile_thumbnail_window();

        // Fade out the current image; a pending fade is superseded.
        self.is_entering = false;
        let token = self.cross_fade.arm();
        Effect::ScheduleCrossFade {
            token,
            delay: self.cross_fade_delay.as_duration(),
        }
    }

    fn select_video(&mut self, index: usize) -> Effect {
        if index >= self.video_count || index == self.active_video {
            return Effect::None;
        }
        self.active_video = index;
        Effect::VideoChanged(index)
    }

    /// Shifts the thumbnail window by the minimal amount that brings the
    /// selected image into view, clamped to `[0, max_offset]`.
    pub fn reconcile_thumbnail_window(&mut self) {
        let visible = self.visible_thumbnails.value();
        let max_offset = self.visible_thumbnails.max_offset(self.image_count);

        if self.selected_image < self.thumbnail_offset {
            self.thumbnail_offset = self.selected_image;
        } else if self.selected_image >= self.thumbnail_offset + visible {
            self.thumbnail_offset = self.selected_image + 1 - visible;
        }
        self.thumbnail_offset = self.thumbnail_offset.min(max_offset);
    }

    /// Updates list lengths, pulling indices that fell out of range back to 0.
    pub fn sync_counts(&mut self, image_count: usize, video_count: usize) {
        self.image_count = image_count;
        self.video_count = video_count;

        if self.selected_image >= image_count {
            self.selected_image = 0;
            self.cross_fade.cancel();
            self.displayed_image = 0;
            self.is_entering = true;
        }
        if self.displayed_image >= image_count {
            self.displayed_image = 0;
        }
        if self.active_video >= video_count {
            self.active_video = 0;
        }
        self.reconcile_thumbnail_window();
    }

    /// Resets every index and cancels a pending cross-fade. List lengths are kept.
    pub fn reset(&mut self) {
        self.cross_fade.cancel();
        self.selected_image = 0;
        self.displayed_image = 0;
        self.is_entering = true;
        self.active_video = 0;
        self.thumbnail_offset = 0;
    }

    /// Cancels a pending cross-fade and settles on the selected image.
    pub fn cancel_cross_fade(&mut self) {
        if self.cross_fade.is_pending() {
            self.cross_fade.cancel();
            self.displayed_image = self.selected_image;
            self.is_entering = true;
        }
    }

    #[must_use]
    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    #[must_use]
    pub fn displayed_image(&self) -> usize {
        self.displayed_image
    }

    #[must_use]
    pub fn is_entering(&self) -> bool {
        self.is_entering
    }

    #[must_use]
    pub fn active_video(&self) -> usize {
        self.active_video
    }

    #[must_use]
    pub fn thumbnail_offset(&self) -> usize {
        self.thumbnail_offset
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    #[must_use]
    pub fn video_count(&self) -> usize {
        self.video_count
    }

    #[must_use]
    pub fn visible_thumbnails(&self) -> VisibleThumbnails {
        self.visible_thumbnails
    }

    /// Indices of the thumbnails currently rendered.
    #[must_use]
    pub fn thumbnail_range(&self) -> Range<usize> {
        let end = (self.thumbnail_offset + self.visible_thumbnails.value()).min(self.image_count);
        self.thumbnail_offset.min(end)..end
    }

    /// Returns whether prev/next image controls are meaningful.
    #[must_use]
    pub fn can_navigate_images(&self) -> bool {
        self.image_count > 1
    }

    #[must_use]
    pub fn can_navigate_videos(&self) -> bool {
        self.video_count > 1
    }

    /// Returns whether a cross-fade is in progress.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.cross_fade.is_pending()
    }
}
