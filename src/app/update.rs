// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Gallery messages are forwarded to the controller; the [`gallery::Effect`]s
//! it returns are turned into Iced tasks here (timers, image fetches) or
//! recorded in the activity log.

use super::page::PageSurface;
use super::{LoadState, Message};
use crate::diagnostics::{DiagnosticsCollector, GalleryState, MediaKind, UserAction};
use crate::domain::gallery::Direction;
use crate::domain::interior::Interior;
use crate::error::Error;
use crate::media::{self, ImageCache, InteriorSource};
use crate::ui::gallery::subcomponents::gesture::GestureSurface;
use crate::ui::gallery::subcomponents::lifecycle::Shortcut;
use crate::ui::gallery::subcomponents::timer::TimerToken;
use crate::ui::gallery::{self, Effect};
use iced::widget::image;
use iced::Task;
use std::time::Duration;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub interiors: &'a mut Vec<Interior>,
    pub page: &'a mut PageSurface,
    pub cache: &'a mut ImageCache,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub load_state: &'a mut LoadState,
}

/// Forwards a message to the gallery controller and runs its effects.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let action = user_action(&message, ctx.interiors);

    let effect = {
        let mut gallery_ctx = gallery::Context {
            interiors: ctx.interiors.as_slice(),
            page: &mut *ctx.page,
        };
        ctx.gallery.handle(message, &mut gallery_ctx)
    };

    // Messages the gallery ignored (keys on the tile page) are not activity.
    if effect != Effect::None {
        if let Some(action) = action {
            ctx.diagnostics.log_action(action);
        }
    }
    apply_effect(ctx, effect)
}

/// Replaces the interior list and re-targets an open gallery.
pub fn handle_interiors_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<Interior>, Error>,
) -> Task<Message> {
    let interiors = match result {
        Ok(interiors) => interiors,
        Err(err) => {
            eprintln!("[source] Failed to load interiors: {err}");
            ctx.diagnostics.log_error(err.to_string());
            *ctx.load_state = LoadState::Failed(err);
            return Task::none();
        }
    };

    ctx.diagnostics.log_state(GalleryState::InteriorsLoaded {
        count: interiors.len(),
    });
    *ctx.interiors = interiors;
    *ctx.load_state = LoadState::Ready;

    if let Some(id) = ctx.gallery.active_interior_id() {
        if !ctx.interiors.iter().any(|interior| interior.id == id) {
            ctx.diagnostics
                .log_state(GalleryState::InteriorRemoved { interior_id: id });
        }
    }

    let effect = {
        let mut gallery_ctx = gallery::Context {
            interiors: ctx.interiors.as_slice(),
            page: &mut *ctx.page,
        };
        ctx.gallery.refresh(&mut gallery_ctx)
    };

    Task::batch([apply_effect(ctx, effect), fetch_covers(ctx)])
}

/// Stores a finished image fetch in the cache.
pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<image::Handle, Error>,
) -> Task<Message> {
    ctx.cache.complete(url, result.ok());
    Task::none()
}

/// Starts loading the interior list. Without a source there is nothing to do.
pub fn load_source(
    ctx: &mut UpdateContext<'_>,
    source: Option<&InteriorSource>,
) -> Task<Message> {
    let Some(source) = source.cloned() else {
        return Task::none();
    };
    *ctx.load_state = LoadState::Loading;
    Task::perform(media::load_interiors(source), Message::InteriorsLoaded)
}

fn apply_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None | Effect::SuppressScroll => Task::none(),
        Effect::Schedule { token, delay } => schedule(token, delay),
        Effect::Batch(effects) => {
            let tasks: Vec<Task<Message>> = effects
                .into_iter()
                .map(|effect| apply_effect(ctx, effect))
                .collect();
            Task::batch(tasks)
        }
        Effect::Swiped { surface, direction } => {
            ctx.diagnostics.log_action(UserAction::Swipe {
                media: media_kind(surface),
                forward: direction == Direction::Next,
            });
            Task::none()
        }
        Effect::LoadMedia(urls) => fetch_media(ctx, &urls),
        Effect::Opened { interior_id } => {
            let navigation = ctx.gallery.navigation();
            let state = GalleryState::Opened {
                interior_id,
                images: navigation.image_count(),
                videos: navigation.video_count(),
            };
            ctx.diagnostics.log_state(state);
            Task::none()
        }
        Effect::Closed => {
            ctx.diagnostics.log_state(GalleryState::Closed);
            // Browsing may have evicted tile covers from the cache.
            fetch_covers(ctx)
        }
    }
}

/// Delivers `TimerElapsed(token)` back to the gallery after `delay`.
fn schedule(token: TimerToken, delay: Duration) -> Task<Message> {
    Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
        Message::Gallery(gallery::Message::TimerElapsed(token))
    })
}

/// Fetches the tile cover of every interior the cache no longer holds.
fn fetch_covers(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let covers: Vec<String> = ctx
        .interiors
        .iter()
        .filter_map(|interior| interior.tile_image().map(str::to_string))
        .collect();
    fetch_media(ctx, &covers)
}

/// Fetches every URL the cache does not already know about.
fn fetch_media(ctx: &mut UpdateContext<'_>, urls: &[String]) -> Task<Message> {
    let pending = ctx.cache.request(urls.iter().map(String::as_str));
    if pending.is_empty() {
        return Task::none();
    }

    let tasks = pending.into_iter().map(|url| {
        let handle = ctx.diagnostics.handle();
        let target = url.clone();
        Task::perform(
            async move {
                let result = media::fetch_image(url.clone()).await;
                if let Err(err) = &result {
                    handle.log_warning(format!("media fetch failed for {url}: {err}"));
                }
                result
            },
            move |result| Message::ImageFetched {
                url: target,
                result,
            },
        )
    });
    Task::batch(tasks)
}

fn media_kind(surface: GestureSurface) -> MediaKind {
    match surface {
        GestureSurface::Images => MediaKind::Image,
        GestureSurface::Videos => MediaKind::Video,
    }
}

/// The user intent behind a gallery message, for the activity log.
fn user_action(message: &gallery::Message, interiors: &[Interior]) -> Option<UserAction> {
    use gallery::Message as M;

    let navigate = |media, forward| UserAction::Navigate { media, forward };
    match message {
        M::Open(index) => interiors
            .get(*index)
            .map(|interior| UserAction::OpenGallery {
                interior_id: interior.id,
            }),
        M::Close | M::BackdropPressed | M::Shortcut(Shortcut::Escape) => {
            Some(UserAction::CloseGallery)
        }
        M::Shortcut(Shortcut::ArrowLeft) | M::PreviousImage => {
            Some(navigate(MediaKind::Image, false))
        }
        M::Shortcut(Shortcut::ArrowRight) | M::NextImage => Some(navigate(MediaKind::Image, true)),
        M::PreviousVideo => Some(navigate(MediaKind::Video, false)),
        M::NextVideo => Some(navigate(MediaKind::Video, true)),
        M::SelectImage(index) => Some(UserAction::Select {
            media: MediaKind::Image,
            index: *index,
        }),
        M::SelectVideo(index) => Some(UserAction::Select {
            media: MediaKind::Video,
            index: *index,
        }),
        M::Gesture(_) | M::TimerElapsed(_) => None,
    }
}
