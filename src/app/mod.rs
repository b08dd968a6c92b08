// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and the gallery.
//!
//! The `App` struct wires together the interior list, the gallery controller,
//! the image cache, localization and the activity log, and translates messages
//! into side effects like timers, image fetches or a report export.

pub mod config;
mod message;
mod page;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use page::PageSurface;

use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, UserAction};
use crate::domain::interior::Interior;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, InteriorSource};
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Progress of the interior list.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// No source was given.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(Error),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    source: Option<InteriorSource>,
    interiors: Vec<Interior>,
    load_state: LoadState,
    gallery: gallery::State,
    page: PageSurface,
    cache: ImageCache,
    diagnostics: DiagnosticsCollector,
    diagnostics_out: Option<PathBuf>,
    /// i18n key of a warning raised while reading the settings file.
    config_notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("interiors", &self.interiors.len())
            .field("gallery_phase", &self.gallery.phase())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings.
///
/// Close requests are handled by the application so the activity report can
/// be written before exiting.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::default(),
            source: None,
            interiors: Vec::new(),
            load_state: LoadState::Idle,
            gallery: gallery::State::new(config.gallery_settings()),
            page: PageSurface::default(),
            cache: ImageCache::new(config.cache_capacity()),
            diagnostics: DiagnosticsCollector::new(BufferCapacity::default()),
            diagnostics_out: None,
            config_notice: None,
        }
    }
}

impl App {
    /// Initializes application state from the settings file and the command
    /// line, and starts loading the interior list.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            source: flags
                .source
                .as_deref()
                .map(|raw| InteriorSource::parse(raw, flags.api_key.clone())),
            gallery: gallery::State::new(config.gallery_settings()),
            cache: ImageCache::new(config.cache_capacity()),
            diagnostics_out: flags.diagnostics_out,
            config_notice: config_warning,
            ..Self::default()
        };

        if let Some(key) = &app.config_notice {
            app.diagnostics.log_warning(key.clone());
        }

        let task = app.reload();
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.active_interior(&self.interiors) {
            Some(interior) => format!("{} - {app_name}", interior.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.diagnostics.process_pending();

        match message {
            Message::Gallery(msg) => update::handle_gallery_message(&mut self.context(), msg),
            Message::InteriorsLoaded(result) => {
                update::handle_interiors_loaded(&mut self.context(), result)
            }
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(&mut self.context(), url, result)
            }
            Message::Reload => {
                self.diagnostics.log_action(UserAction::Reload);
                self.reload()
            }
            Message::WindowCloseRequested(_) => {
                self.export_diagnostics();
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            interiors: &self.interiors,
            load_state: &self.load_state,
            source: self.source.as_ref(),
            page: &self.page,
            gallery: &self.gallery,
            cache: &self.cache,
            notice: self.config_notice.as_deref(),
        })
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &mut self.gallery,
            interiors: &mut self.interiors,
            page: &mut self.page,
            cache: &mut self.cache,
            diagnostics: &mut self.diagnostics,
            load_state: &mut self.load_state,
        }
    }

    fn reload(&mut self) -> Task<Message> {
        let source = self.source.clone();
        update::load_source(&mut self.context(), source.as_ref())
    }

    /// Writes the activity report if `--diagnostics-out` was given.
    fn export_diagnostics(&mut self) {
        let Some(path) = self.diagnostics_out.clone() else {
            return;
        };
        self.diagnostics.process_pending();
        if let Err(err) = self.diagnostics.export_to_file(&path) {
            eprintln!(
                "[diagnostics] Failed to write report to {}: {err}",
                path.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::CloseDelay;
    use crate::ui::gallery::subcomponents::lifecycle::{Phase, Shortcut};
    use crate::ui::gallery::subcomponents::scroll_lock::Overflow;
    use tempfile::tempdir;

    fn interior(id: i64, images: usize) -> Interior {
        let mut interior = Interior::new(id, format!("Interior {id}"));
        interior.gallery_images = (0..images).map(|i| format!("{id}/{i}.jpg")).collect();
        interior
    }

    fn loaded_app(interiors: Vec<Interior>) -> App {
        let mut app = App::default();
        let _ = app.update(Message::InteriorsLoaded(Ok(interiors)));
        app
    }

    #[test]
    fn new_app_without_source_is_idle() {
        let app = App::default();
        assert!(matches!(app.load_state, LoadState::Idle));
        assert!(app.interiors.is_empty());
        assert_eq!(app.gallery.phase(), Phase::Closed);
    }

    #[test]
    fn loaded_interiors_are_stored_and_logged() {
        let app = loaded_app(vec![interior(1, 2), interior(2, 0)]);
        assert!(matches!(app.load_state, LoadState::Ready));
        assert_eq!(app.interiors.len(), 2);
        assert_eq!(app.diagnostics.len(), 1);
    }

    #[test]
    fn failed_load_keeps_previous_list() {
        let mut app = loaded_app(vec![interior(1, 2)]);
        let _ = app.update(Message::InteriorsLoaded(Err(Error::Network(
            "HTTP 503".into(),
        ))));

        assert!(matches!(app.load_state, LoadState::Failed(Error::Network(_))));
        assert_eq!(app.interiors.len(), 1);
    }

    #[test]
    fn opening_gallery_locks_page_scroll() {
        let mut app = loaded_app(vec![interior(1, 3)]);
        let _ = app.update(Message::Gallery(gallery::Message::Open(0)));

        assert_eq!(app.gallery.phase(), Phase::Opening);
        assert!(!app.page.is_scrollable());
        assert_eq!(app.title(), format!("Interior 1 - {}", app.i18n.tr("window-title")));
    }

    #[test]
    fn reload_without_interior_closes_gallery() {
        let mut app = loaded_app(vec![interior(1, 3), interior(2, 1)]);
        let _ = app.update(Message::Gallery(gallery::Message::Open(0)));

        let _ = app.update(Message::InteriorsLoaded(Ok(vec![interior(2, 1)])));

        assert_eq!(app.gallery.phase(), Phase::Closing);
    }

    #[test]
    fn failed_fetch_is_cached_as_failure() {
        let mut app = loaded_app(vec![interior(1, 1)]);
        let _ = app.update(Message::ImageFetched {
            url: "1/0.jpg".into(),
            result: Err(Error::Io("missing".into())),
        });
        assert!(app.cache.is_failed("1/0.jpg"));
    }

    #[test]
    fn close_request_writes_activity_report() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("report.json");
        let mut app = loaded_app(vec![interior(1, 2)]);
        app.diagnostics_out = Some(path.clone());
        let _ = app.update(Message::Gallery(gallery::Message::Open(0)));

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        let report = std::fs::read_to_string(&path).expect("report written");
        assert!(report.contains("open_gallery"));
    }

    #[test]
    fn keys_on_tile_page_are_not_logged() {
        let mut app = loaded_app(vec![interior(1, 3)]);
        assert_eq!(app.diagnostics.len(), 1);

        for shortcut in [Shortcut::Escape, Shortcut::ArrowRight, Shortcut::ArrowLeft] {
            let _ = app.update(Message::Gallery(gallery::Message::Shortcut(shortcut)));
        }

        assert_eq!(app.gallery.phase(), Phase::Closed);
        assert_eq!(app.diagnostics.len(), 1);

        let _ = app.update(Message::Gallery(gallery::Message::Open(0)));
        assert!(app.diagnostics.len() > 1);
    }

    #[test]
    fn covers_are_requested_again_after_browsing() {
        let interiors: Vec<Interior> = (1..=4)
            .map(|id| {
                let mut interior = interior(id, 40);
                interior.cover_image = Some(format!("{id}/cover.jpg"));
                interior
            })
            .collect();
        let covers: Vec<String> = interiors
            .iter()
            .filter_map(|interior| interior.cover_image.clone())
            .collect();

        let mut app = App::default();
        app.gallery = gallery::State::new(gallery::Settings {
            close_delay: CloseDelay::from_millis(0),
            ..gallery::Settings::default()
        });
        let _ = app.update(Message::InteriorsLoaded(Ok(interiors)));
        assert!(covers.iter().all(|url| app.cache.entry(url).is_some()));

        for index in 0..3 {
            let _ = app.update(Message::Gallery(gallery::Message::Open(index)));
            for _ in 0..40 {
                let _ = app.update(Message::Gallery(gallery::Message::NextImage));
            }
        }
        assert!(
            covers.iter().all(|url| app.cache.entry(url).is_none()),
            "browsing 120 images should push every cover out of the cache"
        );

        let _ = app.update(Message::Gallery(gallery::Message::Close));

        assert_eq!(app.gallery.phase(), Phase::Closed);
        for url in &covers {
            assert!(app.cache.entry(url).is_some(), "{url} was not requested again");
        }
    }

    #[test]
    fn page_surface_starts_scrollable() {
        let app = App::default();
        assert_eq!(
            crate::ui::gallery::subcomponents::scroll_lock::ScrollSurface::overflow(&app.page),
            Overflow::Auto
        );
    }
}
