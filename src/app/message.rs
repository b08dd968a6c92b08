// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::interior::Interior;
use crate::error::Error;
use crate::ui::gallery;
use iced::widget::image;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    InteriorsLoaded(Result<Vec<Interior>, Error>),
    ImageFetched {
        url: String,
        result: Result<image::Handle, Error>,
    },
    /// Reload the interior list from its source (F5).
    Reload,
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`).
    pub lang: Option<String>,
    /// JSON file or HTTP(S) endpoint listing the interiors.
    pub source: Option<String>,
    /// API key sent with remote interior requests.
    pub api_key: Option<String>,
    /// Where to write the activity report when the window closes.
    pub diagnostics_out: Option<PathBuf>,
}
