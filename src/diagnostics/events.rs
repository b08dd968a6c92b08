// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for gallery activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::interior::InteriorId;

/// Which media list an action targeted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A showcase tile was activated.
    OpenGallery { interior_id: InteriorId },

    /// Close button, backdrop or Escape.
    CloseGallery,

    /// Previous/next arrow or keyboard shortcut.
    Navigate { media: MediaKind, forward: bool },

    /// Direct pick from the thumbnail strip or the video selector.
    Select { media: MediaKind, index: usize },

    /// A touch gesture that was accepted as a swipe.
    Swipe { media: MediaKind, forward: bool },

    /// Interior list reloaded from its source.
    Reload,
}

/// Gallery state transitions worth correlating with user actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GalleryState {
    InteriorsLoaded {
        count: usize,
    },
    Opened {
        interior_id: InteriorId,
        images: usize,
        videos: usize,
    },
    /// The close delay elapsed and the modal was reset.
    Closed,
    /// The interior shown in the modal disappeared after a reload.
    InteriorRemoved {
        interior_id: InteriorId,
    },
}

/// A diagnostic event with its monotonic timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current instant.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and data of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    GalleryState {
        state: GalleryState,
    },
    /// Non-fatal problem, e.g. a media fetch that failed.
    Warning {
        message: String,
    },
    /// Failure that left the application without data, e.g. an unreadable source.
    Error {
        message: String,
    },
}
