// SPDX-License-Identifier: MPL-2.0
//! `interior_gallery` is a showcase of interior design projects built with the
//! Iced GUI framework.
//!
//! Interiors are listed as a grid of tiles. Selecting one opens a modal gallery
//! with a cross-fading image stage, a thumbnail strip, a video section and a
//! details panel, driven by mouse, keyboard and touch gestures.

#![doc(html_root_url = "https://docs.rs/interior_gallery/0.1.0")]

pub mod app;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
