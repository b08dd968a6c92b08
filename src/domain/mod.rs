// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Activity log sizing ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`gallery`]: Gallery value objects ([`VisibleThumbnails`](gallery::VisibleThumbnails),
//!   [`CrossFadeDelay`](gallery::CrossFadeDelay), [`CloseDelay`](gallery::CloseDelay),
//!   [`Direction`](gallery::Direction))
//! - [`interior`]: Showcase records ([`Interior`](interior::Interior),
//!   [`MediaItem`](interior::MediaItem))

pub mod diagnostics;
pub mod gallery;
pub mod interior;
