// SPDX-License-Identifier: MPL-2.0
//! Interior domain types.

mod types;

pub use types::{DocumentFile, Interior, InteriorId, MediaItem};
