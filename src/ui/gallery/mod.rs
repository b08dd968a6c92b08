// SPDX-License-Identifier: MPL-2.0
//! Interior gallery modal: media navigation, touch gestures and the
//! open/close lifecycle.
//!
//! - [`component`]: the controller the application talks to
//! - [`subcomponents`]: focused state machines composed by the controller
//! - [`view`]: the modal layer rendering

pub mod component;
pub mod subcomponents;
pub mod view;

pub use component::{Context, Effect, Message, Settings, State};
