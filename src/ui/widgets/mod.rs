// SPDX-License-Identifier: MPL-2.0
pub mod scroll_gate;
pub mod swipe_area;

pub use scroll_gate::{scroll_gate, ScrollGate};
pub use swipe_area::{swipe_area, SwipeArea};
