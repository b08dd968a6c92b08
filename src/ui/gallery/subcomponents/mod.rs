// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the gallery modal.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── lifecycle   - Modal phases, enter/close timers, shortcuts
//!     ├── navigation  - Image/video indices, cross-fade, thumbnail window
//!     ├── gesture     - Touch swipe interpretation
//!     ├── scroll_lock - Page overflow save/restore
//!     └── timer       - Generation-token timer slots
//! ```

pub mod gesture;
pub mod lifecycle;
pub mod navigation;
pub mod scroll_lock;
pub mod timer;
