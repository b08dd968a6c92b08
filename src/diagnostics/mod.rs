// SPDX-License-Identifier: MPL-2.0
//! Activity log for gallery sessions.
//!
//! Gallery actions, modal transitions, warnings and errors are recorded into
//! a memory-bounded circular buffer and can be exported as a JSON report
//! (see the `--diagnostics-out` command-line flag).
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer and drains events sent
//!   through cloneable [`DiagnosticsHandle`]s

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle, SerializableEvent};
pub use events::{DiagnosticEvent, DiagnosticEventKind, GalleryState, MediaKind, UserAction};
