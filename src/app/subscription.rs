// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard and window events to top-level messages. Gallery
//! shortcuts are only forwarded when no widget captured the key press; the
//! gallery itself decides whether its current phase accepts them.

use super::Message;
use crate::ui::gallery;
use crate::ui::gallery::subcomponents::lifecycle::Shortcut;
use iced::keyboard::{self, key};
use iced::{event, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| route_event(&event, status, window_id))
}

fn route_event(event: &Event, status: event::Status, window_id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            if matches!(key, keyboard::Key::Named(key::Named::F5)) {
                return Some(Message::Reload);
            }
            if status == event::Status::Captured {
                return None;
            }
            Shortcut::from_key(key)
                .map(|shortcut| Message::Gallery(gallery::Message::Shortcut(shortcut)))
        }
        _ => None,
    }
}
