// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the host window.
//!
//! Only window resizes and key presses are forwarded; pointer input reaches
//! the sliders through their own widgets.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Forwards resizes and uncaptured key presses to `App::update`.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        let forward = match &event {
            event::Event::Window(window::Event::Resized(_)) => true,
            event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => {
                matches!(status, event::Status::Ignored)
            }
            _ => false,
        };
        forward.then_some(Message::Event(event))
    })
}

/// Periodic tick for autoplay timers and the resize debounce.
pub fn create_tick_subscription(interval: Duration) -> Subscription<Message> {
    time::every(interval).map(Message::Tick)
}
