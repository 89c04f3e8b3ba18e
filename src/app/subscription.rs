// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Three concerns, each active only while needed:
//! - window resize events, always on, for the layout breakpoint;
//! - animation frames, only while the drawer slide is in flight;
//! - system-scheme polling, only while the mode is `auto` (live tracking).

use super::{App, Message};
use crate::domain::scheme::ColorSchemeMode;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval between drawer animation frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Interval between system-scheme samples while in `auto` mode.
const SCHEME_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Builds the subscription set for the current application state.
pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![resize_events()];

    if app.drawer.is_sliding(app.now) {
        subscriptions.push(time::every(FRAME_INTERVAL).map(Message::Tick));
    }

    if app.theme_pref.mode() == ColorSchemeMode::Auto {
        subscriptions.push(time::every(SCHEME_POLL_INTERVAL).map(|_| Message::PollSystemScheme));
    }

    Subscription::batch(subscriptions)
}

fn resize_events() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| {
        if let iced::Event::Window(iced::window::Event::Resized(size)) = event {
            Some(Message::WindowResized(size))
        } else {
            None
        }
    })
}
