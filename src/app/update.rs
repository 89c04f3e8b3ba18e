// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message};
use crate::application::port::SystemSchemeSource;
use crate::domain::scheme::ColorSchemeMode;
use crate::ui::nav_drawer;
use crate::ui::sidebar;
use iced::Task;
use std::time::Instant;

/// Processes a message against the application state.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    handle(app, message, Instant::now())
}

/// Core update logic with an injected clock, so tests control time.
pub(crate) fn handle(app: &mut App, message: Message, now: Instant) -> Task<Message> {
    app.now = now;

    match message {
        Message::Sidebar(sidebar::Message::Navigate(page)) => {
            app.page = page;
        }
        Message::Sidebar(sidebar::Message::SchemeSelected(mode)) => {
            select_scheme(app, mode);
        }
        Message::Drawer(message) => match nav_drawer::update(message, &mut app.drawer, now) {
            nav_drawer::Event::None => {}
            nav_drawer::Event::Navigate(page) => {
                app.page = page;
            }
            nav_drawer::Event::SchemeSelected(mode) => {
                select_scheme(app, mode);
            }
        },
        Message::PollSystemScheme => {
            app.system_dark = app.scheme_source.detect().is_dark();
        }
        Message::Tick(_) => {
            // app.now already advanced; the view re-samples the drawer offset.
        }
        Message::WindowResized(size) => {
            app.window_width = size.width;
            // The drawer markup disappears in the wide layout; make sure it
            // does not reappear mid-open when the window narrows again.
            if !app.is_compact() && app.drawer.is_expanded() {
                app.drawer.toggle(now);
            }
        }
    }

    Task::none()
}

/// Applies a scheme selection from any selector control.
///
/// The preference component persists the value; both selectors render from
/// `App::scheme_effects`, so they cannot diverge.
fn select_scheme(app: &mut App, mode: ColorSchemeMode) {
    // Polling is off while a fixed mode is forced, so the cached sample may
    // be stale; re-read it before auto takes effect.
    if mode == ColorSchemeMode::Auto {
        app.system_dark = app.scheme_source.detect().is_dark();
    }
    app.theme_pref.set(mode, app.system_dark);
}
