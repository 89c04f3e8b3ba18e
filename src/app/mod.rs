// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the color-scheme preference, the system-scheme
//! source, and the navigation state together, and translates messages into
//! side effects like preference persistence. Policy decisions (window sizing,
//! compact breakpoint handling, scheme application) stay close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
pub mod page;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SystemSchemeSource;
use crate::domain::scheme::SchemeEffects;
use crate::infrastructure::{DesktopSchemeSource, TomlPreferenceStore};
use crate::ui::design_tokens::layout;
use crate::ui::nav_drawer;
use crate::ui::theme_preference::ThemePreference;
use iced::{window, Element, Subscription, Task, Theme};
use page::Page;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    theme_pref: ThemePreference<TomlPreferenceStore>,
    scheme_source: DesktopSchemeSource,
    /// Last observed system dark preference; refreshed by polling while the
    /// mode is `auto`.
    system_dark: bool,
    page: Page,
    drawer: nav_drawer::State,
    window_width: f32,
    /// Instant of the last processed message; drives the drawer animation.
    now: Instant,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the application: registers path overrides, loads the
    /// persisted scheme, and samples the system preference once.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let store = TomlPreferenceStore::new();
        let theme_pref = ThemePreference::load(store);
        let scheme_source = DesktopSchemeSource;
        let system_dark = scheme_source.detect().is_dark();

        (
            Self {
                theme_pref,
                scheme_source,
                system_dark,
                page: Page::default(),
                drawer: nav_drawer::State::new(),
                window_width: WINDOW_DEFAULT_WIDTH as f32,
                now: Instant::now(),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    pub fn title(&self) -> String {
        format!("Larch Manual: {}", self.page.title())
    }

    /// Maps the theme resource's active state to the Iced theme.
    pub fn theme(&self) -> Theme {
        if self.scheme_effects().dark_theme_active {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Effects of the current mode under the last observed system scheme.
    pub(crate) fn scheme_effects(&self) -> SchemeEffects {
        self.theme_pref.effects(self.system_dark)
    }

    /// Whether the window is narrow enough for the drawer layout.
    pub(crate) fn is_compact(&self) -> bool {
        self.window_width < layout::COMPACT_BREAKPOINT
    }

    /// Bare application state for update/view tests; touches no storage and
    /// bypasses CLI override registration.
    #[cfg(test)]
    pub(crate) fn bare() -> Self {
        Self {
            theme_pref: ThemePreference::load(TomlPreferenceStore::with_dir(None)),
            scheme_source: DesktopSchemeSource,
            system_dark: false,
            page: Page::default(),
            drawer: nav_drawer::State::new(),
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            now: Instant::now(),
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("mode", &self.theme_pref.mode())
            .field("drawer_expanded", &self.drawer.is_expanded())
            .finish()
    }
}
