// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::nav_drawer;
use crate::ui::sidebar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    Drawer(nav_drawer::Message),
    /// Re-sample the system color scheme (live tracking while in `auto`).
    PollSystemScheme,
    /// Animation frame while the drawer is sliding.
    Tick(Instant),
    /// The window was resized; may switch between layouts.
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for preferences.toml).
    /// Takes precedence over the `DOCSHELL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
