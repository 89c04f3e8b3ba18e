// SPDX-License-Identifier: MPL-2.0
//! Color-scheme domain types.
//!
//! The displayed theme is controlled by a single [`ColorSchemeMode`] value.
//! Two style resources depend on it: the widget theme and the code-highlight
//! palette. Each resource is governed by a [`StyleActivation`] condition that
//! is a pure function of the mode, so the whole pipeline from "user picked a
//! mode" to "which resources are active" can be tested without a UI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-selectable color-scheme mode.
///
/// `Auto` follows the operating system's dark-mode preference, the other two
/// force a fixed scheme regardless of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemeMode {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ColorSchemeMode {
    /// All modes, in the order selector controls display them.
    pub const ALL: [ColorSchemeMode; 3] = [
        ColorSchemeMode::Auto,
        ColorSchemeMode::Light,
        ColorSchemeMode::Dark,
    ];

    /// The string stored in the preference store for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ColorSchemeMode::Auto => "auto",
            ColorSchemeMode::Light => "light",
            ColorSchemeMode::Dark => "dark",
        }
    }

    /// Parses a stored preference value.
    ///
    /// Unrecognized values fall back to `Auto` rather than erroring: a stale
    /// or hand-edited preferences file must never break startup.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        match raw.trim() {
            "light" => ColorSchemeMode::Light,
            "dark" => ColorSchemeMode::Dark,
            _ => ColorSchemeMode::Auto,
        }
    }

    /// Returns the activation condition this mode imposes on the dark-style
    /// resources.
    #[must_use]
    pub fn activation(self) -> StyleActivation {
        match self {
            ColorSchemeMode::Auto => StyleActivation::WhenSystemDark,
            ColorSchemeMode::Light => StyleActivation::Never,
            ColorSchemeMode::Dark => StyleActivation::Always,
        }
    }
}

impl fmt::Display for ColorSchemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColorSchemeMode::Auto => "Auto",
            ColorSchemeMode::Light => "Light",
            ColorSchemeMode::Dark => "Dark",
        };
        write!(f, "{}", label)
    }
}

/// Applicability condition for a style resource.
///
/// `WhenSystemDark` is a live condition: while it is in effect the resource
/// keeps tracking system preference changes, it is not a one-time sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleActivation {
    Always,
    Never,
    WhenSystemDark,
}

impl StyleActivation {
    /// Evaluates the condition against the current system dark preference.
    #[must_use]
    pub fn is_active(self, system_dark: bool) -> bool {
        match self {
            StyleActivation::Always => true,
            StyleActivation::Never => false,
            StyleActivation::WhenSystemDark => system_dark,
        }
    }
}

/// Observable effects of applying a color-scheme mode.
///
/// This is the single source of truth pushed to every observer after a
/// mutation: the value each selector control must display and the
/// active/inactive state of both dark-style resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeEffects {
    /// Value every selector control on screen must show.
    pub selector_value: ColorSchemeMode,
    /// Whether the dark widget theme is in effect.
    pub dark_theme_active: bool,
    /// Whether the dark code-highlight palette is in effect.
    pub dark_highlight_active: bool,
}

/// Computes the effects of `mode` under the given system preference.
#[must_use]
pub fn apply(mode: ColorSchemeMode, system_dark: bool) -> SchemeEffects {
    let active = mode.activation().is_active(system_dark);
    SchemeEffects {
        selector_value: mode,
        dark_theme_active: active,
        dark_highlight_active: active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_round_trip_for_every_mode() {
        for mode in ColorSchemeMode::ALL {
            assert_eq!(ColorSchemeMode::from_stored(mode.as_str()), mode);
        }
    }

    #[test]
    fn unrecognized_stored_value_falls_back_to_auto() {
        assert_eq!(
            ColorSchemeMode::from_stored("solarized"),
            ColorSchemeMode::Auto
        );
        assert_eq!(ColorSchemeMode::from_stored(""), ColorSchemeMode::Auto);
        assert_eq!(
            ColorSchemeMode::from_stored("DARKEST"),
            ColorSchemeMode::Auto
        );
    }

    #[test]
    fn stored_value_tolerates_surrounding_whitespace() {
        assert_eq!(
            ColorSchemeMode::from_stored(" dark\n"),
            ColorSchemeMode::Dark
        );
    }

    #[test]
    fn light_mode_never_activates_resources() {
        for system_dark in [false, true] {
            let effects = apply(ColorSchemeMode::Light, system_dark);
            assert!(!effects.dark_theme_active);
            assert!(!effects.dark_highlight_active);
        }
    }

    #[test]
    fn dark_mode_always_activates_resources() {
        for system_dark in [false, true] {
            let effects = apply(ColorSchemeMode::Dark, system_dark);
            assert!(effects.dark_theme_active);
            assert!(effects.dark_highlight_active);
        }
    }

    #[test]
    fn auto_mode_tracks_system_preference() {
        assert!(apply(ColorSchemeMode::Auto, true).dark_theme_active);
        assert!(!apply(ColorSchemeMode::Auto, false).dark_theme_active);
    }

    #[test]
    fn both_resources_share_the_activation_condition() {
        for mode in ColorSchemeMode::ALL {
            for system_dark in [false, true] {
                let effects = apply(mode, system_dark);
                assert_eq!(effects.dark_theme_active, effects.dark_highlight_active);
            }
        }
    }

    #[test]
    fn effects_carry_the_selected_mode_for_controls() {
        for mode in ColorSchemeMode::ALL {
            assert_eq!(apply(mode, true).selector_value, mode);
        }
    }

    #[test]
    fn default_mode_is_auto() {
        assert_eq!(ColorSchemeMode::default(), ColorSchemeMode::Auto);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([(
            "mode",
            ColorSchemeMode::Dark,
        )]))
        .expect("serialize mode");
        assert!(toml.contains("\"dark\""));
    }
}
