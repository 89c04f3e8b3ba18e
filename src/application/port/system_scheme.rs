// SPDX-License-Identifier: MPL-2.0
//! System color-scheme lookup port.
//!
//! The operating system's dark-mode preference is a live condition: while the
//! user keeps the application in `auto` mode, the effective theme must keep
//! tracking it. The shell polls this port from a subscription instead of
//! sampling it once at startup.

/// Color scheme reported by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemScheme {
    Light,
    Dark,
}

impl SystemScheme {
    /// Returns `true` for [`SystemScheme::Dark`].
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, SystemScheme::Dark)
    }
}

/// Port for querying the current system color scheme.
pub trait SystemSchemeSource {
    /// Returns the scheme the operating system currently prefers.
    ///
    /// Implementations must not fail; when detection is impossible they pick
    /// a fixed default.
    fn detect(&self) -> SystemScheme;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scheme::{self, ColorSchemeMode};
    use crate::test_utils::FixedScheme;

    #[test]
    fn is_dark_matches_variant() {
        assert!(SystemScheme::Dark.is_dark());
        assert!(!SystemScheme::Light.is_dark());
    }

    #[test]
    fn auto_mode_activation_follows_the_source() {
        let on_dark_host = FixedScheme(SystemScheme::Dark);
        let on_light_host = FixedScheme(SystemScheme::Light);

        let dark = scheme::apply(ColorSchemeMode::Auto, on_dark_host.detect().is_dark());
        let light = scheme::apply(ColorSchemeMode::Auto, on_light_host.detect().is_dark());
        assert!(dark.dark_theme_active);
        assert!(!light.dark_theme_active);
    }
}
