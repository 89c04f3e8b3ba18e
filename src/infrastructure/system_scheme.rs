// SPDX-License-Identifier: MPL-2.0
//! System color-scheme detection via the `dark-light` crate.

use crate::application::port::{SystemScheme, SystemSchemeSource};

/// [`SystemSchemeSource`] adapter backed by `dark_light::detect()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopSchemeSource;

impl SystemSchemeSource for DesktopSchemeSource {
    fn detect(&self) -> SystemScheme {
        // Default to dark when detection is unsupported or errors.
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            SystemScheme::Light
        } else {
            SystemScheme::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_does_not_panic() {
        // The result depends on the host; only verify the call completes.
        let _ = DesktopSchemeSource.detect();
    }
}
