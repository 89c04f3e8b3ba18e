// SPDX-License-Identifier: MPL-2.0
//! Persistent color-scheme preference component.
//!
//! This is the single source of truth for the selected [`ColorSchemeMode`].
//! Every mutation goes through [`ThemePreference::set`], which persists the
//! value and returns the [`SchemeEffects`] to push to every observer: the two
//! dark-style resources and however many selector controls the current layout
//! renders (the wide layout has one in the sidebar, the compact layout one in
//! the drawer menu; a layout may also render none).
//!
//! Storage failures are tolerated: an unreadable store degrades to the `auto`
//! default for the session, an unwritable store keeps the in-memory value so
//! the UI stays consistent until the process exits.

use crate::application::port::PreferenceStore;
use crate::domain::scheme::{self, ColorSchemeMode, SchemeEffects};

/// Fixed key under which the mode is persisted.
pub const COLOR_SCHEME_KEY: &str = "color-scheme";

/// Color-scheme preference backed by a [`PreferenceStore`].
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    mode: ColorSchemeMode,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Loads the persisted mode from `store`.
    ///
    /// An absent key, an unreadable store, or an unrecognized stored value
    /// all fall back to [`ColorSchemeMode::Auto`]; loading never fails.
    pub fn load(store: S) -> Self {
        let mode = match store.get(COLOR_SCHEME_KEY) {
            Ok(Some(raw)) => ColorSchemeMode::from_stored(&raw),
            Ok(None) | Err(_) => ColorSchemeMode::Auto,
        };
        Self { store, mode }
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> ColorSchemeMode {
        self.mode
    }

    /// Selects `mode`, persists it, and returns the effects to apply.
    ///
    /// The persisted entry is overwritten (last-write-wins); a write failure
    /// is swallowed and the selection still takes effect for this session.
    pub fn set(&mut self, mode: ColorSchemeMode, system_dark: bool) -> SchemeEffects {
        self.mode = mode;
        let _ = self.store.set(COLOR_SCHEME_KEY, mode.as_str());
        self.effects(system_dark)
    }

    /// Computes the effects of the current mode without mutating anything.
    ///
    /// Used at startup and whenever the system preference changes while the
    /// mode is `Auto` (live tracking).
    #[must_use]
    pub fn effects(&self, system_dark: bool) -> SchemeEffects {
        scheme::apply(self.mode, system_dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemoryStore;

    #[test]
    fn fresh_store_defaults_to_auto() {
        let pref = ThemePreference::load(MemoryStore::new());
        assert_eq!(pref.mode(), ColorSchemeMode::Auto);
    }

    #[test]
    fn load_reads_persisted_mode() {
        let store = MemoryStore::new();
        store.seed(COLOR_SCHEME_KEY, "dark");
        let pref = ThemePreference::load(store);
        assert_eq!(pref.mode(), ColorSchemeMode::Dark);
    }

    #[test]
    fn load_treats_unrecognized_value_as_auto() {
        let store = MemoryStore::new();
        store.seed(COLOR_SCHEME_KEY, "sepia");
        let pref = ThemePreference::load(store);
        assert_eq!(pref.mode(), ColorSchemeMode::Auto);
    }

    #[test]
    fn load_tolerates_unreadable_store() {
        let mut store = MemoryStore::new();
        store.fail_reads = true;
        let pref = ThemePreference::load(store);
        assert_eq!(pref.mode(), ColorSchemeMode::Auto);
    }

    #[test]
    fn set_persists_under_the_fixed_key() {
        let store = MemoryStore::new();
        let mut pref = ThemePreference::load(store.clone());

        pref.set(ColorSchemeMode::Dark, false);
        assert_eq!(store.raw(COLOR_SCHEME_KEY), Some("dark".to_string()));
    }

    #[test]
    fn set_is_idempotent() {
        let store = MemoryStore::new();
        let mut pref = ThemePreference::load(store.clone());

        let first = pref.set(ColorSchemeMode::Light, true);
        let second = pref.set(ColorSchemeMode::Light, true);

        assert_eq!(first, second);
        assert_eq!(store.raw(COLOR_SCHEME_KEY), Some("light".to_string()));
    }

    #[test]
    fn persistence_round_trips_across_relaunch() {
        let store = MemoryStore::new();
        let mut pref = ThemePreference::load(store.clone());
        pref.set(ColorSchemeMode::Dark, false);

        // A second load over the same backing map simulates a fresh launch.
        let relaunched = ThemePreference::load(store);
        assert_eq!(relaunched.mode(), ColorSchemeMode::Dark);
    }

    #[test]
    fn write_failure_keeps_session_value() {
        let mut store = MemoryStore::new();
        store.fail_writes = true;
        let mut pref = ThemePreference::load(store.clone());

        let effects = pref.set(ColorSchemeMode::Dark, false);
        assert_eq!(pref.mode(), ColorSchemeMode::Dark);
        assert!(effects.dark_theme_active);
        assert_eq!(store.raw(COLOR_SCHEME_KEY), None);
    }

    #[test]
    fn effects_report_mode_for_every_selector() {
        let mut pref = ThemePreference::load(MemoryStore::new());
        for mode in ColorSchemeMode::ALL {
            let effects = pref.set(mode, true);
            // Whatever number of selector controls a layout renders, they all
            // display this one value.
            assert_eq!(effects.selector_value, mode);
        }
    }

    #[test]
    fn auto_effects_follow_system_preference() {
        let pref = ThemePreference::load(MemoryStore::new());
        assert!(pref.effects(true).dark_theme_active);
        assert!(!pref.effects(false).dark_theme_active);
    }

    #[test]
    fn dark_selection_scenario() {
        // User selects dark, resources activate regardless of system, the
        // store holds "dark", and a reload still yields dark.
        let store = MemoryStore::new();
        let mut pref = ThemePreference::load(store.clone());

        let effects = pref.set(ColorSchemeMode::Dark, false);
        assert!(effects.dark_theme_active);
        assert!(effects.dark_highlight_active);
        assert_eq!(store.raw(COLOR_SCHEME_KEY), Some("dark".to_string()));

        let reloaded = ThemePreference::load(store);
        assert_eq!(reloaded.mode(), ColorSchemeMode::Dark);
        assert!(reloaded.effects(false).dark_theme_active);
    }
}
