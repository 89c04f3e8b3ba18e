// SPDX-License-Identifier: MPL-2.0
//! End-to-end preference persistence: component + real TOML store.

use docshell::domain::scheme::ColorSchemeMode;
use docshell::infrastructure::TomlPreferenceStore;
use docshell::ui::theme_preference::{ThemePreference, COLOR_SCHEME_KEY};
use tempfile::tempdir;

#[test]
fn scheme_survives_a_simulated_relaunch() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = dir.path().to_path_buf();

    // First launch: no stored preference, effective mode is auto.
    let store = TomlPreferenceStore::with_dir(Some(base.clone()));
    let mut pref = ThemePreference::load(store);
    assert_eq!(pref.mode(), ColorSchemeMode::Auto);

    // User selects dark; both resources activate even on a light system.
    let effects = pref.set(ColorSchemeMode::Dark, false);
    assert!(effects.dark_theme_active);
    assert!(effects.dark_highlight_active);

    // Relaunch: a fresh store over the same directory yields dark without
    // any system-preference dependency.
    let relaunched = ThemePreference::load(TomlPreferenceStore::with_dir(Some(base)));
    assert_eq!(relaunched.mode(), ColorSchemeMode::Dark);
    assert!(relaunched.effects(false).dark_theme_active);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn stale_preference_value_degrades_to_auto() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, format!("{} = \"high-contrast\"\n", COLOR_SCHEME_KEY))
        .expect("Failed to seed preferences file");

    let pref = ThemePreference::load(TomlPreferenceStore::with_dir(Some(
        dir.path().to_path_buf(),
    )));
    assert_eq!(pref.mode(), ColorSchemeMode::Auto);
}

#[test]
fn selecting_a_scheme_writes_the_fixed_key() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = dir.path().to_path_buf();

    let mut pref = ThemePreference::load(TomlPreferenceStore::with_dir(Some(base.clone())));
    pref.set(ColorSchemeMode::Light, true);

    let content =
        std::fs::read_to_string(base.join("preferences.toml")).expect("preferences file exists");
    assert!(content.contains(COLOR_SCHEME_KEY));
    assert!(content.contains("light"));
}
