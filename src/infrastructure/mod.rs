// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the application ports.

pub mod system_scheme;
pub mod toml_store;

pub use system_scheme::DesktopSchemeSource;
pub use toml_store::TomlPreferenceStore;
