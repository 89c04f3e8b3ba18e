// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters
//! implement. These traits use only domain types, so component logic can be
//! exercised in tests with in-memory fakes instead of a real desktop session.
//!
//! # Available Ports
//!
//! - [`prefs`]: durable key-value preference storage
//! - [`system_scheme`]: live system dark-preference lookup

pub mod prefs;
pub mod system_scheme;

// Re-export main types for convenience
pub use prefs::{PreferenceStore, PrefsError};
pub use system_scheme::{SystemScheme, SystemSchemeSource};
