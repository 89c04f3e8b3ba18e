// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers: port fakes and float comparison re-exports.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::{PreferenceStore, PrefsError, SystemScheme, SystemSchemeSource};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-4;

/// In-memory [`PreferenceStore`] fake.
///
/// Clones share the same backing map, so a "relaunch" can be simulated by
/// loading a second component from a clone of the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: Rc<RefCell<BTreeMap<String, String>>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a key before the component under test loads.
    pub fn seed(&self, key: &str, value: &str) {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Returns the raw stored value, bypassing failure simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        if self.fail_reads {
            return Err(PrefsError::Io("simulated read failure".to_string()));
        }
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        if self.fail_writes {
            return Err(PrefsError::Io("simulated write failure".to_string()));
        }
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// [`SystemSchemeSource`] fake reporting a fixed scheme.
#[derive(Debug, Clone, Copy)]
pub struct FixedScheme(pub SystemScheme);

impl SystemSchemeSource for FixedScheme {
    fn detect(&self) -> SystemScheme {
        self.0
    }
}
