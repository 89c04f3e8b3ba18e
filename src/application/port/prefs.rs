// SPDX-License-Identifier: MPL-2.0
//! Durable preference storage port.
//!
//! Preferences are a flat map of string keys to string values that survive
//! application restarts. The store may be unavailable (unwritable config
//! directory, corrupt file); callers are expected to degrade to session-only
//! defaults rather than surface the failure to the user.

use std::fmt;

// =============================================================================
// PrefsError
// =============================================================================

/// Errors that can occur while reading or writing preferences.
#[derive(Debug, Clone)]
pub enum PrefsError {
    /// No storage location could be determined for this platform.
    Unavailable,

    /// The backing file could not be read or written.
    Io(String),

    /// The stored data could not be encoded or decoded.
    Format(String),
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::Unavailable => write!(f, "No preference storage available"),
            PrefsError::Io(msg) => write!(f, "Preference I/O error: {msg}"),
            PrefsError::Format(msg) => write!(f, "Preference format error: {msg}"),
        }
    }
}

impl std::error::Error for PrefsError {}

// =============================================================================
// PreferenceStore Trait
// =============================================================================

/// Port for durable key-value preference storage.
///
/// Writes are last-write-wins; no cross-process synchronization is promised.
/// Two instances pointed at the same backing location observe each other's
/// writes only on the next `get`.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`PrefsError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`PrefsError`] if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}
