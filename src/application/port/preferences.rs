// SPDX-License-Identifier: MPL-2.0
//! Persisted key-value preference port.

use crate::error::Result;

/// A tiny string key-value store persisted across sessions.
///
/// The only key written by the page today is `"theme"`.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
