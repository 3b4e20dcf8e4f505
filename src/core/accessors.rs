//! Typed accessors over the store.
//!
//! Every accessor returns `None` both when the key is absent and when the
//! stored value cannot be read as the requested type. Use
//! [`ConfigStore::get`] and [`ConfigValue::kind`] when the two cases must be
//! told apart.

use crate::core::{ConfigStore, ConfigValue};

impl ConfigStore {
    /// Read the value under `key` through `f` while holding the read lock.
    fn read_with<T>(&self, key: &str, f: impl FnOnce(&ConfigValue) -> Option<T>) -> Option<T> {
        self.values.read().get(key).and_then(f)
    }

    /// Get a string value. Only string values match.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.read_with(key, |v| v.as_str().map(str::to_owned))
    }

    /// Get an integer value.
    ///
    /// Floats are truncated toward zero (`42.7` reads as `42`).
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.read_with(key, ConfigValue::as_int)
    }

    /// Get a float value. Integers are widened.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.read_with(key, ConfigValue::as_float)
    }

    /// Get a boolean value. Only boolean values match.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.read_with(key, ConfigValue::as_bool)
    }

    /// Get a list of strings.
    ///
    /// Loosely-typed lists match only when every element is a string; there is
    /// no partial result.
    pub fn get_string_slice(&self, key: &str) -> Option<Vec<String>> {
        self.read_with(key, ConfigValue::as_string_slice)
    }
}
