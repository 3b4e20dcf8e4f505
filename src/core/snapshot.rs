//! Point-in-time copies of the store contents.

use crate::core::ConfigValue;
use std::collections::HashMap;
use std::collections::hash_map;

/// A consistent copy of every key and value in a [`ConfigStore`](crate::core::ConfigStore)
/// at one instant.
///
/// Validators receive a snapshot so that all of them observe the same state,
/// regardless of writes that happen while validation runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    values: HashMap<String, ConfigValue>,
}

impl Snapshot {
    pub(crate) fn new(values: HashMap<String, ConfigValue>) -> Self {
        Self { values }
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, ConfigValue> {
        self.values.iter()
    }

    /// Consume the snapshot, returning the underlying map.
    pub fn into_inner(self) -> HashMap<String, ConfigValue> {
        self.values
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = hash_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl FromIterator<(String, ConfigValue)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
