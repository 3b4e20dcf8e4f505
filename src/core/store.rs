//! The concurrent key/value store and its merge engine.

use crate::core::{ConfigValue, Snapshot, Validator};
use crate::error::{ConfigError, Result};
use crate::logging::{debug, trace, warn_event};
use crate::sources::ConfigSource;
use arc_swap::ArcSwap;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Validators are kept in registration order.
type ValidatorList = Vec<Arc<dyn Validator>>;

/// A layered configuration store.
///
/// Values are kept in a flat map from string key to [`ConfigValue`], guarded by
/// a reader/writer lock: any number of readers proceed together, while a
/// [`set`](Self::set), a [`load`](Self::load) merge or a snapshot read holds the
/// lock alone. Share a store between threads by wrapping it in an `Arc`.
///
/// Precedence is expressed purely by call order: every `load` overwrites the
/// keys its source produces and leaves all other keys alone, so the last
/// source loaded wins.
///
/// # Examples
///
/// ```rust
/// use layered_config::prelude::*;
/// use layered_config::sources::DefaultSource;
///
/// # fn example() -> Result<()> {
/// let store = ConfigStore::new();
/// store.load(&DefaultSource::new().with_value("port", 8080).with_value("host", "localhost"))?;
/// store.load(&DefaultSource::new().with_value("port", 9090))?;
///
/// assert_eq!(store.get_int("port"), Some(9090));
/// assert_eq!(store.get_string("host").as_deref(), Some("localhost"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct ConfigStore {
    pub(super) values: RwLock<HashMap<String, ConfigValue>>,
    validators: ArcSwap<ValidatorList>,
}

impl ConfigStore {
    /// Create an empty store with no validators.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            validators: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Get the raw value stored under `key`.
    ///
    /// Returns `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.values.read().get(key).cloned()
    }

    /// Set `key` to `value`, replacing any previous value.
    ///
    /// No validation happens at write time.
    ///
    /// # Errors
    ///
    /// Currently infallible. The `Result` is part of the write contract so that
    /// write-time constraints can be introduced without breaking callers.
    pub fn set(&self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        trace!(key = %key, kind = %value.kind(), "setting configuration value");

        self.values.write().insert(key, value);
        Ok(())
    }

    /// Merge the mapping produced by `source` into the store.
    ///
    /// The source is read without holding any lock. Its keys are then written
    /// in a single critical section, so readers see either none or all of them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceLoad`] wrapping the source's failure. The
    /// store is not modified in that case.
    pub fn load<S>(&self, source: &S) -> Result<()>
    where
        S: ConfigSource + ?Sized,
    {
        let values = match source.load() {
            Ok(values) => values,
            Err(e) => {
                let name = source.name();
                warn_event!(source = %name, error = %e, "configuration source failed to load");
                return Err(ConfigError::source_load(name, e));
            }
        };

        debug!(source = %source.name(), keys = values.len(), "merging configuration source");
        self.values.write().extend(values);

        Ok(())
    }

    /// Take a consistent copy of every key and value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.values.read().clone())
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }

    /// Number of keys in the store.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.values.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Append a validator to the pipeline.
    ///
    /// Validators run in registration order. There is no de-duplication and
    /// no way to remove a validator once added.
    pub fn add_validator<V>(&self, validator: V)
    where
        V: Validator + 'static,
    {
        self.push_validator(Arc::new(validator));
    }

    pub(crate) fn push_validator(&self, validator: Arc<dyn Validator>) {
        self.validators.rcu(|current| {
            let mut next = ValidatorList::clone(current);
            next.push(Arc::clone(&validator));
            next
        });
    }

    /// Number of registered validators.
    pub fn validator_count(&self) -> usize {
        self.validators.load().len()
    }

    /// Run every validator against one snapshot of the store.
    ///
    /// Validation stops at the first failure; later validators are not run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] carrying the first validator error.
    pub fn validate(&self) -> Result<()> {
        let snapshot = self.snapshot();
        let validators = self.validators.load();
        debug!(
            validators = validators.len(),
            keys = snapshot.len(),
            "validating configuration"
        );

        for validator in validators.iter() {
            if let Err(e) = validator.validate(&snapshot) {
                warn_event!(error = %e, "configuration validation failed");
                return Err(e.into());
            }
        }

        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("values", &*self.values.read())
            .field("validators", &self.validator_count())
            .finish()
    }
}
