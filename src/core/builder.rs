//! Builder for constructing ConfigStore instances.

use crate::core::{ConfigStore, ConfigValue, Validator};
use crate::error::Result;
use crate::sources::{ConfigSource, DefaultSource, EnvSource, FileSource};
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for constructing a loaded and validated [`ConfigStore`].
///
/// Sources are applied in the order they are added: later sources override
/// earlier ones key by key. After all sources load, the registered validators
/// run once.
///
/// # Examples
///
/// ```rust,no_run
/// use layered_config::prelude::*;
///
/// # fn example() -> Result<()> {
/// let store = ConfigStore::builder()
///     .with_defaults([("server.port", ConfigValue::from(8080))])
///     .with_file("config/default.yaml")
///     .with_env("APP")
///     .with_validator(RequiredValidator::new(["server.port"]))
///     .build()?;
///
/// let port = store.get_int("server.port");
/// # Ok(())
/// # }
/// ```
pub struct ConfigStoreBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
    validators: Vec<Arc<dyn Validator>>,
}

impl ConfigStoreBuilder {
    /// Create a new builder with no sources and no validators.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// Add literal default values.
    pub fn with_defaults<I, K>(self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: Into<String>,
    {
        let source: DefaultSource = values
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        self.with_source(source)
    }

    /// Add a file source with automatic format detection.
    ///
    /// Supported formats: YAML (.yaml, .yml), TOML (.toml), JSON (.json)
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_source(FileSource::new(path))
    }

    /// Add environment variables starting with `prefix`.
    ///
    /// `APP_SERVER_PORT` becomes `server.port` for the prefix `APP`.
    pub fn with_env(self, prefix: impl Into<String>) -> Self {
        self.with_source(EnvSource::new(prefix))
    }

    /// Add a custom configuration source.
    pub fn with_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Add a validator that must pass before the store is returned.
    pub fn with_validator<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Load every source in order, then validate.
    ///
    /// The validators stay registered on the returned store, so later calls to
    /// [`ConfigStore::validate`] re-check them.
    ///
    /// # Errors
    ///
    /// Returns the first source failure or the first validation failure.
    pub fn build(self) -> Result<ConfigStore> {
        let store = ConfigStore::new();

        for source in &self.sources {
            store.load(source.as_ref())?;
        }

        for validator in self.validators {
            store.push_validator(validator);
        }

        store.validate()?;
        Ok(store)
    }
}

impl Default for ConfigStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Create a builder for a store.
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }
}
