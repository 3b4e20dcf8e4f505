//! Literal default values.

use super::ConfigSource;
use super::flatten::flatten;
use crate::core::ConfigValue;
use crate::error::{ConfigError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// A configuration source backed by a literal map.
///
/// Usually loaded first so that files and environment variables can override
/// it.
///
/// # Examples
///
/// ```rust
/// use layered_config::sources::DefaultSource;
///
/// let defaults = DefaultSource::new()
///     .with_value("server.port", 8080)
///     .with_value("server.host", "localhost");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultSource {
    values: HashMap<String, ConfigValue>,
}

impl DefaultSource {
    /// Create an empty default source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a single value.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Build defaults from any serializable value.
    ///
    /// Struct fields become keys; nested structs flatten to dotted keys and
    /// `None` fields are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layered_config::sources::DefaultSource;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Server {
    ///     port: u16,
    /// }
    ///
    /// #[derive(Serialize)]
    /// struct Defaults {
    ///     server: Server,
    /// }
    ///
    /// let source = DefaultSource::from_serialize(&Defaults {
    ///     server: Server { port: 8080 },
    /// })
    /// .unwrap();
    /// assert_eq!(source.len(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `value` does not serialize to a table of supported
    /// values.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        let table = config::Config::try_from(value)
            .and_then(|cfg| cfg.try_deserialize::<config::Map<String, config::Value>>())
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize defaults: {}", e)))?;

        Ok(Self {
            values: flatten(table)?,
        })
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the source holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, ConfigValue)> for DefaultSource {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, ConfigValue>> for DefaultSource {
    fn from(values: HashMap<String, ConfigValue>) -> Self {
        Self { values }
    }
}

impl ConfigSource for DefaultSource {
    fn load(&self) -> Result<HashMap<String, ConfigValue>> {
        Ok(self.values.clone())
    }

    fn name(&self) -> String {
        "defaults".to_string()
    }
}
