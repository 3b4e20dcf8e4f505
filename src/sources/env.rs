//! Environment variable configuration source.

use super::ConfigSource;
use super::flatten::flatten;
use crate::core::ConfigValue;
use crate::error::{ConfigError, Result};
use config::{Environment, Source};
use std::collections::HashMap;

/// Environment variable configuration source.
///
/// Picks up variables named `PREFIX_` + rest. The rest is lower-cased and
/// every separator becomes a `.`, so with the default `_` separator
/// `APP_SERVER_PORT` becomes `server.port`.
///
/// Values are parsed as `true`/`false`, then as an integer, then as a float,
/// and otherwise kept as strings.
///
/// # Examples
///
/// ```rust
/// use layered_config::sources::EnvSource;
///
/// // APP_SERVER_PORT=8080 -> server.port = 8080
/// let source = EnvSource::new("APP");
///
/// // APP_DB__HOST=x -> db.host = "x", while APP_MAX_CONNECTIONS keeps its underscore
/// let source = EnvSource::new("APP").with_separator("__");
/// ```
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    separator: String,
    vars: Option<config::Map<String, String>>,
}

impl EnvSource {
    /// Create a new environment variable source with the `_` separator.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: "_".to_string(),
            vars: None,
        }
    }

    /// Set the separator for nested keys (e.g. "__" for APP_DB__HOST).
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Read from the given variables instead of the process environment.
    #[must_use]
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    fn environment(&self) -> Environment {
        Environment::with_prefix(&self.prefix)
            .prefix_separator("_")
            .separator(&self.separator)
            .try_parsing(true)
            .source(self.vars.clone())
    }
}

impl ConfigSource for EnvSource {
    fn load(&self) -> Result<HashMap<String, ConfigValue>> {
        let mut table = self.environment().collect().map_err(|e| {
            ConfigError::Parse(format!("Failed to read environment variables: {}", e))
        })?;
        table.retain(|key, _| !key.is_empty());

        flatten(table)
    }

    fn name(&self) -> String {
        format!("env:{}*", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_source_creation() {
        let source = EnvSource::new("APP");
        assert_eq!(source.prefix, "APP");
        assert_eq!(source.separator, "_");
        assert!(source.vars.is_none());
    }

    #[test]
    fn test_name() {
        let source = EnvSource::new("APP");
        assert_eq!(source.name(), "env:APP*");
    }

    #[test]
    fn test_transliterates_keys_and_parses_values() {
        let source = EnvSource::new("APP").with_vars([
            ("APP_SERVER_PORT", "9090"),
            ("APP_DEBUG", "true"),
            ("APP_RATIO", "0.5"),
            ("APP_NAME", "svc"),
            ("OTHER_PORT", "1"),
        ]);

        let values = source.load().unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values["server.port"], ConfigValue::Int(9090));
        assert_eq!(values["debug"], ConfigValue::Bool(true));
        assert_eq!(values["ratio"], ConfigValue::Float(0.5));
        assert_eq!(values["name"], ConfigValue::from("svc"));
    }

    #[test]
    fn test_custom_separator() {
        let source = EnvSource::new("APP")
            .with_separator("__")
            .with_vars([("APP_DB__MAX_CONNECTIONS", "50")]);

        let values = source.load().unwrap();
        assert_eq!(values["db.max_connections"], ConfigValue::Int(50));
    }

    #[test]
    fn test_no_matching_vars() {
        let source = EnvSource::new("APP").with_vars([("PATH", "/usr/bin")]);
        assert!(source.load().unwrap().is_empty());
    }
}
