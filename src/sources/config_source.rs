//! Configuration source trait.

use crate::core::ConfigValue;
use crate::error::Result;
use std::collections::HashMap;

/// Trait for configuration sources.
///
/// Implement this trait to feed the store from anywhere (remote APIs,
/// databases, key-value stores). A source produces one flat mapping per call;
/// the store never holds on to it after merging.
///
/// # Examples
///
/// ```rust
/// use layered_config::core::ConfigValue;
/// use layered_config::error::Result;
/// use layered_config::sources::ConfigSource;
/// use std::collections::HashMap;
///
/// struct BuildInfo;
///
/// impl ConfigSource for BuildInfo {
///     fn load(&self) -> Result<HashMap<String, ConfigValue>> {
///         Ok(HashMap::from([(
///             "build.version".to_string(),
///             ConfigValue::from(env!("CARGO_PKG_VERSION")),
///         )]))
///     }
///
///     fn name(&self) -> String {
///         "build-info".to_string()
///     }
/// }
/// ```
pub trait ConfigSource: Send + Sync {
    /// Load configuration as a flat key-value map.
    ///
    /// Every returned key overwrites the same key in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn load(&self) -> Result<HashMap<String, ConfigValue>>;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;
}
