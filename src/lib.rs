//! # layered-config
//!
//! Layered, type-coercing key/value configuration with ordered sources and
//! validation.
//!
//! ## Overview
//!
//! `layered-config` keeps configuration in a flat, thread-safe map from string
//! keys to dynamically-typed values:
//! - Sources (defaults, files, environment variables) are merged in the order
//!   they are loaded; the last source to define a key wins
//! - A failed load leaves the store untouched
//! - Typed accessors apply narrow coercions (integer ↔ float) and nothing else
//! - Validators run in order against one consistent snapshot and stop at the
//!   first failure
//!
//! ## Quick Start
//!
//! ```rust
//! use layered_config::prelude::*;
//! use layered_config::sources::{DefaultSource, EnvSource};
//!
//! # fn example() -> Result<()> {
//! let store = ConfigStore::new();
//!
//! // Lowest precedence first
//! store.load(&DefaultSource::new().with_value("port", 8080).with_value("host", "localhost"))?;
//! store.load(&EnvSource::new("APP").with_vars([("APP_PORT", "9090")]))?;
//!
//! store.add_validator(RequiredValidator::new(["port", "host"]));
//! store.add_validator(RangeValidator::new("port", 1024.0, 65535.0).integer());
//! store.validate()?;
//!
//! assert_eq!(store.get_int("port"), Some(9090));
//! assert_eq!(store.get_string("host").as_deref(), Some("localhost"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Keys are flat: `server.port` is a single key. File sources flatten nested
//! tables into such dotted keys.
//!
//! ## Feature Flags
//!
//! - `validation` (default): built-in `RequiredValidator`, `TypeValidator`
//!   and `RangeValidator`
//! - `tracing` (default): emit `tracing` events for loads and validation

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

mod logging;

pub mod core;
pub mod error;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{
        ConfigStore, ConfigStoreBuilder, ConfigValue, Snapshot, Validator, ValueKind,
    };
    pub use crate::error::{ConfigError, Result, ValidationError};
    pub use crate::sources::ConfigSource;

    #[cfg(feature = "validation")]
    pub use crate::core::{RangeValidator, RequiredValidator, TypeValidator};
}
