//! Error types for layered-config.

use crate::core::ValueKind;
use std::fmt;
use std::path::PathBuf;

/// Result type alias for layered-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source failed to produce its mapping. The store was left unchanged.
    #[error("Failed to load configuration from '{name}': {cause}")]
    SourceLoad {
        /// Name of the source that failed
        name: String,
        /// The underlying failure reported by the source
        #[source]
        cause: Box<ConfigError>,
    },

    /// Configuration validation failed.
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file extension does not map to a supported format.
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Failed to parse configuration content.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// A parsed value has a shape the store cannot hold.
    #[error("Cannot convert value for key '{key}': {reason}")]
    Conversion {
        /// The flattened key
        key: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Reading a configuration file failed for a reason other than absence.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Wrap a source failure with the name of the source that produced it.
    pub fn source_load(name: impl Into<String>, cause: ConfigError) -> Self {
        Self::SourceLoad {
            name: name.into(),
            cause: Box::new(cause),
        }
    }

    /// Create a conversion error for a key.
    pub fn conversion(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Conversion {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Validation error reported by the first failing validator.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required key is absent.
    MissingKey {
        /// The first missing key, in the order the validator was configured
        key: String,
    },

    /// A key holds a value of the wrong type.
    TypeMismatch {
        /// The key being checked
        key: String,
        /// The type the validator requires
        expected: ValueKind,
        /// The type actually stored
        actual: ValueKind,
    },

    /// A range check was applied to a non-numeric value.
    NotNumeric {
        /// The key being checked
        key: String,
        /// The type actually stored
        actual: ValueKind,
    },

    /// A numeric value lies outside the inclusive bounds.
    OutOfRange {
        /// The key being checked
        key: String,
        /// The stored value, widened to f64
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// A value required to be integral has a fractional part.
    NotInteger {
        /// The key being checked
        key: String,
        /// The stored value
        value: f64,
    },

    /// Custom validation error with a message.
    Custom(String),
}

impl ValidationError {
    /// Create a custom validation error.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create a missing key error.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// The key this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingKey { key }
            | Self::TypeMismatch { key, .. }
            | Self::NotNumeric { key, .. }
            | Self::OutOfRange { key, .. }
            | Self::NotInteger { key, .. } => Some(key),
            Self::Custom(_) => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { key } => {
                write!(f, "required configuration key missing: {}", key)
            }
            Self::TypeMismatch {
                key,
                expected,
                actual,
            } => write!(
                f,
                "invalid type for key {}: expected {}, got {}",
                key, expected, actual
            ),
            Self::NotNumeric { key, actual } => write!(
                f,
                "invalid type for range validation on key {}: expected number, got {}",
                key, actual
            ),
            Self::OutOfRange {
                key,
                value,
                min,
                max,
            } => write!(
                f,
                "value {} for key {} is out of range: expected between {} and {}",
                value, key, min, max
            ),
            Self::NotInteger { key, value } => {
                write!(f, "value {} for key {} must be an integer", value, key)
            }
            Self::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}
