//! Dynamically-typed configuration values.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single configuration value.
///
/// Values are flat: a key like `server.port` maps to one scalar or list, never
/// to a nested table. `List` is the loosely-typed sequence that sources produce
/// before any coercion; `StringList` is a sequence already known to hold only
/// strings.
///
/// # Examples
///
/// ```rust
/// use layered_config::core::{ConfigValue, ValueKind};
///
/// let port = ConfigValue::from(8080);
/// assert_eq!(port.kind(), ValueKind::Int);
/// assert_eq!(port.as_float(), Some(8080.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    String(String),
    /// Sequence of strings.
    StringList(Vec<String>),
    /// Sequence of arbitrary values.
    List(Vec<ConfigValue>),
}

/// The type tag of a [`ConfigValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`ConfigValue::Bool`]
    Bool,
    /// [`ConfigValue::Int`]
    Int,
    /// [`ConfigValue::Float`]
    Float,
    /// [`ConfigValue::String`]
    String,
    /// [`ConfigValue::StringList`]
    StringList,
    /// [`ConfigValue::List`]
    List,
}

impl ValueKind {
    /// Lowercase name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::StringList => "string list",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigValue {
    /// The type tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::StringList(_) => ValueKind::StringList,
            Self::List(_) => ValueKind::List,
        }
    }

    /// The value as a string slice. No coercion from other types.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The value as an integer.
    ///
    /// Floats are truncated toward zero, saturating at the `i64` bounds.
    /// NaN and infinite floats do not convert.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            _ => None,
        }
    }

    /// The value as a float. Integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The value as a boolean. No coercion from other types.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The value as a list of strings.
    ///
    /// A `List` converts only when every element is a string; a single
    /// non-string element fails the whole conversion.
    pub fn as_string_slice(&self) -> Option<Vec<String>> {
        match self {
            Self::StringList(items) => Some(items.clone()),
            Self::List(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect(),
            _ => None,
        }
    }

    /// Whether the value is an `Int` or a `Float`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => f.write_str(s),
            Self::StringList(items) => write!(f, "[{}]", items.join(", ")),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for ConfigValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringList(value)
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(value: Vec<&str>) -> Self {
        Self::StringList(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(value: Vec<ConfigValue>) -> Self {
        Self::List(value)
    }
}

impl ConfigValue {
    /// Convert a value parsed by the `config` crate, naming `key` in errors.
    pub(crate) fn from_raw(key: &str, value: config::Value) -> Result<Self, ConfigError> {
        use config::ValueKind as Raw;

        let overflow = |n: &dyn fmt::Display| {
            ConfigError::conversion(key, format!("integer {} overflows i64", n))
        };
        match value.kind {
            Raw::Boolean(b) => Ok(Self::Bool(b)),
            Raw::I64(i) => Ok(Self::Int(i)),
            Raw::I128(i) => i64::try_from(i).map(Self::Int).map_err(|_| overflow(&i)),
            Raw::U64(u) => i64::try_from(u).map(Self::Int).map_err(|_| overflow(&u)),
            Raw::U128(u) => i64::try_from(u).map(Self::Int).map_err(|_| overflow(&u)),
            Raw::Float(f) => Ok(Self::Float(f)),
            Raw::String(s) => Ok(Self::String(s)),
            Raw::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| Self::from_raw(&format!("{}[{}]", key, i), item))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Raw::Table(_) => Err(ConfigError::conversion(
                key,
                "nested tables are not supported as values",
            )),
            Raw::Nil => Err(ConfigError::conversion(key, "null values are not supported")),
        }
    }
}

impl TryFrom<config::Value> for ConfigValue {
    type Error = ConfigError;

    fn try_from(value: config::Value) -> Result<Self, Self::Error> {
        Self::from_raw("<value>", value)
    }
}
