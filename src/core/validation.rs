//! Configuration validation support.

use crate::core::Snapshot;
use crate::error::ValidationError;

#[cfg(feature = "validation")]
use crate::core::ValueKind;

/// A rule evaluated against a full snapshot of the configuration.
///
/// Validators are registered with
/// [`ConfigStore::add_validator`](crate::core::ConfigStore::add_validator) and run
/// in registration order by
/// [`ConfigStore::validate`](crate::core::ConfigStore::validate). The first
/// error stops the pipeline.
///
/// Closures taking `&Snapshot` implement this trait, so ad-hoc rules need no
/// dedicated type.
///
/// # Examples
///
/// ```rust
/// use layered_config::core::{Snapshot, Validator};
/// use layered_config::error::ValidationError;
///
/// struct NonEmptyHost;
///
/// impl Validator for NonEmptyHost {
///     fn validate(&self, snapshot: &Snapshot) -> Result<(), ValidationError> {
///         match snapshot.get("host").and_then(|v| v.as_str()) {
///             Some("") => Err(ValidationError::custom("host must not be empty")),
///             _ => Ok(()),
///         }
///     }
/// }
/// ```
pub trait Validator: Send + Sync {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Should return a `ValidationError` describing what validation failed.
    fn validate(&self, snapshot: &Snapshot) -> Result<(), ValidationError>;
}

impl<F> Validator for F
where
    F: Fn(&Snapshot) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, snapshot: &Snapshot) -> Result<(), ValidationError> {
        self(snapshot)
    }
}

/// Requires that every configured key is present.
///
/// Keys are checked in the order given; the first absent one is reported.
#[cfg(feature = "validation")]
#[derive(Debug, Clone, Default)]
pub struct RequiredValidator {
    keys: Vec<String>,
}

#[cfg(feature = "validation")]
impl RequiredValidator {
    /// Create a validator requiring `keys`.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// The keys this validator requires, in check order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

#[cfg(feature = "validation")]
impl Validator for RequiredValidator {
    fn validate(&self, snapshot: &Snapshot) -> Result<(), ValidationError> {
        match self.keys.iter().find(|key| !snapshot.contains_key(key)) {
            Some(key) => Err(ValidationError::missing_key(key.as_str())),
            None => Ok(()),
        }
    }
}

/// Requires that a key, when present, holds exactly the given type.
///
/// No coercion applies: an integer stored under a key declared
/// [`ValueKind::Float`] fails, even though [`get_float`](crate::core::ConfigStore::get_float)
/// would accept it. Absent keys pass.
#[cfg(feature = "validation")]
#[derive(Debug, Clone)]
pub struct TypeValidator {
    key: String,
    kind: ValueKind,
}

#[cfg(feature = "validation")]
impl TypeValidator {
    /// Create a validator requiring `key` to hold a value of `kind`.
    pub fn new(key: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}

#[cfg(feature = "validation")]
impl Validator for TypeValidator {
    fn validate(&self, snapshot: &Snapshot) -> Result<(), ValidationError> {
        let Some(value) = snapshot.get(&self.key) else {
            return Ok(());
        };

        let actual = value.kind();
        if actual != self.kind {
            return Err(ValidationError::TypeMismatch {
                key: self.key.clone(),
                expected: self.kind,
                actual,
            });
        }
        Ok(())
    }
}

/// Requires that a numeric key, when present, lies within `[min, max]`.
///
/// Integers and floats are both accepted and compared as `f64`. With
/// [`integer`](Self::integer) set, the value must also have no fractional part,
/// whatever its stored type. Absent keys pass.
///
/// # Examples
///
/// ```rust
/// use layered_config::prelude::*;
///
/// let store = ConfigStore::new();
/// store.add_validator(RangeValidator::new("port", 1024.0, 65535.0).integer());
///
/// store.set("port", 8080).unwrap();
/// assert!(store.validate().is_ok());
///
/// store.set("port", 8080.5).unwrap();
/// assert!(store.validate().is_err());
/// ```
#[cfg(feature = "validation")]
#[derive(Debug, Clone)]
pub struct RangeValidator {
    key: String,
    min: f64,
    max: f64,
    integer: bool,
}

#[cfg(feature = "validation")]
impl RangeValidator {
    /// Create a validator bounding `key` to `[min, max]`, inclusive.
    pub fn new(key: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            key: key.into(),
            min,
            max,
            integer: false,
        }
    }

    /// Additionally require the value to be integral.
    #[must_use]
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }
}

#[cfg(feature = "validation")]
impl Validator for RangeValidator {
    fn validate(&self, snapshot: &Snapshot) -> Result<(), ValidationError> {
        let Some(value) = snapshot.get(&self.key) else {
            return Ok(());
        };

        let number = match value.as_float() {
            Some(n) if value.is_numeric() => n,
            _ => {
                return Err(ValidationError::NotNumeric {
                    key: self.key.clone(),
                    actual: value.kind(),
                });
            }
        };

        // NaN fails both comparisons, so reject it explicitly.
        if number.is_nan() || number < self.min || number > self.max {
            return Err(ValidationError::OutOfRange {
                key: self.key.clone(),
                value: number,
                min: self.min,
                max: self.max,
            });
        }

        if self.integer && number.fract() != 0.0 {
            return Err(ValidationError::NotInteger {
                key: self.key.clone(),
                value: number,
            });
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "validation"))]
mod tests {
    use super::*;
    use crate::core::ConfigValue;

    fn snapshot(entries: &[(&str, ConfigValue)]) -> Snapshot {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_required_reports_first_missing_key() {
        let validator = RequiredValidator::new(["a", "b", "c"]);
        let snap = snapshot(&[("a", 1.into())]);

        assert_eq!(
            validator.validate(&snap),
            Err(ValidationError::missing_key("b"))
        );

        let snap = snapshot(&[("a", 1.into()), ("b", 2.into()), ("c", 3.into())]);
        assert!(validator.validate(&snap).is_ok());
    }

    #[test]
    fn test_required_with_no_keys() {
        assert!(RequiredValidator::default().validate(&Snapshot::default()).is_ok());
    }

    #[test]
    fn test_type_validator_is_exact() {
        let validator = TypeValidator::new("ratio", ValueKind::Float);

        assert!(validator.validate(&Snapshot::default()).is_ok());
        assert!(validator.validate(&snapshot(&[("ratio", 0.5.into())])).is_ok());
        assert_eq!(
            validator.validate(&snapshot(&[("ratio", 1.into())])),
            Err(ValidationError::TypeMismatch {
                key: "ratio".into(),
                expected: ValueKind::Float,
                actual: ValueKind::Int,
            })
        );
    }

    #[test]
    fn test_type_validator_distinguishes_list_kinds() {
        let validator = TypeValidator::new("hosts", ValueKind::StringList);
        let any_list = ConfigValue::List(vec!["a".into()]);
        assert!(validator.validate(&snapshot(&[("hosts", any_list)])).is_err());
        assert!(
            validator
                .validate(&snapshot(&[("hosts", vec!["a"].into())]))
                .is_ok()
        );
    }

    #[test]
    fn test_range_validator_port() {
        let validator = RangeValidator::new("port", 1024.0, 65535.0).integer();
        let check = |v: ConfigValue| validator.validate(&snapshot(&[("port", v)]));

        assert!(matches!(check(1023.into()), Err(ValidationError::OutOfRange { .. })));
        assert!(matches!(check(65536.into()), Err(ValidationError::OutOfRange { .. })));
        assert!(matches!(check(8080.5.into()), Err(ValidationError::NotInteger { .. })));
        assert!(check(8080.into()).is_ok());
        assert!(check(8080.0.into()).is_ok());
        assert!(check(1024.into()).is_ok());
        assert!(check(65535.into()).is_ok());
    }

    #[test]
    fn test_range_validator_non_numeric() {
        let validator = RangeValidator::new("port", 0.0, 10.0);
        assert_eq!(
            validator.validate(&snapshot(&[("port", "8080".into())])),
            Err(ValidationError::NotNumeric {
                key: "port".into(),
                actual: ValueKind::String,
            })
        );
        assert!(validator.validate(&Snapshot::default()).is_ok());
    }

    #[test]
    fn test_range_validator_fractional_without_integer_flag() {
        let validator = RangeValidator::new("ratio", 0.0, 1.0);
        assert!(validator.validate(&snapshot(&[("ratio", 0.25.into())])).is_ok());
        assert!(
            validator
                .validate(&snapshot(&[("ratio", f64::NAN.into())]))
                .is_err()
        );
    }
}
