//! Flattening of parsed tables into dotted keys.

use crate::core::ConfigValue;
use crate::error::Result;
use crate::logging::trace;
use std::collections::HashMap;

/// Flatten a table parsed by the `config` crate.
///
/// Nested tables become dotted keys (`server: { port: 1 }` → `server.port`).
/// Null leaves are dropped.
pub(crate) fn flatten(
    table: config::Map<String, config::Value>,
) -> Result<HashMap<String, ConfigValue>> {
    let mut out = HashMap::with_capacity(table.len());
    flatten_into(&mut out, None, table)?;
    Ok(out)
}

fn flatten_into(
    out: &mut HashMap<String, ConfigValue>,
    prefix: Option<&str>,
    table: config::Map<String, config::Value>,
) -> Result<()> {
    for (key, value) in table {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key,
        };

        match value.kind {
            config::ValueKind::Table(nested) => flatten_into(out, Some(&key), nested)?,
            config::ValueKind::Nil => {
                trace!(key = %key, "dropping null configuration value");
            }
            _ => {
                let converted = ConfigValue::from_raw(&key, value)?;
                out.insert(key, converted);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Map, Value, ValueKind};

    fn table(entries: Vec<(&str, Value)>) -> Map<String, Value> {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_flatten_nested_tables() {
        let server = table(vec![
            ("port", Value::new(None, 8080i64)),
            ("host", Value::new(None, "localhost")),
        ]);
        let root = table(vec![
            ("server", Value::new(None, ValueKind::Table(server))),
            ("debug", Value::new(None, true)),
        ]);

        let flat = flatten(root).unwrap();
        assert_eq!(flat.len(), 3);
        assert_eq!(flat["server.port"], ConfigValue::Int(8080));
        assert_eq!(flat["server.host"], ConfigValue::from("localhost"));
        assert_eq!(flat["debug"], ConfigValue::Bool(true));
    }

    #[test]
    fn test_flatten_drops_nulls() {
        let root = table(vec![("unset", Value::new(None, ValueKind::Nil))]);
        assert!(flatten(root).unwrap().is_empty());
    }

    #[test]
    fn test_flatten_rejects_tables_in_arrays() {
        let inner = Value::new(None, ValueKind::Table(table(vec![("a", Value::new(None, 1i64))])));
        let root = table(vec![("items", Value::new(None, ValueKind::Array(vec![inner])))]);

        match flatten(root) {
            Err(crate::error::ConfigError::Conversion { key, .. }) => assert_eq!(key, "items[0]"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
