//! The configuration document and the `thingworx_servers[0].subsystems` lookup.

use crate::Error;
use serde_yaml::Value;
use std::{fmt, fs, path::Path};

pub fn load(path: &Path) -> Result<Value, Error> {
    let source = fs::read_to_string(path).map_err(|e| {
        Error::Read(format!(
            "Failed to read source file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse(&source)
}

/// Decodes a YAML document and resolves `<<` merge keys.
pub fn parse(source: &str) -> Result<Value, Error> {
    let mut config = serde_yaml::from_str::<Value>(source)
        .map_err(|e| Error::Deserialization(format!("Failed YAML deserialization: {}", e)))?;
    config
        .apply_merge()
        .map_err(|e| Error::Deserialization(format!("Failed YAML merge: {}", e)))?;
    Ok(config)
}

/// Returns the `subsystems` field of the first Thingworx server, if every step of the
/// path exists. Anything else along the way (missing key, empty or non-sequence
/// server list, non-mapping entry) is a miss, not an error.
pub fn subsystems(config: &Value) -> Option<&Value> {
    let servers = config.get("thingworx_servers")?.as_sequence()?;
    servers.first()?.as_mapping()?.get("subsystems")
}

/// Single-line printed form of a value.
///
/// A top-level string is written bare. Everything nested is written compactly with
/// JSON-style quoting, so `[a, b]` prints as `["a","b"]`.
pub struct Printed<'a>(pub &'a Value);

impl fmt::Display for Printed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write_compact(f, other),
        }
    }
}

fn write_compact(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Number(n) => write!(f, "{}", n),
        Value::String(s) => write!(f, "{}", serde_json::Value::from(s.as_str())),
        Value::Sequence(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_compact(f, item)?;
            }
            f.write_str("]")
        }
        Value::Mapping(map) => {
            f.write_str("{")?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_compact(f, key)?;
                f.write_str(":")?;
                write_compact(f, item)?;
            }
            f.write_str("}")
        }
        Value::Tagged(tagged) => {
            write!(f, "{} ", tagged.tag)?;
            write_compact(f, &tagged.value)
        }
    }
}
