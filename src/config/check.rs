//! Detect and fill configuration keys missing from the YAML file.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys present in a fully populated configuration, in file order.
fn expected_keys() -> AppResult<Vec<String>> {
    let full = serde_yaml::to_value(Config::default())?;
    let map = full
        .as_mapping()
        .ok_or_else(|| AppError::Config("default configuration is not a mapping".into()))?;

    Ok(map
        .keys()
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    match yaml {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// List keys that the file at `path` does not define.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let map = read_mapping(path)?;

    Ok(expected_keys()?
        .into_iter()
        .filter(|k| !map.contains_key(k.as_str()))
        .collect())
}

/// Rewrite the file with every missing key set to its default.
/// Existing values are preserved. Returns the keys that were added.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let missing = missing_keys(path)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    // Deserializing applies serde defaults to the absent keys
    let content = fs::read_to_string(path)?;
    let cfg: Config = if content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    fs::write(path, serde_yaml::to_string(&cfg)?)?;
    Ok(missing)
}
