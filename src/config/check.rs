//! Detect configuration keys missing from the YAML file.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys present in the default configuration but absent from the file at `path`.
/// Missing keys fall back to their defaults at load time.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let file: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
    let defaults =
        serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))?;

    let present = file.as_mapping();
    let missing = defaults
        .as_mapping()
        .into_iter()
        .flat_map(|m| m.keys())
        .filter_map(Value::as_str)
        .filter(|key| {
            present
                .map(|m| !m.contains_key(*key))
                .unwrap_or(true)
        })
        .map(str::to_string)
        .collect();

    Ok(missing)
}
