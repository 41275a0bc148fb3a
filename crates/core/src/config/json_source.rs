use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::ConfigSource;
use crate::error::{Error, Result};

/// Configuration read from a flat JSON object, e.g. `.xcbuild-runner.json`
///
/// ```json
/// { "scheme": "App", "destination": "platform=iOS Simulator,name=iPhone 11" }
/// ```
///
/// Strings are used as-is; booleans and numbers are stringified; `null` counts as unset.
#[derive(Debug, Clone, Default)]
pub struct JsonConfigSource {
    values: HashMap<String, String>,
    path: Option<PathBuf>,
}

impl JsonConfigSource {
    pub const FILE_NAMES: [&'static str; 2] = [".xcbuild-runner.json", "xcbuild-runner.json"];

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;

        let Value::Object(object) = root else {
            return Err(Error::ConfigError(
                "Config file must contain a JSON object".to_string(),
            ));
        };

        let mut values = HashMap::new();
        for (key, value) in object {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
                Value::Object(_) => {
                    return Err(Error::ConfigError(format!(
                        "Config key '{key}' must not be an object"
                    )));
                }
            };
            values.insert(key, value);
        }

        Ok(Self { values, path: None })
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut source = Self::from_json_str(&contents)?;
        source.path = Some(path.to_path_buf());
        tracing::debug!("Loaded {} config key(s) from {:?}", source.values.len(), path);
        Ok(source)
    }

    /// Walk up from `start_path` looking for a config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in Self::FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl ConfigSource for JsonConfigSource {
    fn get_optional(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn name(&self) -> &str {
        "config file"
    }
}
