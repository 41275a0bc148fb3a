use std::collections::HashMap;

/// Key/value lookup that feeds raw configuration strings to the parsers
pub trait ConfigSource {
    /// Look up a key, distinguishing "not set" (`None`) from "set to empty" (`Some("")`)
    fn get_optional(&self, key: &str) -> Option<String>;

    /// Look up a key, treating "not set" as the empty string
    fn get(&self, key: &str) -> String {
        self.get_optional(key).unwrap_or_default()
    }

    /// Name used in log output
    fn name(&self) -> &str;
}

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads CI action inputs from the environment
///
/// A key such as `code-sign-identity` is read from `INPUT_CODE-SIGN-IDENTITY`.
/// Spaces become underscores and the name is upper-cased; dashes are kept.
pub struct EnvConfigSource {
    prefix: String,
    lookup: Lookup,
}

impl EnvConfigSource {
    pub const DEFAULT_PREFIX: &'static str = "INPUT_";

    pub fn new() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            lookup: Box::new(|name| std::env::var(name).ok()),
        }
    }

    /// Use a custom variable lookup instead of the process environment
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.lookup = Box::new(lookup);
        self
    }

    /// Environment variable name for a configuration key
    pub fn variable_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.replace(' ', "_").to_uppercase())
    }
}

impl Default for EnvConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvConfigSource {
    fn get_optional(&self, key: &str) -> Option<String> {
        (self.lookup)(&self.variable_name(key))
    }

    fn name(&self) -> &str {
        "environment"
    }
}

/// In-memory configuration, used for CLI overrides and tests
#[derive(Debug, Clone, Default)]
pub struct MapConfigSource {
    values: HashMap<String, String>,
}

impl MapConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapConfigSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut source = MapConfigSource::new();
        for (k, v) in iter {
            source.set(k, v);
        }
        source
    }
}

impl ConfigSource for MapConfigSource {
    fn get_optional(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn name(&self) -> &str {
        "overrides"
    }
}

/// Ordered stack of sources; the first one that has a key wins
#[derive(Default)]
pub struct LayeredConfigSource {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer with lower priority than every layer already added
    pub fn with_layer(mut self, source: impl ConfigSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl ConfigSource for LayeredConfigSource {
    fn get_optional(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| {
            let value = layer.get_optional(key)?;
            tracing::debug!("Config key '{}' resolved from {}", key, layer.name());
            Some(value)
        })
    }

    fn name(&self) -> &str {
        "layered"
    }
}
