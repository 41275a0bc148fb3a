use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::parser::destination::{encode_destination_option, parse_destination};

/// An xcodebuild destination: ordered attribute name to value pairs
///
/// Keys are unique. Iteration follows insertion order, which is also the
/// order used when the destination is encoded for `-destination`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destination {
    attributes: Vec<(String, String)>,
}

impl Destination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute
    ///
    /// An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Canonical `key=value,...` form accepted by `xcodebuild -destination`
    pub fn to_option_string(&self) -> String {
        encode_destination_option(self)
    }

    /// Human-readable label, preferring the device name
    pub fn label(&self) -> String {
        match (self.get("name"), self.get("OS")) {
            (Some(name), Some(os)) => format!("{name} ({os})"),
            (Some(name), None) => name.to_string(),
            _ => self.to_option_string(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Destination
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut destination = Destination::new();
        for (k, v) in iter {
            destination.insert(k, v);
        }
        destination
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_option_string())
    }
}

impl FromStr for Destination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_destination(s)
    }
}

impl Serialize for Destination {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len()))?;
        for (k, v) in &self.attributes {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct DestinationVisitor;

impl<'de> Visitor<'de> for DestinationVisitor {
    type Value = Destination;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of destination attributes")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> std::result::Result<Destination, M::Error> {
        let mut destination = Destination::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            destination.insert(key, value);
        }
        Ok(destination)
    }
}

impl<'de> Deserialize<'de> for Destination {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(DestinationVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut destination = Destination::new();
        destination.insert("platform", "iOS Simulator");
        destination.insert("name", "iPhone 11");
        destination.insert("OS", "14.0");

        let keys: Vec<_> = destination.keys().collect();
        assert_eq!(keys, vec!["platform", "name", "OS"]);
    }

    #[test]
    fn test_insert_existing_key_replaces_in_place() {
        let mut destination = Destination::new();
        destination.insert("platform", "iOS");
        destination.insert("name", "iPhone 11");
        destination.insert("platform", "iOS Simulator");

        assert_eq!(destination.len(), 2);
        assert_eq!(
            destination.iter().collect::<Vec<_>>(),
            vec![("platform", "iOS Simulator"), ("name", "iPhone 11")]
        );
    }

    #[test]
    fn test_label() {
        let full: Destination = [("platform", "iOS Simulator"), ("name", "iPhone 11"), ("OS", "14.0")]
            .into_iter()
            .collect();
        assert_eq!(full.label(), "iPhone 11 (14.0)");

        let no_os: Destination = [("platform", "iOS"), ("name", "Any iOS Device")].into_iter().collect();
        assert_eq!(no_os.label(), "Any iOS Device");

        let anonymous: Destination = [("platform", "macOS"), ("arch", "arm64")].into_iter().collect();
        assert_eq!(anonymous.label(), "platform=macOS,arch=arm64");
    }

    #[test]
    fn test_serde_preserves_order() {
        let destination: Destination = [("platform", "iOS Simulator"), ("name", "iPhone 11"), ("OS", "14.0")]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&destination).unwrap();
        assert_eq!(json, r#"{"platform":"iOS Simulator","name":"iPhone 11","OS":"14.0"}"#);

        let back: Destination = serde_json::from_str(&json).unwrap();
        assert_eq!(back, destination);
    }

    #[test]
    fn test_from_str() {
        let destination: Destination = "platform=macOS,arch=arm64".parse().unwrap();
        assert_eq!(destination.get("arch"), Some("arm64"));
        assert!("cheese".parse::<Destination>().is_err());
    }
}
