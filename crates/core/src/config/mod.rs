//! Configuration management for xcbuild-runner
//!
//! Raw values come from a [`ConfigSource`] (environment inputs, a JSON file,
//! CLI overrides) and are turned into typed [`Settings`].

mod json_source;
mod settings;
mod source;

pub use json_source::JsonConfigSource;
pub use settings::{Settings, keys};
pub use source::{ConfigSource, EnvConfigSource, LayeredConfigSource, MapConfigSource};
