//! Assemble the layered configuration source for a CLI invocation

use anyhow::{Context, Result};
use xcbuild_runner_core::config::{
    EnvConfigSource, JsonConfigSource, LayeredConfigSource, MapConfigSource, Settings, keys,
};

use crate::cli::SettingsArgs;

/// Flags first, then `INPUT_*` environment variables, then the JSON config file
pub fn build_config_source(args: &SettingsArgs) -> Result<LayeredConfigSource> {
    let mut layered = LayeredConfigSource::new()
        .with_layer(flag_overrides(args))
        .with_layer(EnvConfigSource::new());

    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => std::env::current_dir()
            .ok()
            .and_then(|cwd| JsonConfigSource::find_config_file(&cwd)),
    };

    if let Some(path) = config_path {
        tracing::debug!("Using config file: {:?}", path);
        let file = JsonConfigSource::load_from_file(&path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
        layered = layered.with_layer(file);
    }

    Ok(layered)
}

pub fn resolve_settings(args: &SettingsArgs) -> Result<Settings> {
    let source = build_config_source(args)?;
    Settings::from_source(&source).context("Invalid configuration")
}

fn flag_overrides(args: &SettingsArgs) -> MapConfigSource {
    keys::ALL
        .into_iter()
        .filter_map(|key| args.flag(key).map(|value| (key, value.clone())))
        .collect()
}
