use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use xcbuild_runner_core::{Destination, XcodebuildRunner, parse_show_destinations_output};

use crate::{cli::SettingsArgs, config::resolve_settings, display::print_destinations};

pub fn destinations_command(args: &SettingsArgs, input: Option<&Path>, json: bool) -> Result<()> {
    let destinations = match input {
        Some(path) => parse_saved_output(path)?,
        None => {
            let settings = resolve_settings(args)?;
            XcodebuildRunner::new()
                .show_destinations(&settings)
                .context("Failed to list destinations")?
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&destinations)?);
    } else {
        print_destinations(&destinations);
    }

    Ok(())
}

fn parse_saved_output(path: &Path) -> Result<Vec<Destination>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read destinations from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    Ok(parse_show_destinations_output(&text))
}
