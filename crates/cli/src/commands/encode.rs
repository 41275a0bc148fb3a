use anyhow::{Context, Result};
use xcbuild_runner_core::parse_destination;

pub fn encode_destination_command(raw: &str) -> Result<()> {
    let destination = parse_destination(raw)
        .with_context(|| format!("Invalid destination: {raw}"))?;
    println!("{}", destination.to_option_string());
    Ok(())
}
