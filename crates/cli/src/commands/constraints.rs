use anyhow::Result;
use xcbuild_runner_core::parse_constraints;

pub fn constraints_command(raw: &str) -> Result<()> {
    for token in parse_constraints(raw) {
        println!("{token}");
    }
    Ok(())
}
