use clap::Parser;
use xcbuild_runner::Cli;

fn main() {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");

        // Surface xcodebuild's own exit code when that is what failed
        let code = err
            .downcast_ref::<xcbuild_runner_core::Error>()
            .and_then(|e| e.exit_code())
            .filter(|code| *code > 0)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
