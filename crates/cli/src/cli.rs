use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use xcbuild_runner_core::config::keys;

use crate::commands::{
    constraints_command, destinations_command, encode_destination_command, test_command,
};

#[derive(Parser, Debug)]
#[command(name = "xcbuild-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    INPUT_<KEY>       Action inputs, e.g. INPUT_SCHEME, INPUT_CODE-SIGN-IDENTITY\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Settings that can be given on the command line
///
/// Flags take precedence over `INPUT_*` environment variables, which take
/// precedence over the JSON config file.
#[derive(Args, Debug, Default, Clone)]
pub struct SettingsArgs {
    /// JSON config file (defaults to the nearest .xcbuild-runner.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Workspace to build (.xcworkspace)
    #[arg(short, long)]
    pub workspace: Option<String>,

    /// Project to build (.xcodeproj)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Scheme to test; defaults to the first scheme xcodebuild lists
    #[arg(short, long)]
    pub scheme: Option<String>,

    /// Build configuration, e.g. Debug
    #[arg(long)]
    pub configuration: Option<String>,

    /// Destination in `key=value,...` or `{ key:value, ... }` notation
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Code signing identity passed as CODE_SIGN_IDENTITY
    #[arg(long)]
    pub code_sign_identity: Option<String>,

    /// Test constraints separated by commas or newlines, e.g. only-testing:AppTests
    #[arg(long)]
    pub constraints: Option<String>,

    /// Test locale such as en_US (overrides --language/--region)
    #[arg(long)]
    pub locale: Option<String>,

    /// Test language
    #[arg(long)]
    pub language: Option<String>,

    /// Test region
    #[arg(long)]
    pub region: Option<String>,

    /// What to do when tests fail (exit code 65): tolerate or fail
    #[arg(long)]
    pub test_failure_policy: Option<String>,

    /// Directory to run xcodebuild in
    #[arg(short = 'C', long)]
    pub working_directory: Option<String>,
}

impl SettingsArgs {
    /// The flag value for a configuration key, if that flag was given
    pub fn flag(&self, key: &str) -> Option<&String> {
        let value = match key {
            keys::WORKSPACE => &self.workspace,
            keys::PROJECT => &self.project,
            keys::SCHEME => &self.scheme,
            keys::CONFIGURATION => &self.configuration,
            keys::DESTINATION => &self.destination,
            keys::CODE_SIGN_IDENTITY => &self.code_sign_identity,
            keys::CONSTRAINTS => &self.constraints,
            keys::LOCALE => &self.locale,
            keys::LANGUAGE => &self.language,
            keys::REGION => &self.region,
            keys::TEST_FAILURE_POLICY => &self.test_failure_policy,
            keys::WORKING_DIRECTORY => &self.working_directory,
            _ => return None,
        };
        value.as_ref()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run xcodebuild test with the resolved settings
    #[command(visible_alias = "t")]
    Test {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Print the command without executing it
        #[arg(long)]
        dry_run: bool,
    },
    /// List the destinations xcodebuild reports for a scheme
    #[command(visible_alias = "d")]
    Destinations {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Parse saved -showdestinations output instead of running xcodebuild ('-' for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print destinations as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a destination in the canonical key=value form
    EncodeDestination {
        /// Destination in either notation
        destination: String,
    },
    /// Print the xcodebuild flags for a constraint list
    Constraints {
        /// Constraints separated by commas or newlines
        constraints: String,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Test { settings, dry_run } => test_command(&settings, dry_run),
            Commands::Destinations {
                settings,
                input,
                json,
            } => destinations_command(&settings, input.as_deref(), json),
            Commands::EncodeDestination { destination } => encode_destination_command(&destination),
            Commands::Constraints { constraints } => constraints_command(&constraints),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_test_flags() {
        let cli = Cli::try_parse_from([
            "xcbuild-runner",
            "test",
            "--dry-run",
            "-s",
            "App",
            "--destination",
            "platform=macOS",
            "--test-failure-policy",
            "fail",
            "-C",
            "ios",
        ])
        .unwrap();

        match cli.command {
            Commands::Test { settings, dry_run } => {
                assert!(dry_run);
                assert_eq!(settings.scheme.as_deref(), Some("App"));
                assert_eq!(settings.destination.as_deref(), Some("platform=macOS"));
                assert_eq!(settings.test_failure_policy.as_deref(), Some("fail"));
                assert_eq!(settings.working_directory.as_deref(), Some("ios"));
            }
            other => panic!("Expected Test, got {other:?}"),
        }
    }
}
