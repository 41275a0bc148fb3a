//! Runner that resolves settings, builds the xcodebuild command and classifies its result

mod outcome;
mod process;
mod project_info;

pub use outcome::{TEST_FAILURE_EXIT_CODE, TestFailurePolicy, TestOutcome, classify_exit_code};
pub use process::{CapturedOutput, ProcessRunner, SystemProcessRunner, exit_code};
pub use project_info::{ContainerInfo, ProjectInfo};

use crate::{
    command::{ListCommandBuilder, ShowDestinationsCommandBuilder, TestCommandBuilder, XcodebuildCommand},
    config::Settings,
    error::{Error, Result},
    parser::parse_show_destinations_output,
    types::Destination,
};
use std::borrow::Cow;
use tracing::{debug, info, warn};

pub struct XcodebuildRunner<R: ProcessRunner = SystemProcessRunner> {
    process: R,
}

impl XcodebuildRunner<SystemProcessRunner> {
    pub fn new() -> Self {
        Self::with_process_runner(SystemProcessRunner::new())
    }
}

impl Default for XcodebuildRunner<SystemProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ProcessRunner> XcodebuildRunner<R> {
    pub fn with_process_runner(process: R) -> Self {
        Self { process }
    }

    pub fn process_runner(&self) -> &R {
        &self.process
    }

    /// The configured scheme, or the first scheme xcodebuild lists for the project
    pub fn resolve_scheme<'s>(&self, settings: &'s Settings) -> Result<Cow<'s, str>> {
        if let Some(scheme) = &settings.scheme {
            return Ok(Cow::Borrowed(scheme.as_str()));
        }

        let command = ListCommandBuilder::new(settings).build();
        debug!("No scheme configured, listing project: {}", command.to_shell_command());

        let output = self.process.capture(&command)?;
        if output.exit_code != 0 {
            warn!("xcodebuild -list failed: {}", output.stderr.trim());
            return Err(Error::UnexpectedExitCode {
                code: output.exit_code,
            });
        }

        let info = ProjectInfo::from_json(&output.stdout)?;
        let scheme = info.default_scheme().ok_or_else(|| {
            Error::ConfigError("No scheme configured and the project lists none".to_string())
        })?;

        info!("Using default scheme '{}'", scheme);
        Ok(Cow::Owned(scheme.to_string()))
    }

    /// The test command that [`XcodebuildRunner::test`] would run
    pub fn test_command(&self, settings: &Settings) -> Result<XcodebuildCommand> {
        let scheme = self.resolve_scheme(settings)?;
        TestCommandBuilder::new(settings).with_scheme(&scheme).build()
    }

    /// Run the tests once and classify the exit code
    pub fn test(&self, settings: &Settings) -> Result<TestOutcome> {
        let command = self.test_command(settings)?;
        info!("Running: {}", command.to_shell_command());

        let code = self.process.run(&command)?;
        debug!("xcodebuild exited with code {}", code);

        let outcome = classify_exit_code(code, settings.test_failure_policy)?;
        if outcome == TestOutcome::TestsFailed {
            warn!("xcodebuild reported failing tests (exit code {})", code);
        }
        Ok(outcome)
    }

    /// Ask xcodebuild for the scheme's destinations and parse the listing
    pub fn show_destinations(&self, settings: &Settings) -> Result<Vec<Destination>> {
        let scheme = self.resolve_scheme(settings)?;
        let command = ShowDestinationsCommandBuilder::new(settings)
            .with_scheme(&scheme)
            .build()?;
        info!("Running: {}", command.to_shell_command());

        let output = self.process.capture(&command)?;
        if output.exit_code != 0 {
            warn!("xcodebuild -showdestinations failed: {}", output.stderr.trim());
            return Err(Error::UnexpectedExitCode {
                code: output.exit_code,
            });
        }

        Ok(parse_show_destinations_output(&output.stdout))
    }
}
