use std::process::{Command, ExitStatus, Stdio};

use crate::{command::XcodebuildCommand, error::Result};

/// Output of a command whose stdout was captured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Spawns external commands on behalf of the runner
pub trait ProcessRunner {
    /// Run with stdout/stderr passed through to this process; returns the exit code
    fn run(&self, command: &XcodebuildCommand) -> Result<i32>;

    /// Run with stdout/stderr captured
    fn capture(&self, command: &XcodebuildCommand) -> Result<CapturedOutput>;
}

/// [`ProcessRunner`] backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn prepare(command: &XcodebuildCommand) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);

        if let Some(ref dir) = command.working_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &command.env {
            tracing::debug!("Setting env: {}={}", key, value);
            cmd.env(key, value);
        }

        cmd
    }
}

/// Exit code of a finished process; termination by signal maps to -1
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &XcodebuildCommand) -> Result<i32> {
        let status = Self::prepare(command)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(exit_code(status))
    }

    fn capture(&self, command: &XcodebuildCommand) -> Result<CapturedOutput> {
        let output = Self::prepare(command).stdin(Stdio::null()).output()?;
        Ok(CapturedOutput {
            exit_code: exit_code(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
