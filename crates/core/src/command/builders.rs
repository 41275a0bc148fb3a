//! Builders that turn [`Settings`] into xcodebuild argument vectors
//!
//! # Example
//! ```
//! use xcbuild_runner_core::{command::TestCommandBuilder, config::Settings};
//!
//! let settings = Settings {
//!     scheme: Some("App".to_string()),
//!     ..Default::default()
//! };
//! let command = TestCommandBuilder::new(&settings).build().unwrap();
//! assert_eq!(command.args, vec!["-scheme", "App", "test"]);
//! ```

use super::{CommandType, XcodebuildCommand};
use crate::{
    config::Settings,
    error::{Error, Result},
};

/// Builds `xcodebuild ... test` invocations
pub struct TestCommandBuilder<'a> {
    settings: &'a Settings,
    scheme: Option<&'a str>,
}

impl<'a> TestCommandBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            scheme: None,
        }
    }

    /// Use this scheme instead of the one in the settings
    pub fn with_scheme(mut self, scheme: &'a str) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn build(self) -> Result<XcodebuildCommand> {
        let settings = self.settings;
        let scheme = self
            .scheme
            .or(settings.scheme.as_deref())
            .ok_or_else(|| Error::ConfigError("No scheme configured".to_string()))?;

        let mut args = settings.container_args();
        args.push("-scheme".to_string());
        args.push(scheme.to_string());

        if let Some(configuration) = &settings.configuration {
            args.push("-configuration".to_string());
            args.push(configuration.clone());
        }

        if let Some(destination) = &settings.destination {
            args.push("-destination".to_string());
            args.push(destination.to_option_string());
        }

        args.push("test".to_string());

        // Test settings
        args.extend(settings.constraints.iter().map(|c| c.to_string()));
        if let Some(language) = &settings.language {
            args.push("-testLanguage".to_string());
            args.push(language.clone());
        }
        if let Some(region) = &settings.region {
            args.push("-testRegion".to_string());
            args.push(region.clone());
        }

        // Build settings go last
        if let Some(identity) = &settings.code_sign_identity {
            args.push(format!("CODE_SIGN_IDENTITY={identity}"));
        }

        tracing::debug!("Built test command args: {:?}", args);
        let command = XcodebuildCommand::new(CommandType::Test, args).with_env("NSUnbufferedIO", "YES");
        Ok(in_working_directory(command, settings))
    }
}

/// Builds `xcodebuild -list -json`
pub struct ListCommandBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> ListCommandBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    pub fn build(self) -> XcodebuildCommand {
        let mut args = self.settings.container_args();
        args.push("-list".to_string());
        args.push("-json".to_string());
        in_working_directory(XcodebuildCommand::new(CommandType::List, args), self.settings)
    }
}

/// Builds `xcodebuild -scheme S -showdestinations`
pub struct ShowDestinationsCommandBuilder<'a> {
    settings: &'a Settings,
    scheme: Option<&'a str>,
}

impl<'a> ShowDestinationsCommandBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            scheme: None,
        }
    }

    pub fn with_scheme(mut self, scheme: &'a str) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn build(self) -> Result<XcodebuildCommand> {
        let scheme = self
            .scheme
            .or(self.settings.scheme.as_deref())
            .ok_or_else(|| Error::ConfigError("No scheme configured".to_string()))?;

        let mut args = self.settings.container_args();
        args.push("-scheme".to_string());
        args.push(scheme.to_string());
        args.push("-showdestinations".to_string());
        let command = XcodebuildCommand::new(CommandType::ShowDestinations, args);
        Ok(in_working_directory(command, self.settings))
    }
}

fn in_working_directory(command: XcodebuildCommand, settings: &Settings) -> XcodebuildCommand {
    match &settings.working_directory {
        Some(dir) => command.with_working_dir(dir.clone()),
        None => command,
    }
}
