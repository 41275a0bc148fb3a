use serde::Serialize;

use super::ConfigSource;
use crate::{
    error::{Error, Result},
    parser::{parse_constraints, parse_destination},
    runner::TestFailurePolicy,
    types::{ConstraintToken, Destination, Locale},
};

/// Configuration keys understood by [`Settings::from_source`]
pub mod keys {
    pub const WORKSPACE: &str = "workspace";
    pub const PROJECT: &str = "project";
    pub const SCHEME: &str = "scheme";
    pub const CONFIGURATION: &str = "configuration";
    pub const DESTINATION: &str = "destination";
    pub const CODE_SIGN_IDENTITY: &str = "code-sign-identity";
    pub const CONSTRAINTS: &str = "constraints";
    pub const LOCALE: &str = "locale";
    pub const LANGUAGE: &str = "language";
    pub const REGION: &str = "region";
    pub const TEST_FAILURE_POLICY: &str = "test-failure-policy";
    pub const WORKING_DIRECTORY: &str = "working-directory";

    pub const ALL: [&str; 12] = [
        WORKSPACE,
        PROJECT,
        SCHEME,
        CONFIGURATION,
        DESTINATION,
        CODE_SIGN_IDENTITY,
        CONSTRAINTS,
        LOCALE,
        LANGUAGE,
        REGION,
        TEST_FAILURE_POLICY,
        WORKING_DIRECTORY,
    ];
}

/// Typed settings for one xcodebuild test run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_sign_identity: Option<String>,
    pub constraints: Vec<ConstraintToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub test_failure_policy: TestFailurePolicy,
    /// Directory xcodebuild is started in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

impl Settings {
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self> {
        let workspace = scalar(source, keys::WORKSPACE);
        let project = scalar(source, keys::PROJECT);
        if workspace.is_some() && project.is_some() {
            return Err(Error::ConfigError(
                "Cannot specify both workspace and project".to_string(),
            ));
        }

        let destination = scalar(source, keys::DESTINATION)
            .map(|raw| parse_destination(&raw))
            .transpose()?;

        let constraints = parse_constraints(&source.get(keys::CONSTRAINTS));

        // A locale such as `en_US` wins over separate language/region keys
        let (language, region) = match scalar(source, keys::LOCALE).and_then(|l| Locale::parse(&l)) {
            Some(locale) => (locale.language, locale.region),
            None => (scalar(source, keys::LANGUAGE), scalar(source, keys::REGION)),
        };

        let test_failure_policy = scalar(source, keys::TEST_FAILURE_POLICY)
            .map(|raw| raw.parse::<TestFailurePolicy>())
            .transpose()?
            .unwrap_or_default();

        let settings = Self {
            workspace,
            project,
            scheme: scalar(source, keys::SCHEME),
            configuration: scalar(source, keys::CONFIGURATION),
            destination,
            code_sign_identity: scalar(source, keys::CODE_SIGN_IDENTITY),
            constraints,
            language,
            region,
            test_failure_policy,
            working_directory: scalar(source, keys::WORKING_DIRECTORY),
        };

        tracing::debug!("Resolved settings from {}: {:?}", source.name(), settings);
        Ok(settings)
    }

    /// `-workspace`/`-project` arguments selecting the container to operate on
    pub fn container_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(workspace) = &self.workspace {
            args.push("-workspace".to_string());
            args.push(workspace.clone());
        }
        if let Some(project) = &self.project {
            args.push("-project".to_string());
            args.push(project.clone());
        }
        args
    }
}

/// Trimmed value, with blank treated as unset
fn scalar(source: &dyn ConfigSource, key: &str) -> Option<String> {
    source
        .get_optional(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
