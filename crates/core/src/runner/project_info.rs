use serde::Deserialize;

/// Output of `xcodebuild -list -json`
///
/// xcodebuild reports either a `project` or a `workspace` object depending
/// on what it was pointed at.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub project: Option<ContainerInfo>,
    #[serde(default)]
    pub workspace: Option<ContainerInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContainerInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub schemes: Vec<String>,
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default)]
    pub configurations: Vec<String>,
}

impl ProjectInfo {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn schemes(&self) -> &[String] {
        self.project
            .as_ref()
            .or(self.workspace.as_ref())
            .map(|c| c.schemes.as_slice())
            .unwrap_or(&[])
    }

    pub fn default_scheme(&self) -> Option<&str> {
        self.schemes().first().map(String::as_str)
    }
}
