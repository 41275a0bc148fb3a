use serde::Serialize;

/// What an [`XcodebuildCommand`] asks xcodebuild to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandType {
    Test,
    List,
    ShowDestinations,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XcodebuildCommand {
    pub command_type: CommandType,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<String>,
    pub env: Vec<(String, String)>,
}

impl XcodebuildCommand {
    pub const PROGRAM: &'static str = "xcodebuild";

    pub fn new(command_type: CommandType, args: Vec<String>) -> Self {
        Self {
            command_type,
            program: Self::PROGRAM.to_string(),
            args,
            working_dir: None,
            env: Vec::new(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<String>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Render the command for display; quoting follows POSIX single quotes
    pub fn to_shell_command(&self) -> String {
        let mut cmd = String::new();
        for (key, value) in &self.env {
            cmd.push_str(&format!("{key}={} ", shell_quote(value)));
        }
        cmd.push_str(&shell_quote(&self.program));
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&shell_quote(arg));
        }
        cmd
    }
}

/// Quote `arg` for a POSIX shell, leaving plain words untouched
pub fn shell_quote(arg: &str) -> String {
    let needs_quotes = arg.is_empty()
        || arg.chars().any(|c| {
            c.is_whitespace()
                || matches!(
                    c,
                    '\'' | '"' | '(' | ')' | '$' | '`' | '\\' | '&' | ';' | '|' | '<' | '>' | '*' | '?' | '!' | '#' | '{' | '}' | '[' | ']'
                )
        });

    if !needs_quotes {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_args_unquoted() {
        let cmd = XcodebuildCommand::new(
            CommandType::List,
            vec!["-project".into(), "App.xcodeproj".into(), "-list".into(), "-json".into()],
        );
        assert_eq!(cmd.to_shell_command(), "xcodebuild -project App.xcodeproj -list -json");
    }

    #[test]
    fn test_spaces_and_parentheses_quoted() {
        let cmd = XcodebuildCommand::new(
            CommandType::Test,
            vec![
                "-destination".into(),
                "platform=iOS Simulator,name=iPad (7th generation)".into(),
            ],
        );
        assert_eq!(
            cmd.to_shell_command(),
            "xcodebuild -destination 'platform=iOS Simulator,name=iPad (7th generation)'"
        );
    }

    #[test]
    fn test_embedded_single_quote() {
        assert_eq!(shell_quote("Bob's Mac"), r"'Bob'\''s Mac'");
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn test_working_dir_not_rendered() {
        let cmd = XcodebuildCommand::new(CommandType::Test, vec!["test".into()])
            .with_working_dir("ios/App");
        assert_eq!(cmd.working_dir.as_deref(), Some("ios/App"));
        assert_eq!(cmd.to_shell_command(), "xcodebuild test");
    }

    #[test]
    fn test_env_prefix() {
        let cmd = XcodebuildCommand::new(CommandType::Test, vec!["test".into()])
            .with_env("NSUnbufferedIO", "YES");
        assert_eq!(cmd.to_shell_command(), "NSUnbufferedIO=YES xcodebuild test");
    }
}
