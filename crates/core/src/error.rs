use std::io;

/// Errors that can occur during xcbuild-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("xcodebuild test failed: tests ran with failures (exit code {code})")]
    TestsFailed { code: i32 },

    #[error("xcodebuild failed with unexpected exit code {code}")]
    UnexpectedExitCode { code: i32 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Exit code reported by xcodebuild, when the error carries one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::TestsFailed { code } | Error::UnexpectedExitCode { code } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for xcbuild-runner operations
pub type Result<T> = std::result::Result<T, Error>;
