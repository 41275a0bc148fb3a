//! xcodebuild command generation

pub mod builders;
pub mod xcodebuild_command;

// Re-export commonly used types
pub use builders::{ListCommandBuilder, ShowDestinationsCommandBuilder, TestCommandBuilder};
pub use xcodebuild_command::{CommandType, XcodebuildCommand, shell_quote};
