//! xcbuild-runner - drive `xcodebuild test` from declarative CI configuration
//!
//! This crate provides functionality to:
//! - Parse test constraint lists into xcodebuild filter flags
//! - Parse destinations in option (`key=value,...`) and listing (`{ key:value, ... }`) notation
//! - Extract all destinations from `xcodebuild -showdestinations` output
//! - Assemble the xcodebuild argument vector, run it and classify the exit code
pub mod command;
pub mod config;
pub mod error;
pub mod parser;
pub mod runner;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{CommandType, XcodebuildCommand};
pub use config::{ConfigSource, Settings};
pub use parser::{
    encode_destination_option, parse_constraints, parse_destination,
    parse_show_destinations_output,
};
pub use runner::{TestFailurePolicy, TestOutcome, XcodebuildRunner};
