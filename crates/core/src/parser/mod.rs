//! Parsers for the textual notations found in CI configuration and xcodebuild output

pub mod constraints;
pub mod destination;
pub mod show_destinations;

pub use constraints::parse_constraints;
pub use destination::{encode_destination_option, parse_destination};
pub use show_destinations::parse_show_destinations_output;
