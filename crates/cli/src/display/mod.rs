pub mod command_breakdown;
pub mod formatter;

pub use command_breakdown::print_command_breakdown;
pub use formatter::{format_destination_line, print_destinations};
