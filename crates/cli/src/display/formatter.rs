use xcbuild_runner_core::{Destination, command::shell_quote};

/// One line per destination: label followed by the canonical `-destination` value
pub fn format_destination_line(index: usize, destination: &Destination) -> String {
    format!(
        "{}. {}\n   -destination {}",
        index + 1,
        destination.label(),
        shell_quote(&destination.to_option_string())
    )
}

pub fn print_destinations(destinations: &[Destination]) {
    if destinations.is_empty() {
        println!("❌ No destinations found.");
        return;
    }

    println!("✅ Found {} destination(s):\n", destinations.len());
    for (i, destination) in destinations.iter().enumerate() {
        println!("{}", format_destination_line(i, destination));
    }
}
