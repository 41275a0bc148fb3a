use regex::Regex;
use std::sync::LazyLock;

use super::destination::parse_listing_notation;
use crate::types::Destination;

static RECORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}]*\}").expect("static regex must compile"));

/// Extract every `{ key:value, ... }` record from `xcodebuild -showdestinations` output
///
/// Section headings are ignored, so available and ineligible destinations are
/// both returned, in the order they appear. Records that do not parse are skipped.
pub fn parse_show_destinations_output(text: &str) -> Vec<Destination> {
    let mut destinations = Vec::new();

    for record in RECORD_RE.find_iter(text) {
        match parse_listing_notation(record.as_str()) {
            Ok(destination) => destinations.push(destination),
            Err(e) => tracing::warn!("Skipping destination record {:?}: {}", record.as_str(), e),
        }
    }

    tracing::debug!("Found {} destination(s) in listing", destinations.len());
    destinations
}
