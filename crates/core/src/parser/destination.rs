//! Destination notations
//!
//! Two input notations are accepted:
//! - option notation, as passed to `xcodebuild -destination`:
//!   `platform=iOS Simulator,name=iPhone 11,OS=14.0`
//! - listing notation, as printed by `xcodebuild -showdestinations`:
//!   `{ platform:iOS Simulator, id:7603..., name:iPad (7th generation) }`
//!
//! Both produce the same [`Destination`]; only option notation is emitted.

use crate::{
    error::{Error, Result},
    types::Destination,
};

/// Parse a destination in either option or listing notation
pub fn parse_destination(raw: &str) -> Result<Destination> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::ParseError("destination is empty".to_string()));
    }

    let destination = if trimmed.starts_with('{') {
        parse_listing_notation(trimmed)?
    } else {
        parse_option_notation(trimmed)?
    };

    tracing::debug!("Parsed destination {:?} from {:?}", destination, raw);
    Ok(destination)
}

/// Encode a destination in option notation
///
/// Values are written as-is; a value containing `,` will not survive a re-parse.
pub fn encode_destination_option(destination: &Destination) -> String {
    destination
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_option_notation(raw: &str) -> Result<Destination> {
    parse_pairs(raw, '=')
}

/// Parse a single `{ key:value, ... }` record
pub(crate) fn parse_listing_notation(raw: &str) -> Result<Destination> {
    let inner = raw
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| Error::ParseError(format!("unterminated destination record: {raw}")))?;

    parse_pairs(inner, ':')
}

/// Split on commas, then each pair on the first `separator`
///
/// Every non-blank segment must be a pair. A single bad segment fails the
/// whole destination.
fn parse_pairs(raw: &str, separator: char) -> Result<Destination> {
    let mut destination = Destination::new();

    for segment in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (key, value) = segment.split_once(separator).ok_or_else(|| {
            Error::ParseError(format!(
                "expected `key{separator}value` in destination, found {segment:?}"
            ))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(Error::ParseError(format!(
                "missing attribute name in destination pair {segment:?}"
            )));
        }
        // Listing keys must stay unambiguous once written back as `key=value`
        if separator == ':' && (key.contains('=') || key.starts_with('{')) {
            return Err(Error::ParseError(format!(
                "attribute name {key:?} cannot be encoded as a destination option"
            )));
        }
        destination.insert(key, value.trim());
    }

    if destination.is_empty() {
        return Err(Error::ParseError(format!(
            "no destination attributes found in {raw:?}"
        )));
    }

    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "{ platform:iOS Simulator, id:7603609F-2903-4A8A-9FFA-F15626F548FD, OS:14.0, name:iPad (7th generation) }";

    fn pairs(destination: &Destination) -> Vec<(&str, &str)> {
        destination.iter().collect()
    }

    #[test]
    fn test_empty_destination_fails() {
        assert!(matches!(parse_destination(""), Err(Error::ParseError(_))));
        assert!(matches!(parse_destination("   "), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_bare_word_fails() {
        assert!(matches!(parse_destination("cheese"), Err(Error::ParseError(_))));
        assert!(matches!(parse_destination("{ cheese }"), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_partial_input_fails_without_partial_result() {
        assert!(parse_destination("platform=iOS Simulator,cheese").is_err());
        assert!(parse_destination("{ platform:iOS Simulator, cheese }").is_err());
    }

    #[test]
    fn test_empty_braces_and_separators_only_fail() {
        assert!(parse_destination("{ }").is_err());
        assert!(parse_destination("{}").is_err());
        assert!(parse_destination(",,").is_err());
    }

    #[test]
    fn test_unterminated_listing_fails() {
        assert!(parse_destination("{ platform:iOS Simulator, name:iPhone 11").is_err());
    }

    #[test]
    fn test_missing_key_fails() {
        assert!(parse_destination("=iOS Simulator").is_err());
        assert!(parse_destination("{ :iOS Simulator }").is_err());
    }

    #[test]
    fn test_option_notation() {
        let destination = parse_destination("platform=iOS Simulator,name=iPhone 11,OS=14.0").unwrap();
        assert_eq!(
            pairs(&destination),
            vec![("platform", "iOS Simulator"), ("name", "iPhone 11"), ("OS", "14.0")]
        );
    }

    #[test]
    fn test_option_notation_splits_on_first_equals() {
        let destination = parse_destination("platform=macOS,variant=a=b").unwrap();
        assert_eq!(destination.get("variant"), Some("a=b"));
    }

    #[test]
    fn test_listing_notation() {
        let destination = parse_destination(LISTING).unwrap();
        assert_eq!(
            pairs(&destination),
            vec![
                ("platform", "iOS Simulator"),
                ("id", "7603609F-2903-4A8A-9FFA-F15626F548FD"),
                ("OS", "14.0"),
                ("name", "iPad (7th generation)"),
            ]
        );
    }

    #[test]
    fn test_listing_value_with_colon() {
        let destination = parse_destination(
            "{ platform:iOS, id:dvtdevice-DVTiPhonePlaceholder-iphoneos:placeholder, name:Any iOS Device }",
        )
        .unwrap();
        assert_eq!(
            destination.get("id"),
            Some("dvtdevice-DVTiPhonePlaceholder-iphoneos:placeholder")
        );
        assert!(!destination.contains_key("OS"));
    }

    #[test]
    fn test_listing_keys_that_would_not_reparse_fail() {
        assert!(matches!(
            parse_destination("{ platform:macOS, a=b:c }"),
            Err(Error::ParseError(_))
        ));
        assert!(matches!(
            parse_destination("{{x:1, platform:macOS }"),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn test_encode_option_notation() {
        let destination = parse_destination("platform=iOS Simulator,name=iPhone 11,OS=14.0").unwrap();
        assert_eq!(
            encode_destination_option(&destination),
            "platform=iOS Simulator,name=iPhone 11,OS=14.0"
        );
    }

    #[test]
    fn test_encode_listing_notation() {
        let destination = parse_destination(LISTING).unwrap();
        assert_eq!(
            encode_destination_option(&destination),
            "platform=iOS Simulator,id=7603609F-2903-4A8A-9FFA-F15626F548FD,OS=14.0,name=iPad (7th generation)"
        );
    }

    #[test]
    fn test_encoding_is_notation_independent() {
        let from_listing = parse_destination("{ platform:iOS Simulator, name:iPhone 11, OS:14.0 }").unwrap();
        let from_option = parse_destination("platform=iOS Simulator,name=iPhone 11,OS=14.0").unwrap();
        assert_eq!(from_listing, from_option);
        assert_eq!(
            encode_destination_option(&from_listing),
            encode_destination_option(&from_option)
        );
    }

    #[test]
    fn test_reparse_encoded_listing() {
        for raw in [
            LISTING,
            "{ platform:iOS, id:dvtdevice-DVTiPhonePlaceholder-iphoneos:placeholder, name:Any iOS Device }",
            "platform=macOS,arch=arm64,variant=Mac Catalyst",
            "{ platform:macOS, variant:a=b }",
        ] {
            let destination = parse_destination(raw).unwrap();
            let encoded = encode_destination_option(&destination);
            assert_eq!(parse_destination(&encoded).unwrap(), destination, "{raw}");
        }
    }
}
