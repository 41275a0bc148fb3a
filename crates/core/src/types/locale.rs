use serde::Serialize;

/// Test language and region, as passed to `-testLanguage` / `-testRegion`
///
/// Either half may be missing: `fr` has no region and `_US` has no language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locale {
    pub language: Option<String>,
    pub region: Option<String>,
}

impl Locale {
    /// Parse a locale identifier such as `en_US` or `fr`
    ///
    /// Returns `None` when neither a language nor a region is present.
    /// Anything after a second `_` is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw
            .trim()
            .split('_')
            .map(|part| Some(part.trim()).filter(|p| !p.is_empty()).map(String::from));
        let language = parts.next().flatten();
        let region = parts.next().flatten();

        if language.is_none() && region.is_none() {
            return None;
        }
        Some(Self { language, region })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_and_region() {
        let locale = Locale::parse("en_US").unwrap();
        assert_eq!(locale.language.as_deref(), Some("en"));
        assert_eq!(locale.region.as_deref(), Some("US"));
    }

    #[test]
    fn test_parse_language_only() {
        let locale = Locale::parse("fr").unwrap();
        assert_eq!(locale.language.as_deref(), Some("fr"));
        assert_eq!(locale.region, None);
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("   "), None);
        assert_eq!(Locale::parse("_"), None);
    }

    #[test]
    fn test_parse_region_only() {
        let locale = Locale::parse("_US").unwrap();
        assert_eq!(locale.language, None);
        assert_eq!(locale.region.as_deref(), Some("US"));
    }

    #[test]
    fn test_parse_trailing_underscore() {
        let locale = Locale::parse("de_").unwrap();
        assert_eq!(locale.language.as_deref(), Some("de"));
        assert_eq!(locale.region, None);
    }
}
