use serde::Serialize;
use std::fmt;

/// A single test-selection filter in xcodebuild flag form, e.g. `-only-testing:AppTests`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ConstraintToken(String);

impl ConstraintToken {
    /// Build a token from a raw constraint, adding the leading dash
    pub fn from_raw(raw: &str) -> Self {
        Self(format!("-{raw}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConstraintToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ConstraintToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ConstraintToken> for String {
    fn from(token: ConstraintToken) -> Self {
        token.0
    }
}

impl PartialEq<&str> for ConstraintToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_adds_dash() {
        let token = ConstraintToken::from_raw("only-testing:AppTests");
        assert_eq!(token.as_str(), "-only-testing:AppTests");
        assert_eq!(token.to_string(), "-only-testing:AppTests");
    }

    #[test]
    fn test_raw_with_dash_gets_a_second_one() {
        // The raw text is never inspected
        let token = ConstraintToken::from_raw("-enableCodeCoverage");
        assert_eq!(token, "--enableCodeCoverage");
    }
}
