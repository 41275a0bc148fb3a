use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Exit code xcodebuild uses when tests ran and some of them failed
pub const TEST_FAILURE_EXIT_CODE: i32 = 65;

/// How a run whose tests failed (exit code 65) is classified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestFailurePolicy {
    /// Report [`TestOutcome::TestsFailed`] and let the caller carry on
    #[default]
    Tolerate,
    /// Treat failing tests as an error
    Fail,
}

impl FromStr for TestFailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tolerate" | "allow" => Ok(Self::Tolerate),
            "fail" | "strict" => Ok(Self::Fail),
            other => Err(Error::ConfigError(format!(
                "Invalid test failure policy: {other} (expected 'tolerate' or 'fail')"
            ))),
        }
    }
}

impl fmt::Display for TestFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tolerate => f.write_str("tolerate"),
            Self::Fail => f.write_str("fail"),
        }
    }
}

/// Result of a test run that did not end in a fatal error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestOutcome {
    Passed,
    TestsFailed,
}

/// Classify an xcodebuild exit code
pub fn classify_exit_code(code: i32, policy: TestFailurePolicy) -> Result<TestOutcome> {
    match (code, policy) {
        (0, _) => Ok(TestOutcome::Passed),
        (TEST_FAILURE_EXIT_CODE, TestFailurePolicy::Tolerate) => Ok(TestOutcome::TestsFailed),
        (TEST_FAILURE_EXIT_CODE, TestFailurePolicy::Fail) => Err(Error::TestsFailed { code }),
        (code, _) => Err(Error::UnexpectedExitCode { code }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        for policy in [TestFailurePolicy::Tolerate, TestFailurePolicy::Fail] {
            assert_eq!(classify_exit_code(0, policy).unwrap(), TestOutcome::Passed);
        }
    }

    #[test]
    fn test_failures_tolerated() {
        assert_eq!(
            classify_exit_code(65, TestFailurePolicy::Tolerate).unwrap(),
            TestOutcome::TestsFailed
        );
    }

    #[test]
    fn test_failures_fatal_under_fail_policy() {
        let err = classify_exit_code(65, TestFailurePolicy::Fail).unwrap_err();
        assert!(matches!(err, Error::TestsFailed { code: 65 }));
        assert_eq!(err.exit_code(), Some(65));
    }

    #[test]
    fn test_unexpected_codes() {
        for code in [1, 64, 66, 70, -1] {
            let err = classify_exit_code(code, TestFailurePolicy::Tolerate).unwrap_err();
            assert!(matches!(err, Error::UnexpectedExitCode { code: c } if c == code));
        }
        assert_eq!(
            classify_exit_code(70, TestFailurePolicy::Tolerate)
                .unwrap_err()
                .to_string(),
            "xcodebuild failed with unexpected exit code 70"
        );
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("tolerate".parse::<TestFailurePolicy>().unwrap(), TestFailurePolicy::Tolerate);
        assert_eq!(" FAIL ".parse::<TestFailurePolicy>().unwrap(), TestFailurePolicy::Fail);
        assert_eq!("strict".parse::<TestFailurePolicy>().unwrap(), TestFailurePolicy::Fail);
        assert!("maybe".parse::<TestFailurePolicy>().is_err());
        assert_eq!(TestFailurePolicy::default().to_string(), "tolerate");
    }
}
