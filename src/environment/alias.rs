//! Alias validation and matching.
//!
//! An alias is one or more ASCII alphanumeric segments joined by single
//! hyphens (`qa`, `pre-production`). Matching is case-insensitive, and a
//! registered alias also matches its own spelling with the hyphens removed.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DeployEnvError, Result};

/// The grammar every alias must satisfy.
pub const ALIAS_PATTERN: &str = "[a-zA-Z0-9]+(-[a-zA-Z0-9]+)*";

static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{})$", ALIAS_PATTERN)).expect("ALIAS_REGEX must compile")
});

/// A string that has passed [`validate_alias_format`].
///
/// The original spelling is kept; no case folding happens at validation time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alias(String);

impl Alias {
    /// The alias as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the alias, returning the validated string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Alias {
    type Error = DeployEnvError;

    fn try_from(value: &str) -> Result<Self> {
        validate_alias_format(value)
    }
}

/// Validate that `candidate` is a well-formed alias.
///
/// # Errors
///
/// Returns `NullInput` if `candidate` is `None`.
/// Returns `InvalidFormat` if it is empty, contains characters outside
/// `[a-zA-Z0-9-]`, or has a leading, trailing or doubled hyphen.
///
/// # Example
///
/// ```
/// use deployenv::validate_alias_format;
///
/// assert_eq!(validate_alias_format("pre-production").unwrap().as_str(), "pre-production");
/// assert!(validate_alias_format("pre--production").is_err());
/// assert!(validate_alias_format(None).is_err());
/// ```
pub fn validate_alias_format<'a>(candidate: impl Into<Option<&'a str>>) -> Result<Alias> {
    let candidate = candidate
        .into()
        .ok_or(DeployEnvError::NullInput { argument: "alias" })?;

    if !ALIAS_REGEX.is_match(candidate) {
        return Err(DeployEnvError::InvalidFormat {
            alias: candidate.to_string(),
        });
    }

    Ok(Alias(candidate.to_string()))
}

/// Check whether a registered `alias` matches a lookup `candidate`.
///
/// True when the two are equal ignoring case, or when `alias` with every
/// hyphen removed equals `candidate` ignoring case. Hyphens are only ever
/// stripped from the registered side.
pub fn matches(alias: &str, candidate: &str) -> bool {
    if eq_ignore_case(alias, candidate) {
        return true;
    }
    eq_ignore_case(&alias.replace('-', ""), candidate)
}

/// Character-wise case-insensitive comparison.
///
/// Two characters are equal if they are identical, or if their upper-case or
/// lower-case mappings agree.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    let mut a = a.chars();
    let mut b = b.chars();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_eq_ignore_case(x, y) => continue,
            _ => return false,
        }
    }
}

fn chars_eq_ignore_case(x: char, y: char) -> bool {
    x == y || x.to_uppercase().eq(y.to_uppercase()) || x.to_lowercase().eq(y.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_segment() {
        assert_eq!(validate_alias_format("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn accepts_hyphenated_segments() {
        assert!(validate_alias_format("ab-cd").is_ok());
        assert!(validate_alias_format("ab-cd-ef").is_ok());
    }

    #[test]
    fn accepts_mixed_case_and_digits_unchanged() {
        let alias = validate_alias_format("Pre-Prod2").unwrap();
        assert_eq!(alias.as_str(), "Pre-Prod2");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            validate_alias_format(""),
            Err(DeployEnvError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_leading_hyphen() {
        assert!(matches!(
            validate_alias_format("-abc"),
            Err(DeployEnvError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_trailing_hyphen() {
        assert!(matches!(
            validate_alias_format("abc-"),
            Err(DeployEnvError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_double_hyphen() {
        assert!(matches!(
            validate_alias_format("ab--cd"),
            Err(DeployEnvError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_whitespace_and_punctuation() {
        for bad in ["ab cd", "ab_cd", "ab.cd", " abc", "abc\n"] {
            assert!(
                matches!(
                    validate_alias_format(bad),
                    Err(DeployEnvError::InvalidFormat { .. })
                ),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn rejects_non_ascii_letters() {
        assert!(validate_alias_format("stagé").is_err());
    }

    #[test]
    fn absent_is_null_input() {
        assert!(matches!(
            validate_alias_format(None),
            Err(DeployEnvError::NullInput { argument: "alias" })
        ));
    }

    #[test]
    fn try_from_validates() {
        assert!(Alias::try_from("live").is_ok());
        assert!(Alias::try_from("li ve").is_err());
    }

    #[test]
    fn matches_ignores_case() {
        assert!(matches("qa", "QA"));
        assert!(matches("Internal-Acceptance", "internal-ACCEPTANCE"));
    }

    #[test]
    fn matches_stripped_alias() {
        assert!(matches("internal-acceptance", "internalacceptance"));
        assert!(matches("internal-acceptance", "InternalAcceptance"));
    }

    #[test]
    fn matches_does_not_strip_candidate() {
        assert!(!matches("preproduction", "pre-production"));
        assert!(!matches("internal-acceptance", "internal-accept-ance"));
    }

    #[test]
    fn matches_rejects_different_words() {
        assert!(!matches("qa", "qaa"));
        assert!(!matches("live", "lives"));
    }

    #[test]
    fn eq_ignore_case_handles_non_ascii() {
        assert!(eq_ignore_case("Ärger", "äRGER"));
        assert!(!eq_ignore_case("abc", "abcd"));
    }
}
