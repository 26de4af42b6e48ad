//! Text format of a typed ID: `{prefix}_{ksuid}`.

use regex::Regex;

use crate::error::IdError;

/// Separator between the prefix and the KSUID.
pub const SEPARATOR: char = '_';

/// Length of a base-62 encoded KSUID.
pub const KSUID_LEN: usize = 27;

/// Largest valid KSUID (2^160 - 1) in base-62.
///
/// The alphabet is ASCII-ordered and the length fixed, so any longer value
/// compares greater as a plain string.
pub const MAX_KSUID: &str = "aWgEPTl1tmebfsQzFP4bxwgy80V";

/// Splits an ID into `(prefix, ksuid)`.
///
/// The string must contain exactly one separator with non-empty text on
/// both sides. The suffix shape is not checked here.
pub fn split_id(s: &str) -> Result<(&str, &str), IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }

    let mut parts = s.split(SEPARATOR);
    let (Some(prefix), Some(suffix)) = (parts.next(), parts.next()) else {
        return Err(IdError::MissingSeparator);
    };

    let extra = parts.count();
    if extra > 0 {
        return Err(IdError::TooManySeparators { count: extra + 1 });
    }

    if prefix.is_empty() {
        return Err(IdError::EmptySegment { segment: "prefix" });
    }
    if suffix.is_empty() {
        return Err(IdError::EmptySegment { segment: "suffix" });
    }

    Ok((prefix, suffix))
}

/// Builds the validator for a prefix.
///
/// Matches the whole candidate: the literal prefix, the separator, then
/// exactly [`KSUID_LEN`] alphanumeric characters and nothing after.
pub(crate) fn validator(prefix: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        "^{}{}[a-zA-Z0-9]{{{}}}$",
        regex::escape(prefix),
        SEPARATOR,
        KSUID_LEN
    ))
}

/// Same check as [`validator`] without a compiled pattern.
pub(crate) fn matches_shape(prefix: &str, candidate: &str) -> bool {
    candidate
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
        .is_some_and(|ksuid| {
            ksuid.len() == KSUID_LEN && ksuid.bytes().all(|b| b.is_ascii_alphanumeric())
        })
}

/// Returns why a prefix cannot be used in the ID format, if it can't.
pub(crate) fn prefix_problem(prefix: &str) -> Option<&'static str> {
    if prefix.contains(SEPARATOR) {
        Some("contains the '_' separator")
    } else if prefix.chars().any(char::is_whitespace) {
        Some("contains whitespace")
    } else if !prefix.is_ascii() {
        Some("contains non-ASCII characters")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const VALID: &str = "2ZkqXPWOtKid1EUt8mi7zfxvhJV";

    #[test]
    fn test_split_valid() {
        let id = format!("dog_{VALID}");
        assert_eq!(split_id(&id).unwrap(), ("dog", VALID));
    }

    #[rstest]
    #[case("", IdError::Empty)]
    #[case("nounderscore", IdError::MissingSeparator)]
    #[case("too_many_underscores", IdError::TooManySeparators { count: 2 })]
    #[case("_abc", IdError::EmptySegment { segment: "prefix" })]
    #[case("dog_", IdError::EmptySegment { segment: "suffix" })]
    #[case("_", IdError::EmptySegment { segment: "prefix" })]
    fn test_split_rejects(#[case] input: &str, #[case] expected: IdError) {
        assert_eq!(split_id(input).unwrap_err(), expected);
    }

    #[test]
    fn test_validator_anchors_both_ends() {
        let re = validator("dog").unwrap();
        assert!(re.is_match(&format!("dog_{VALID}")));
        assert!(!re.is_match(&format!("dog_{VALID}x")));
        assert!(!re.is_match(&format!("xdog_{VALID}")));
        assert!(!re.is_match("dog_short"));
    }

    #[test]
    fn test_validator_escapes_prefix() {
        let re = validator("a.b").unwrap();
        assert!(re.is_match(&format!("a.b_{VALID}")));
        assert!(!re.is_match(&format!("axb_{VALID}")));
    }

    #[rstest]
    #[case("dog", true)]
    #[case("cat", false)]
    fn test_shape_agrees_with_validator(#[case] prefix: &str, #[case] expected: bool) {
        let candidate = format!("dog_{VALID}");
        assert_eq!(matches_shape(prefix, &candidate), expected);
        assert_eq!(validator(prefix).unwrap().is_match(&candidate), expected);
    }

    #[rstest]
    #[case("dog", None)]
    #[case("d_g", Some("contains the '_' separator"))]
    #[case("d g", Some("contains whitespace"))]
    #[case("dög", Some("contains non-ASCII characters"))]
    fn test_prefix_problem(#[case] prefix: &str, #[case] expected: Option<&'static str>) {
        assert_eq!(prefix_problem(prefix), expected);
    }
}
