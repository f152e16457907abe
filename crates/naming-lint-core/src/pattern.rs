//! Regular-expression validation and compiled name patterns.

use fancy_regex::Regex;
use thiserror::Error;

/// A user-supplied or built-in pattern failed to compile.
#[derive(Debug, Error, miette::Diagnostic)]
#[error("'{pattern}' is an invalid regex pattern")]
#[diagnostic(code(naming_lint::pattern::invalid))]
pub struct PatternError {
    /// The raw pattern text.
    pub pattern: String,
    /// Parser message.
    #[help]
    pub message: String,
}

/// Returns whether `candidate` is a usable regular expression.
///
/// Blank input is rejected. Otherwise the pattern is compiled and run once
/// against the empty string; any failure makes it invalid.
#[must_use]
pub fn is_valid_pattern(candidate: &str) -> bool {
    if candidate.trim().is_empty() {
        return false;
    }

    Regex::new(candidate)
        .and_then(|regex| regex.is_match(""))
        .is_ok()
}

/// A compiled pattern that must match an identifier in full.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    regex: Regex,
}

impl NamePattern {
    /// Compiles `pattern`, anchoring it at both ends.
    ///
    /// The raw text must compile on its own as well as anchored, so a
    /// pattern that only parses once wrapped (`a)|(b`) is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is blank or does not compile.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let invalid = |message: String| PatternError {
            pattern: pattern.to_string(),
            message,
        };

        if pattern.trim().is_empty() {
            return Err(invalid("pattern is blank".to_string()));
        }

        Regex::new(pattern).map_err(|e| invalid(e.to_string()))?;
        let regex =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Returns the pattern as written by its author.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns whether the whole of `name` matches.
    ///
    /// A match that aborts at runtime (backtrack limit) counts as no match.
    #[must_use]
    pub fn is_full_match(&self, name: &str) -> bool {
        self.regex.is_match(name).unwrap_or(false)
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for NamePattern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_patterns_are_invalid() {
        assert!(!is_valid_pattern(""));
        assert!(!is_valid_pattern(" "));
        assert!(!is_valid_pattern("\t\n"));
    }

    #[test]
    fn malformed_patterns_are_invalid() {
        for candidate in ["[", "(", "(?<!", "a)b"] {
            assert!(!is_valid_pattern(candidate), "{candidate} should be invalid");
        }
    }

    #[test]
    fn well_formed_patterns_are_valid() {
        for candidate in [
            "^.*Boolean$",
            "^_?[a-zA-Z]+sBy[A-Z][a-zA-Z0-9]*(?<!Dictionary)$",
            "^faked.*",
            "[a-z]+",
        ] {
            assert!(is_valid_pattern(candidate), "{candidate} should be valid");
        }
    }

    #[test]
    fn name_pattern_requires_full_match() {
        let pattern = NamePattern::new("is[A-Z]").expect("valid pattern");
        assert!(pattern.is_full_match("isA"));
        assert!(!pattern.is_full_match("isAbc"));
        assert!(!pattern.is_full_match("xisA"));
    }

    #[test]
    fn name_pattern_supports_lookbehind() {
        let pattern =
            NamePattern::new("^_?[a-zA-Z]+sBy[A-Z][a-zA-Z0-9]*(?<!Dictionary)$").expect("valid");
        assert!(pattern.is_full_match("itemsById"));
        assert!(!pattern.is_full_match("itemsByIdDictionary"));
    }

    #[test]
    fn name_pattern_keeps_source_text() {
        let pattern = NamePattern::new("^.*Boolean$").expect("valid pattern");
        assert_eq!(pattern.as_str(), "^.*Boolean$");
    }

    #[test]
    fn name_pattern_rejects_invalid_input() {
        let err = NamePattern::new("[").expect_err("should fail");
        assert_eq!(err.to_string(), "'[' is an invalid regex pattern");
        assert!(NamePattern::new("  ").is_err());
    }

    #[test]
    fn name_pattern_rejects_text_that_only_compiles_when_wrapped() {
        assert!(!is_valid_pattern("a)|(b"));
        let err = NamePattern::new("a)|(b").expect_err("unbalanced groups");
        assert_eq!(err.to_string(), "'a)|(b' is an invalid regex pattern");
    }

    #[test]
    fn name_pattern_rejects_trailing_comment_in_verbose_mode() {
        let pattern = "(?x)^on[A-Z].* # trailing comment";
        assert!(is_valid_pattern(pattern));
        assert!(NamePattern::new(pattern).is_err());
    }
}
