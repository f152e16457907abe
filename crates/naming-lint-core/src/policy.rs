//! Name policy: the identifier predicate and violation message text.

use crate::pattern::{NamePattern, PatternError};
use crate::resolver::EffectivePattern;
use crate::rule::RuleDescriptor;

/// The pattern a rule validates names against in one compilation,
/// together with the explanation used when a name fails it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePolicy {
    pattern: NamePattern,
    message_suffix: String,
}

impl NamePolicy {
    /// The built-in policy of a rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule's default pattern does not compile.
    pub fn default_for(descriptor: &RuleDescriptor) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: NamePattern::new(descriptor.default_pattern)?,
            message_suffix: descriptor.default_convention.to_string(),
        })
    }

    /// A policy built from a user-supplied pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` does not compile.
    pub fn custom(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: NamePattern::new(pattern)?,
            message_suffix: custom_pattern_suffix(pattern),
        })
    }

    /// Picks the policy for an effective pattern.
    ///
    /// A configuration error falls back to the default policy; the error
    /// itself is reported separately, once per compilation.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected pattern does not compile.
    pub fn resolve(
        descriptor: &RuleDescriptor,
        effective: &EffectivePattern,
    ) -> Result<Self, PatternError> {
        match effective {
            EffectivePattern::UseCustom(pattern) => Self::custom(pattern),
            EffectivePattern::UseDefault | EffectivePattern::ConfigurationError(_) => {
                Self::default_for(descriptor)
            }
        }
    }

    /// Returns the compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &NamePattern {
        &self.pattern
    }

    /// Returns the explanation for names that fail this policy.
    #[must_use]
    pub fn message_suffix(&self) -> &str {
        &self.message_suffix
    }

    /// Checks `name` against this policy.
    #[must_use]
    pub fn is_valid(&self, name: &str, forbidden: Option<&str>) -> bool {
        is_name_valid(name, &self.pattern, forbidden)
    }
}

/// Returns whether `name` satisfies `pattern`.
///
/// Blank names are never valid. When `forbidden` is given, a name that
/// contains it (ignoring case) is invalid even if the pattern accepts it.
#[must_use]
pub fn is_name_valid(name: &str, pattern: &NamePattern, forbidden: Option<&str>) -> bool {
    if name.trim().is_empty() {
        return false;
    }
    if let Some(forbidden) = forbidden {
        if contains_ignore_case(name, forbidden) {
            return false;
        }
    }
    pattern.is_full_match(name)
}

/// Like [`is_name_valid`] but compiles `pattern` first.
///
/// An invalid pattern accepts nothing.
#[must_use]
pub fn is_name_valid_with(name: &str, pattern: &str, forbidden: Option<&str>) -> bool {
    NamePattern::new(pattern).is_ok_and(|p| is_name_valid(name, &p, forbidden))
}

/// Builds `"<subject> '<name>' does not <suffix>"`.
#[must_use]
pub fn format_message(subject: &str, name: &str, suffix: &str) -> String {
    format!("{subject} '{name}' does not {suffix}")
}

/// The explanation used for custom patterns.
#[must_use]
pub fn custom_pattern_suffix(pattern: &str) -> String {
    format!("match the '{pattern}' regex pattern")
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(&needle.to_lowercase())
}
