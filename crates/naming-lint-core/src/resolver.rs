//! Resolution of the effective pattern for a rule.

use crate::context::AnalyzerOptions;
use crate::pattern::{is_valid_pattern, NamePattern};

/// Default option namespace.
pub const DEFAULT_NAMESPACE: &str = "dotnet_diagnostic";

/// The pattern a rule should use in one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectivePattern {
    /// No pattern configured.
    UseDefault,
    /// A valid custom pattern.
    UseCustom(String),
    /// A configured value that is not a valid pattern.
    ConfigurationError(String),
}

impl EffectivePattern {
    /// Whether a value was read from configuration.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !matches!(self, Self::UseDefault)
    }

    /// The custom pattern to use, if any.
    #[must_use]
    pub fn custom(&self) -> Option<&str> {
        match self {
            Self::UseCustom(pattern) => Some(pattern),
            Self::UseDefault | Self::ConfigurationError(_) => None,
        }
    }
}

/// Builds the option key `<namespace>.<code>.pattern`.
#[must_use]
pub fn pattern_option_key(namespace: &str, code: &str) -> String {
    format!("{namespace}.{code}.pattern")
}

/// Looks up `key` in `options` and classifies the value.
///
/// A value is custom only if it is a valid pattern that also compiles as a
/// [`NamePattern`].
///
/// Scheduling the diagnostic for a [`EffectivePattern::ConfigurationError`]
/// is left to the caller; see `CompilationStart::read_pattern`.
#[must_use]
pub fn resolve_effective_pattern(key: &str, options: &AnalyzerOptions) -> EffectivePattern {
    match options.get(key) {
        None => EffectivePattern::UseDefault,
        Some(value) if is_valid_pattern(value) && NamePattern::new(value).is_ok() => {
            EffectivePattern::UseCustom(value.to_string())
        }
        Some(value) => EffectivePattern::ConfigurationError(value.to_string()),
    }
}
