//! Rule presets for common configurations.

use crate::{
    BooleanMemberName, BooleanMethodName, DictionaryMemberName, DictionaryMethodName,
    KeyValuePairMemberName, KeyValuePairMethodName, MockedMemberName, SetMemberName,
    SetMethodName, TestMethodName,
};
use naming_lint_core::{RuleBox, RuleDescriptor};

/// Preset configurations for naming-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every built-in rule.
    All,
    /// Rules checking field, property, parameter and local names.
    Members,
    /// Rules checking method names.
    Methods,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::All => all_rules(),
            Self::Members => member_rules(),
            Self::Methods => method_rules(),
        }
    }
}

/// Returns the member-name rules.
///
/// Includes:
/// - `dictionary-member-name` (NL0001)
/// - `set-member-name` (NL0002)
/// - `key-value-pair-member-name` (NL0003)
/// - `boolean-member-name` (NL0004)
/// - `mocked-member-name` (NL0005)
#[must_use]
pub fn member_rules() -> Vec<RuleBox> {
    vec![
        Box::new(DictionaryMemberName::new()),
        Box::new(SetMemberName::new()),
        Box::new(KeyValuePairMemberName::new()),
        Box::new(BooleanMemberName::new()),
        Box::new(MockedMemberName::new()),
    ]
}

/// Returns the method-name rules.
///
/// Includes:
/// - `test-method-name` (NL0101)
/// - `key-value-pair-method-name` (NL0102)
/// - `dictionary-method-name` (NL0103)
/// - `set-method-name` (NL0104)
/// - `boolean-method-name` (NL0105)
#[must_use]
pub fn method_rules() -> Vec<RuleBox> {
    vec![
        Box::new(TestMethodName::new()),
        Box::new(KeyValuePairMethodName::new()),
        Box::new(DictionaryMethodName::new()),
        Box::new(SetMethodName::new()),
        Box::new(BooleanMethodName::new()),
    ]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    let mut rules = member_rules();
    rules.extend(method_rules());
    rules
}

/// Returns the descriptors of all available rules, ordered by code.
#[must_use]
pub fn all_descriptors() -> Vec<&'static RuleDescriptor> {
    let mut descriptors: Vec<_> = all_rules().iter().map(|rule| rule.descriptor()).collect();
    descriptors.sort_by_key(|d| d.code);
    descriptors
}
