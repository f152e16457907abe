//! Rule requiring dictionary-typed members to be named `xsByY`.
//!
//! Applies to any type implementing `IDictionary` or `IDictionary<TKey, TValue>`.
//! Names containing "Dictionary" are rejected even when the pattern accepts
//! them.

use crate::member_rule::MemberRuleSpec;
use naming_lint_core::{
    is_name_valid_with, CompilationStart, Rule, RuleDescriptor, RuleSessionBox, Severity,
    ShapeSpec,
};

/// Rule code for dictionary-member-name.
pub const CODE: &str = "NL0001";

/// Rule name for dictionary-member-name.
pub const NAME: &str = "dictionary-member-name";

/// Default pattern.
pub const DEFAULT_PATTERN: &str = "^_?[a-zA-Z]+sBy[A-Z][a-zA-Z0-9]*(?<!Dictionary)$";

const FORBIDDEN: &str = "Dictionary";

/// Descriptor for dictionary-member-name.
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Incorrect dictionary name",
    subject: "Dictionary",
    description: "A dictionary name should follow the naming convention.",
    category: "Naming",
    default_severity: Severity::Warning,
    help_uri: "https://github.com/naming-lint/naming-lint/tree/main/docs/NL0001.md",
    default_pattern: DEFAULT_PATTERN,
    default_convention: "follow the 'xsByY' naming convention",
};

pub(crate) const DICTIONARY_SHAPES: &[ShapeSpec] = &[
    ShapeSpec::implements("System.Collections.IDictionary"),
    ShapeSpec::implements("System.Collections.Generic.IDictionary`2"),
];

static SPEC: MemberRuleSpec = MemberRuleSpec {
    descriptor: &DESCRIPTOR,
    shapes: DICTIONARY_SHAPES,
    forbidden: Some(FORBIDDEN),
};

/// Returns whether `name` is a valid dictionary member name under `pattern`.
#[must_use]
pub fn is_dictionary_member_name_valid(name: &str, pattern: &str) -> bool {
    is_name_valid_with(name, pattern, Some(FORBIDDEN))
}

/// Checks names of dictionary fields, properties, parameters and locals.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryMemberName;

impl DictionaryMemberName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DictionaryMemberName {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn start(&self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
        SPEC.start(ctx)
    }
}
