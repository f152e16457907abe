//! Rule requiring `KeyValuePair<TKey, TValue>` members to be named `xByY`.

use crate::member_rule::MemberRuleSpec;
use naming_lint_core::{
    is_name_valid_with, CompilationStart, Rule, RuleDescriptor, RuleSessionBox, Severity,
    ShapeSpec,
};

/// Rule code for key-value-pair-member-name.
pub const CODE: &str = "NL0003";

/// Rule name for key-value-pair-member-name.
pub const NAME: &str = "key-value-pair-member-name";

/// Default pattern.
pub const DEFAULT_PATTERN: &str = "^_?[a-zA-Z]+By[A-Z][a-zA-Z0-9]*$";

const FORBIDDEN: &str = "KeyValuePair";

/// Descriptor for key-value-pair-member-name.
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Incorrect key/value pair name",
    subject: "Key/value pair",
    description: "A key/value pair name should follow the naming convention.",
    category: "Naming",
    default_severity: Severity::Warning,
    help_uri: "https://github.com/naming-lint/naming-lint/tree/main/docs/NL0003.md",
    default_pattern: DEFAULT_PATTERN,
    default_convention: "follow the 'xByY' naming convention",
};

pub(crate) const KEY_VALUE_PAIR_SHAPES: &[ShapeSpec] =
    &[ShapeSpec::exact("System.Collections.Generic.KeyValuePair`2")];

static SPEC: MemberRuleSpec = MemberRuleSpec {
    descriptor: &DESCRIPTOR,
    shapes: KEY_VALUE_PAIR_SHAPES,
    forbidden: Some(FORBIDDEN),
};

/// Returns whether `name` is a valid key/value pair member name under `pattern`.
#[must_use]
pub fn is_key_value_pair_member_name_valid(name: &str, pattern: &str) -> bool {
    is_name_valid_with(name, pattern, Some(FORBIDDEN))
}

/// Checks names of key/value pair fields, properties, parameters and locals.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValuePairMemberName;

impl KeyValuePairMemberName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for KeyValuePairMemberName {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn start(&self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
        SPEC.start(ctx)
    }
}
