//! Rule requiring set-typed members to be named `uniqueXs`.
//!
//! Applies to any type implementing `ISet<T>`. The default pattern already
//! rejects a trailing `Set`; the `HashSet` substring is rejected on top of
//! any pattern. A bare `Set` substring is not, since it occurs inside plain
//! words such as `uniqueAssets`.

use crate::member_rule::MemberRuleSpec;
use naming_lint_core::{
    is_name_valid_with, CompilationStart, Rule, RuleDescriptor, RuleSessionBox, Severity,
    ShapeSpec,
};

/// Rule code for set-member-name.
pub const CODE: &str = "NL0002";

/// Rule name for set-member-name.
pub const NAME: &str = "set-member-name";

/// Default pattern.
pub const DEFAULT_PATTERN: &str = "^((_?u)|U)nique[A-Z][a-zA-Z0-9]*s(?<!Set)$";

const FORBIDDEN: &str = "HashSet";

/// Descriptor for set-member-name.
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Incorrect set name",
    subject: "Set",
    description: "A set name should follow the naming convention.",
    category: "Naming",
    default_severity: Severity::Warning,
    help_uri: "https://github.com/naming-lint/naming-lint/tree/main/docs/NL0002.md",
    default_pattern: DEFAULT_PATTERN,
    default_convention: "follow the 'uniqueXs' naming convention",
};

pub(crate) const SET_SHAPES: &[ShapeSpec] =
    &[ShapeSpec::implements("System.Collections.Generic.ISet`1")];

static SPEC: MemberRuleSpec = MemberRuleSpec {
    descriptor: &DESCRIPTOR,
    shapes: SET_SHAPES,
    forbidden: Some(FORBIDDEN),
};

/// Returns whether `name` is a valid set member name under `pattern`.
#[must_use]
pub fn is_set_member_name_valid(name: &str, pattern: &str) -> bool {
    is_name_valid_with(name, pattern, Some(FORBIDDEN))
}

/// Checks names of set fields, properties, parameters and locals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetMemberName;

impl SetMemberName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SetMemberName {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn start(&self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
        SPEC.start(ctx)
    }
}
