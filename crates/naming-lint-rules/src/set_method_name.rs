//! Rule requiring methods that return a set to be named `GetUniqueXs`.

use crate::method_rule::{MethodFilter, MethodRuleSpec};
use crate::set_member_name::SET_SHAPES;
use naming_lint_core::{
    is_name_valid_with, CompilationStart, Rule, RuleDescriptor, RuleSessionBox, Severity,
};

/// Rule code for set-method-name.
pub const CODE: &str = "NL0104";

/// Rule name for set-method-name.
pub const NAME: &str = "set-method-name";

/// Default pattern.
pub const DEFAULT_PATTERN: &str = "^GetUnique[A-Z][a-zA-Z0-9]*s(?<!Set)$";

/// Descriptor for set-method-name.
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Incorrect name of method that returns a set",
    subject: "Method",
    description: "A method that returns a set should follow the naming convention.",
    category: "Naming",
    default_severity: Severity::Warning,
    help_uri: "https://github.com/naming-lint/naming-lint/tree/main/docs/NL0104.md",
    default_pattern: DEFAULT_PATTERN,
    default_convention: "follow the 'GetUniqueXs' naming convention",
};

static SPEC: MethodRuleSpec = MethodRuleSpec {
    descriptor: &DESCRIPTOR,
    shapes: SET_SHAPES,
    filter: MethodFilter::OrdinaryNonOverride,
};

/// Returns whether `name` is a valid name for a set-returning method.
#[must_use]
pub fn is_set_method_name_valid(name: &str, pattern: &str) -> bool {
    is_name_valid_with(name, pattern, None)
}

/// Checks names of methods returning a set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetMethodName;

impl SetMethodName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SetMethodName {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn start(&self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
        SPEC.start(ctx)
    }
}
