//! Rule requiring methods that return a key/value pair to be named `GetXByY`.
//!
//! Every method kind is checked, accessors and overrides included.

use crate::key_value_pair_member_name::KEY_VALUE_PAIR_SHAPES;
use crate::method_rule::{MethodFilter, MethodRuleSpec};
use naming_lint_core::{
    is_name_valid_with, CompilationStart, Rule, RuleDescriptor, RuleSessionBox, Severity,
};

/// Rule code for key-value-pair-method-name.
pub const CODE: &str = "NL0102";

/// Rule name for key-value-pair-method-name.
pub const NAME: &str = "key-value-pair-method-name";

/// Default pattern.
pub const DEFAULT_PATTERN: &str = "^Get[A-Z][a-zA-Z0-9]*By[A-Z][a-zA-Z0-9]*(?<!KeyValuePair)$";

/// Descriptor for key-value-pair-method-name.
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Incorrect name of method that returns a key/value pair",
    subject: "Method",
    description: "A method that returns a key/value pair should follow the naming convention.",
    category: "Naming",
    default_severity: Severity::Warning,
    help_uri: "https://github.com/naming-lint/naming-lint/tree/main/docs/NL0102.md",
    default_pattern: DEFAULT_PATTERN,
    default_convention: "follow the 'GetXByY' naming convention",
};

static SPEC: MethodRuleSpec = MethodRuleSpec {
    descriptor: &DESCRIPTOR,
    shapes: KEY_VALUE_PAIR_SHAPES,
    filter: MethodFilter::Any,
};

/// Returns whether `name` is a valid name for a pair-returning method.
#[must_use]
pub fn is_key_value_pair_method_name_valid(name: &str, pattern: &str) -> bool {
    is_name_valid_with(name, pattern, None)
}

/// Checks names of methods returning `KeyValuePair<TKey, TValue>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValuePairMethodName;

impl KeyValuePairMethodName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for KeyValuePairMethodName {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn start(&self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
        SPEC.start(ctx)
    }
}
