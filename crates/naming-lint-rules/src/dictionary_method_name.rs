//! Rule requiring methods that return a dictionary to be named `GetXsByY`.

use crate::dictionary_member_name::DICTIONARY_SHAPES;
use crate::method_rule::{MethodFilter, MethodRuleSpec};
use naming_lint_core::{
    is_name_valid_with, CompilationStart, Rule, RuleDescriptor, RuleSessionBox, Severity,
};

/// Rule code for dictionary-method-name.
pub const CODE: &str = "NL0103";

/// Rule name for dictionary-method-name.
pub const NAME: &str = "dictionary-method-name";

/// Default pattern.
pub const DEFAULT_PATTERN: &str = "^Get[A-Z][a-zA-Z0-9]*sBy[A-Z][a-zA-Z0-9]*(?<!Dictionary)$";

/// Descriptor for dictionary-method-name.
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Incorrect name of method that returns a dictionary",
    subject: "Method",
    description: "A method that returns a dictionary should follow the naming convention.",
    category: "Naming",
    default_severity: Severity::Warning,
    help_uri: "https://github.com/naming-lint/naming-lint/tree/main/docs/NL0103.md",
    default_pattern: DEFAULT_PATTERN,
    default_convention: "follow the 'GetXsByY' naming convention",
};

static SPEC: MethodRuleSpec = MethodRuleSpec {
    descriptor: &DESCRIPTOR,
    shapes: DICTIONARY_SHAPES,
    filter: MethodFilter::Ordinary,
};

/// Returns whether `name` is a valid name for a dictionary-returning method.
#[must_use]
pub fn is_dictionary_method_name_valid(name: &str, pattern: &str) -> bool {
    is_name_valid_with(name, pattern, None)
}

/// Checks names of methods returning a dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryMethodName;

impl DictionaryMethodName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DictionaryMethodName {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn start(&self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
        SPEC.start(ctx)
    }
}
