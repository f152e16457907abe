//! Rule requiring methods that return a boolean to read as a question.
//!
//! Only ordinary methods that are not overrides are checked; an override
//! cannot choose its own name.

use crate::method_rule::{MethodFilter, MethodRuleSpec};
use naming_lint_core::{
    is_name_valid_with, CompilationStart, Rule, RuleDescriptor, RuleSessionBox, Severity,
    ShapeSpec,
};

/// Rule code for boolean-method-name.
pub const CODE: &str = "NL0105";

/// Rule name for boolean-method-name.
pub const NAME: &str = "boolean-method-name";

/// Default pattern.
pub const DEFAULT_PATTERN: &str = "^(Can|Has|Is)[A-Z][a-zA-Z0-9]*$";

/// Descriptor for boolean-method-name.
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Incorrect name of method that returns a boolean",
    subject: "Method",
    description: "A method that returns a boolean should follow the naming convention.",
    category: "Naming",
    default_severity: Severity::Warning,
    help_uri: "https://github.com/naming-lint/naming-lint/tree/main/docs/NL0105.md",
    default_pattern: DEFAULT_PATTERN,
    default_convention: "follow the 'Can|Has|Is' naming convention",
};

static SPEC: MethodRuleSpec = MethodRuleSpec {
    descriptor: &DESCRIPTOR,
    shapes: &[ShapeSpec::exact("System.Boolean")],
    filter: MethodFilter::OrdinaryNonOverride,
};

/// Returns whether `name` is a valid name for a boolean-returning method.
#[must_use]
pub fn is_boolean_method_name_valid(name: &str, pattern: &str) -> bool {
    is_name_valid_with(name, pattern, None)
}

/// Checks names of methods returning `bool`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanMethodName;

impl BooleanMethodName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for BooleanMethodName {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn start(&self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
        SPEC.start(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{compilation, method, run, targets};
    use naming_lint_core::model::{MethodKind, Symbol};
    use naming_lint_core::TypeRef;

    fn boolean() -> TypeRef {
        TypeRef::named("System.Boolean")
    }

    #[test]
    fn test_name_validity() {
        for name in ["", " ", "GetBoolean", "isEditing", "Is"] {
            assert!(!is_boolean_method_name_valid(name, DEFAULT_PATTERN), "{name:?}");
        }
        for name in ["CanBeEdited", "HasBeenEdited", "IsEditing"] {
            assert!(is_boolean_method_name_valid(name, DEFAULT_PATTERN), "{name:?}");
        }
    }

    #[test]
    fn test_checks_ordinary_non_override_methods() {
        let mut overridden = method("Equals", boolean());
        overridden.is_override = true;
        let mut accessor = method("get_Visible", boolean());
        accessor.method_kind = MethodKind::PropertyAccessor;

        let mut c = compilation(&["System.Boolean"]);
        c.symbols = vec![
            Symbol::Method(method("GetBoolean", boolean())),
            Symbol::Method(method("IsEditing", boolean())),
            Symbol::Method(method("GetName", TypeRef::named("System.String"))),
            Symbol::Method(overridden),
            Symbol::Method(accessor),
        ];

        let violations = run(BooleanMethodName::new(), &c);
        assert_eq!(targets(&violations), vec!["GetBoolean"]);
        assert_eq!(
            violations[0].message,
            "Method 'GetBoolean' does not follow the 'Can|Has|Is' naming convention"
        );
    }
}
