//! Rule requiring boolean fields, properties, parameters and locals to read
//! as predicates.
//!
//! # Rationale
//!
//! `isVisible` or `hasChildren` says what a `true` value means; `visible` or
//! `flag` leaves the reader guessing.
//!
//! # Configuration
//!
//! - `<namespace>.NL0004.pattern`: custom regex replacing the default

use crate::member_rule::MemberRuleSpec;
use naming_lint_core::{
    is_name_valid_with, CompilationStart, Rule, RuleDescriptor, RuleSessionBox, Severity,
    ShapeSpec,
};

/// Rule code for boolean-member-name.
pub const CODE: &str = "NL0004";

/// Rule name for boolean-member-name.
pub const NAME: &str = "boolean-member-name";

/// Default pattern: optional underscore, then `can`, `has` or `is`.
pub const DEFAULT_PATTERN: &str = "^_?(((C|c)an)|((H|h)as)|((I|i)s))[A-Z][a-zA-Z0-9]*$";

/// Descriptor for boolean-member-name.
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Incorrect boolean name",
    subject: "Boolean",
    description: "A boolean name should follow the naming convention.",
    category: "Naming",
    default_severity: Severity::Warning,
    help_uri: "https://github.com/naming-lint/naming-lint/tree/main/docs/NL0004.md",
    default_pattern: DEFAULT_PATTERN,
    default_convention: "follow the 'can|has|is' naming convention",
};

static SPEC: MemberRuleSpec = MemberRuleSpec {
    descriptor: &DESCRIPTOR,
    shapes: &[ShapeSpec::exact("System.Boolean")],
    forbidden: None,
};

/// Returns whether `name` is a valid boolean member name under `pattern`.
#[must_use]
pub fn is_boolean_member_name_valid(name: &str, pattern: &str) -> bool {
    is_name_valid_with(name, pattern, None)
}

/// Checks names of boolean fields, properties, parameters and locals.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanMemberName;

impl BooleanMemberName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for BooleanMemberName {
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
    use crate::test_support::{
        compilation, field, locals, parameter, property, run, targets, with_option,
    };
    use naming_lint_core::TypeRef;

    fn boolean() -> TypeRef {
        TypeRef::named("System.Boolean")
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", " ", "_myBoolean", "enabled", "is", "isvalid"] {
            assert!(
                !is_boolean_member_name_valid(name, DEFAULT_PATTERN),
                "{name:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_valid_names() {
        for name in ["canBeEdited", "hasBeenEdited", "isEditing", "_isEditing", "IsEditing"] {
            assert!(
                is_boolean_member_name_valid(name, DEFAULT_PATTERN),
                "{name:?} should be valid"
            );
        }
    }

    #[test]
    fn test_detects_field_property_parameter() {
        let mut c = compilation(&["System.Boolean"]);
        c.symbols = vec![
            field("_myBoolean", boolean()),
            property("Enabled", boolean()),
            parameter("visible", boolean()),
            parameter("isVisible", boolean()),
            field("count", TypeRef::named("System.Int32")),
        ];

        let violations = run(BooleanMemberName::new(), &c);
        assert_eq!(targets(&violations), vec!["_myBoolean", "Enabled", "visible"]);
        assert_eq!(
            violations[0].message,
            "Boolean '_myBoolean' does not follow the 'can|has|is' naming convention"
        );
        assert_eq!(violations[0].code, CODE);
    }

    #[test]
    fn test_each_local_declarator_is_checked() {
        let mut c = compilation(&["System.Boolean"]);
        c.local_declarations = vec![locals(&[
            ("first", boolean()),
            ("isSecond", boolean()),
            ("third", boolean()),
        ])];

        let violations = run(BooleanMemberName::new(), &c);
        assert_eq!(targets(&violations), vec!["first", "third"]);
    }

    #[test]
    fn test_custom_pattern_message() {
        let mut c = with_option(
            compilation(&["System.Boolean"]),
            "dotnet_diagnostic.NL0004.pattern",
            "^.*Flag$",
        );
        c.symbols = vec![field("isReady", boolean()), field("readyFlag", boolean())];

        let violations = run(BooleanMemberName::new(), &c);
        assert_eq!(targets(&violations), vec!["isReady"]);
        assert_eq!(
            violations[0].message,
            "Boolean 'isReady' does not match the '^.*Flag$' regex pattern"
        );
    }

    #[test]
    fn test_inactive_without_boolean_type() {
        let mut c = compilation(&[]);
        c.symbols = vec![field("_myBoolean", boolean())];
        assert!(run(BooleanMemberName::new(), &c).is_empty());
    }
}
