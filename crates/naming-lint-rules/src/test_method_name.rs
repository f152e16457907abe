//! Rule requiring test methods to be named `MethodUnderTest_When_Should`.
//!
//! A method is a test when it carries one of the attributes below and that
//! attribute type is part of the compilation.

use crate::session::resolve_policy;
use naming_lint_core::model::Symbol;
use naming_lint_core::{
    is_name_valid_with, CompilationStart, EventKind, NamePolicy, Reporter, Rule, RuleDescriptor,
    RuleSession, RuleSessionBox, Severity, TypeId,
};

/// Rule code for test-method-name.
pub const CODE: &str = "NL0101";

/// Rule name for test-method-name.
pub const NAME: &str = "test-method-name";

/// Default pattern.
pub const DEFAULT_PATTERN: &str = "^[a-zA-Z0-9_]+_When[a-zA-Z0-9_]+_Should[a-zA-Z0-9_]+$";

/// Descriptor for test-method-name.
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Incorrect test method name",
    subject: "Test method",
    description: "A test method name should follow the naming convention.",
    category: "Naming",
    default_severity: Severity::Warning,
    help_uri: "https://github.com/naming-lint/naming-lint/tree/main/docs/NL0101.md",
    default_pattern: DEFAULT_PATTERN,
    default_convention: "follow the 'MethodUnderTest_When_Should' naming convention",
};

/// Test frameworks whose attributes mark test methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestFramework {
    /// `Microsoft.VisualStudio.TestTools.UnitTesting`.
    MsTest,
    /// `NUnit.Framework`.
    NUnit,
    /// `Xunit`.
    XUnit,
}

/// Test attributes and the framework they belong to.
pub const TEST_ATTRIBUTES: &[(&str, TestFramework)] = &[
    (
        "Microsoft.VisualStudio.TestTools.UnitTesting.TestMethodAttribute",
        TestFramework::MsTest,
    ),
    ("NUnit.Framework.TestAttribute", TestFramework::NUnit),
    ("NUnit.Framework.TheoryAttribute", TestFramework::NUnit),
    ("Xunit.FactAttribute", TestFramework::XUnit),
    ("Xunit.TheoryAttribute", TestFramework::XUnit),
];

/// Returns whether `name` is a valid test method name under `pattern`.
#[must_use]
pub fn is_test_method_name_valid(name: &str, pattern: &str) -> bool {
    is_name_valid_with(name, pattern, None)
}

/// Checks names of methods marked as tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestMethodName;

impl TestMethodName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TestMethodName {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn start(&self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
        let attributes: Vec<TypeId> = ctx
            .resolve_table(TEST_ATTRIBUTES)
            .into_iter()
            .map(|(id, framework)| {
                tracing::debug!(rule = NAME, ?framework, attribute = %id, "Test attribute found");
                id
            })
            .collect();
        if attributes.is_empty() {
            tracing::debug!(rule = NAME, "No test framework in compilation");
            return None;
        }
        let policy = resolve_policy(ctx, &DESCRIPTOR)?;

        Some(Box::new(TestMethodSession { attributes, policy }))
    }
}

struct TestMethodSession {
    attributes: Vec<TypeId>,
    policy: NamePolicy,
}

impl RuleSession for TestMethodSession {
    fn interests(&self) -> &[EventKind] {
        &[EventKind::Method]
    }

    fn on_symbol(&self, symbol: &Symbol, reporter: &mut Reporter<'_>) {
        let Symbol::Method(method) = symbol else {
            return;
        };
        let is_test = method
            .attributes
            .iter()
            .any(|attribute| self.attributes.contains(attribute));

        // One report per method, however many test attributes it carries
        if is_test && !self.policy.is_valid(&method.name, None) {
            reporter.report(&method.location, &method.name, self.policy.message_suffix());
        }
    }
}
