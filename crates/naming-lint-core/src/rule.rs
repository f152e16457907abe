//! Rule traits for defining naming rules.

use crate::context::CompilationStart;
use crate::model::{CallSite, EventKind, LocalDeclarationGroup, Symbol};
use crate::reporter::Reporter;
use crate::types::Severity;

/// Static description of a rule and its diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescriptor {
    /// Stable short code (e.g., "NL0004").
    pub code: &'static str,
    /// Kebab-case rule name (e.g., "boolean-member-name").
    pub name: &'static str,
    /// Diagnostic title.
    pub title: &'static str,
    /// First word of the violation message (e.g., "Boolean").
    pub subject: &'static str,
    /// One-sentence description.
    pub description: &'static str,
    /// Diagnostic category.
    pub category: &'static str,
    /// Severity used unless configuration overrides it.
    pub default_severity: Severity,
    /// Documentation link.
    pub help_uri: &'static str,
    /// Built-in name pattern.
    pub default_pattern: &'static str,
    /// Explanation used with the built-in pattern.
    pub default_convention: &'static str,
}

/// A naming rule.
///
/// A rule is a long-lived, stateless definition. Everything that depends on
/// a particular compilation (resolved types, the effective pattern) lives in
/// the [`RuleSession`] returned by [`Rule::start`], so one rule can serve
/// many compilations, even concurrently.
///
/// # Example
///
/// ```ignore
/// use naming_lint_core::{CompilationStart, Rule, RuleDescriptor, RuleSessionBox};
///
/// pub struct NoShortNames;
///
/// impl Rule for NoShortNames {
///     fn descriptor(&self) -> &'static RuleDescriptor { &DESCRIPTOR }
///
///     fn start(&self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
///         let effective = ctx.read_pattern(self.descriptor());
///         // ...build an immutable session from `effective`
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the static descriptor of this rule.
    fn descriptor(&self) -> &'static RuleDescriptor;

    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Returns the rule code.
    fn code(&self) -> &'static str {
        self.descriptor().code
    }

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        self.descriptor().description
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        self.descriptor().default_severity
    }

    /// Prepares the rule for one compilation.
    ///
    /// Returns `None` when the rule has nothing to check in this
    /// compilation, typically because its target types are absent.
    fn start(&self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Per-compilation state of an active rule.
///
/// Sessions are immutable once created; callbacks take `&self` and may run
/// concurrently on different declarations of the same compilation.
pub trait RuleSession: Send + Sync {
    /// The event categories this session wants to receive.
    fn interests(&self) -> &[EventKind];

    /// Called for each field, property, parameter and method declaration.
    fn on_symbol(&self, _symbol: &Symbol, _reporter: &mut Reporter<'_>) {}

    /// Called for each local declaration statement.
    fn on_local_declarations(&self, _group: &LocalDeclarationGroup, _reporter: &mut Reporter<'_>) {
    }

    /// Called for each object creation or invocation.
    fn on_call_site(&self, _call: &CallSite, _reporter: &mut Reporter<'_>) {}

    /// Whether this session handles `kind`.
    fn wants(&self, kind: EventKind) -> bool {
        self.interests().contains(&kind)
    }
}

/// Type alias for boxed `RuleSession` trait objects.
pub type RuleSessionBox = Box<dyn RuleSession>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::AnalyzerOptions;
    use crate::model::Compilation;
    use crate::types::{Location, Violation};

    static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
        code: "TEST001",
        name: "test-rule",
        title: "Test rule",
        subject: "Symbol",
        description: "A test rule",
        category: "Naming",
        default_severity: Severity::Warning,
        help_uri: "docs/TEST001.md",
        default_pattern: ".*",
        default_convention: "be named",
    };

    struct TestRule;

    struct TestSession;

    impl RuleSession for TestSession {
        fn interests(&self) -> &[EventKind] {
            &[EventKind::Field]
        }

        fn on_symbol(&self, symbol: &Symbol, reporter: &mut Reporter<'_>) {
            reporter.report(symbol.location(), symbol.name(), "be named");
        }
    }

    impl Rule for TestRule {
        fn descriptor(&self) -> &'static RuleDescriptor {
            &DESCRIPTOR
        }

        fn start(&self, _ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
            Some(Box::new(TestSession))
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.description(), "A test rule");
        assert_eq!(rule.default_severity(), Severity::Warning);
    }

    #[test]
    fn session_dispatch() {
        let compilation = Compilation::new("Sample");
        let options = AnalyzerOptions::new();
        let mut ctx = CompilationStart::new(&compilation, &options, "ns");
        let session = TestRule.start(&mut ctx).expect("session");

        assert!(session.wants(EventKind::Field));
        assert!(!session.wants(EventKind::Method));

        let symbol = Symbol::Field(crate::model::ValueSymbol {
            name: "value".into(),
            ty: crate::model::TypeRef::named("System.Int32"),
            location: Location::new("a.cs", 1, 1),
        });
        let mut sink: Vec<Violation> = Vec::new();
        session.on_symbol(&symbol, &mut Reporter::new(&DESCRIPTOR, &mut sink));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].message, "Symbol 'value' does not be named");
    }
}
