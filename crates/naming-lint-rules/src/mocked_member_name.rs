//! Rule requiring locals initialized from a mocking library to be named
//! `mockedX`.
//!
//! Recognized entry points:
//!
//! | Library | Marker type | Call |
//! |---------|-------------|------|
//! | Moq | `Moq.Mock` | `new Mock<T>()` |
//! | NSubstitute | `NSubstitute.Substitute` | `Substitute.For<T>()` |
//! | FakeItEasy | `FakeItEasy.A` | `A.Fake<T>()` |
//!
//! A library is only considered when its marker type is part of the
//! compilation. Only calls inside method bodies whose value directly
//! initializes a local variable are checked; results that are discarded,
//! passed as arguments, assigned or stored in fields are ignored.

use crate::session::resolve_policy;
use naming_lint_core::model::{Ancestor, CallKind, CallSite, DeclaratorKind, OwnerKind};
use naming_lint_core::{
    is_name_valid_with, CompilationStart, EventKind, Location, NamePolicy, Reporter, Rule,
    RuleDescriptor, RuleSession, RuleSessionBox, Severity, TypeId,
};

/// Rule code for mocked-member-name.
pub const CODE: &str = "NL0005";

/// Rule name for mocked-member-name.
pub const NAME: &str = "mocked-member-name";

/// Default pattern.
pub const DEFAULT_PATTERN: &str = "^_?((M|m)ocked)[A-Z][a-zA-Z0-9]*$";

/// Descriptor for mocked-member-name.
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Incorrect mocked member name",
    subject: "Mocked member",
    description: "A mocked member name should follow the naming convention.",
    category: "Naming",
    default_severity: Severity::Warning,
    help_uri: "https://github.com/naming-lint/naming-lint/tree/main/docs/NL0005.md",
    default_pattern: DEFAULT_PATTERN,
    default_convention: "follow the 'mocked' naming convention",
};

/// Mocking libraries with a recognized entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockLibrary {
    /// `new Mock<T>()`.
    Moq,
    /// `Substitute.For<T>()`.
    NSubstitute,
    /// `A.Fake<T>()`.
    FakeItEasy,
}

const MOQ_GENERIC_MOCK: &str = "Moq.Mock`1";

/// Marker type of each library.
pub const MOCK_LIBRARIES: &[(&str, MockLibrary)] = &[
    ("Moq.Mock", MockLibrary::Moq),
    ("NSubstitute.Substitute", MockLibrary::NSubstitute),
    ("FakeItEasy.A", MockLibrary::FakeItEasy),
];

impl MockLibrary {
    /// Returns whether `call` is this library's entry point.
    ///
    /// `marker` is the library's resolved marker type.
    #[must_use]
    pub fn is_entry_point(self, call: &CallKind, marker: &TypeId) -> bool {
        match (self, call) {
            (Self::Moq, CallKind::ObjectCreation { ty }) => {
                ty.definition.as_str() == MOQ_GENERIC_MOCK || ty.definition == *marker
            }
            (
                Self::NSubstitute,
                CallKind::Invocation {
                    containing_type,
                    method,
                },
            ) => containing_type == marker && method == "For",
            (
                Self::FakeItEasy,
                CallKind::Invocation {
                    containing_type,
                    method,
                },
            ) => containing_type == marker && method == "Fake",
            _ => false,
        }
    }
}

/// Returns whether `name` is a valid mocked member name under `pattern`.
#[must_use]
pub fn is_mocked_member_name_valid(name: &str, pattern: &str) -> bool {
    is_name_valid_with(name, pattern, None)
}

/// Finds the local variable a call's value initializes.
///
/// The call must sit directly in an initializer clause whose parent is a
/// local declarator.
fn initialized_local(call: &CallSite) -> Option<(&str, &Location)> {
    match call.ancestors.as_slice() {
        [Ancestor::EqualsValueClause, Ancestor::VariableDeclarator {
            name,
            declarator: DeclaratorKind::Local,
            location,
        }, ..] => Some((name.as_str(), location)),
        _ => None,
    }
}

/// Checks names of locals holding mocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockedMemberName;

impl MockedMemberName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MockedMemberName {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn start(&self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
        let libraries = ctx.resolve_table(MOCK_LIBRARIES);
        if libraries.is_empty() {
            tracing::debug!(rule = NAME, "No mocking library in compilation");
            return None;
        }
        let policy = resolve_policy(ctx, &DESCRIPTOR)?;

        Some(Box::new(MockedMemberSession { libraries, policy }))
    }
}

struct MockedMemberSession {
    libraries: Vec<(TypeId, MockLibrary)>,
    policy: NamePolicy,
}

impl RuleSession for MockedMemberSession {
    fn interests(&self) -> &[EventKind] {
        &[EventKind::CallSite]
    }

    fn on_call_site(&self, call: &CallSite, reporter: &mut Reporter<'_>) {
        if call.owner != OwnerKind::Method {
            return;
        }
        let is_mock = self
            .libraries
            .iter()
            .any(|(marker, library)| library.is_entry_point(&call.call, marker));
        if !is_mock {
            return;
        }
        if let Some((name, location)) = initialized_local(call) {
            if !self.policy.is_valid(name, None) {
                reporter.report(location, name, self.policy.message_suffix());
            }
        }
    }
}
