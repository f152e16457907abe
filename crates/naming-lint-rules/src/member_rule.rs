//! Shared template for rules that check field, property, parameter and
//! local variable names by declared type.

use crate::session::resolve_policy;
use naming_lint_core::model::{LocalDeclarationGroup, Symbol};
use naming_lint_core::{
    CompilationStart, EventKind, Location, NamePolicy, Reporter, ResolvedShape, RuleDescriptor,
    RuleSession, RuleSessionBox, ShapeSpec, TypeRef,
};

const MEMBER_EVENTS: &[EventKind] = &[
    EventKind::Field,
    EventKind::Property,
    EventKind::Parameter,
    EventKind::LocalDeclarations,
];

/// Static definition of a member-name rule.
#[derive(Debug)]
pub(crate) struct MemberRuleSpec {
    pub descriptor: &'static RuleDescriptor,
    /// Any of these targets makes a declaration relevant.
    pub shapes: &'static [ShapeSpec],
    /// Substring that makes a name invalid regardless of the pattern.
    pub forbidden: Option<&'static str>,
}

impl MemberRuleSpec {
    pub(crate) fn start(&'static self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
        let Some(shape) = ResolvedShape::resolve(self.shapes, ctx.compilation()) else {
            tracing::debug!(rule = self.descriptor.name, "No target type in compilation");
            return None;
        };
        let policy = resolve_policy(ctx, self.descriptor)?;

        Some(Box::new(MemberNameSession {
            spec: self,
            shape,
            policy,
        }))
    }
}

struct MemberNameSession {
    spec: &'static MemberRuleSpec,
    shape: ResolvedShape,
    policy: NamePolicy,
}

impl MemberNameSession {
    fn check(&self, ty: &TypeRef, name: &str, location: &Location, reporter: &mut Reporter<'_>) {
        if self.shape.matches(ty) && !self.policy.is_valid(name, self.spec.forbidden) {
            reporter.report(location, name, self.policy.message_suffix());
        }
    }
}

impl RuleSession for MemberNameSession {
    fn interests(&self) -> &[EventKind] {
        MEMBER_EVENTS
    }

    fn on_symbol(&self, symbol: &Symbol, reporter: &mut Reporter<'_>) {
        match symbol {
            Symbol::Field(value) | Symbol::Property(value) | Symbol::Parameter(value) => {
                self.check(&value.ty, &value.name, &value.location, reporter);
            }
            Symbol::Method(_) => {}
        }
    }

    fn on_local_declarations(&self, group: &LocalDeclarationGroup, reporter: &mut Reporter<'_>) {
        for declarator in &group.declarators {
            self.check(&declarator.ty, &declarator.name, &declarator.location, reporter);
        }
    }
}
