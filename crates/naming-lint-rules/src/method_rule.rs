//! Shared template for rules that check method names by return type.

use crate::session::resolve_policy;
use naming_lint_core::model::{MethodKind, MethodSymbol, Symbol};
use naming_lint_core::{
    CompilationStart, EventKind, NamePolicy, Reporter, ResolvedShape, RuleDescriptor,
    RuleSession, RuleSessionBox, ShapeSpec,
};

/// Which methods a method-name rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MethodFilter {
    /// Every method, including accessors and operators.
    Any,
    /// Ordinary methods only.
    Ordinary,
    /// Ordinary methods that do not override a base member.
    OrdinaryNonOverride,
}

impl MethodFilter {
    fn accepts(self, method: &MethodSymbol) -> bool {
        match self {
            Self::Any => true,
            Self::Ordinary => method.method_kind == MethodKind::Ordinary,
            Self::OrdinaryNonOverride => {
                method.method_kind == MethodKind::Ordinary && !method.is_override
            }
        }
    }
}

/// Static definition of a method-name rule.
#[derive(Debug)]
pub(crate) struct MethodRuleSpec {
    pub descriptor: &'static RuleDescriptor,
    /// Any of these targets makes a return type relevant.
    pub shapes: &'static [ShapeSpec],
    pub filter: MethodFilter,
}

impl MethodRuleSpec {
    pub(crate) fn start(&'static self, ctx: &mut CompilationStart<'_>) -> Option<RuleSessionBox> {
        let Some(shape) = ResolvedShape::resolve(self.shapes, ctx.compilation()) else {
            tracing::debug!(rule = self.descriptor.name, "No target type in compilation");
            return None;
        };
        let policy = resolve_policy(ctx, self.descriptor)?;

        Some(Box::new(MethodNameSession {
            filter: self.filter,
            shape,
            policy,
        }))
    }
}

struct MethodNameSession {
    filter: MethodFilter,
    shape: ResolvedShape,
    policy: NamePolicy,
}

impl RuleSession for MethodNameSession {
    fn interests(&self) -> &[EventKind] {
        &[EventKind::Method]
    }

    fn on_symbol(&self, symbol: &Symbol, reporter: &mut Reporter<'_>) {
        let Symbol::Method(method) = symbol else {
            return;
        };
        if self.filter.accepts(method)
            && self.shape.matches(&method.return_type)
            && !self.policy.is_valid(&method.name, None)
        {
            reporter.report(&method.location, &method.name, self.policy.message_suffix());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::method;
    use naming_lint_core::TypeRef;

    #[test]
    fn filters() {
        let mut m = method("Get", TypeRef::named("System.Boolean"));
        assert!(MethodFilter::Any.accepts(&m));
        assert!(MethodFilter::OrdinaryNonOverride.accepts(&m));

        m.is_override = true;
        assert!(MethodFilter::Ordinary.accepts(&m));
        assert!(!MethodFilter::OrdinaryNonOverride.accepts(&m));

        m.is_override = false;
        m.method_kind = MethodKind::PropertyAccessor;
        assert!(MethodFilter::Any.accepts(&m));
        assert!(!MethodFilter::Ordinary.accepts(&m));
    }
}
