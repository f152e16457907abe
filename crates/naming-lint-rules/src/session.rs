//! Helpers shared by the rule templates.

use naming_lint_core::{CompilationStart, NamePolicy, RuleDescriptor};

/// Reads the effective pattern for `descriptor` and builds its policy.
///
/// Returns `None` only if the built-in pattern itself fails to compile.
pub(crate) fn resolve_policy(
    ctx: &mut CompilationStart<'_>,
    descriptor: &'static RuleDescriptor,
) -> Option<NamePolicy> {
    let effective = ctx.read_pattern(descriptor);
    match NamePolicy::resolve(descriptor, &effective) {
        Ok(policy) => Some(policy),
        Err(e) => {
            tracing::warn!(rule = descriptor.name, "Rule disabled: {e}");
            None
        }
    }
}
