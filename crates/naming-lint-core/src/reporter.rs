//! Violation reporting.

use crate::policy::format_message;
use crate::rule::RuleDescriptor;
use crate::types::{Location, Violation};

/// Destination for reported violations.
pub trait ViolationSink {
    /// Accepts one violation.
    fn accept(&mut self, violation: Violation);
}

impl ViolationSink for Vec<Violation> {
    fn accept(&mut self, violation: Violation) {
        self.push(violation);
    }
}

/// Reports violations for one rule into a sink.
pub struct Reporter<'a> {
    descriptor: &'static RuleDescriptor,
    sink: &'a mut dyn ViolationSink,
}

impl<'a> Reporter<'a> {
    /// Creates a reporter for the rule described by `descriptor`.
    #[must_use]
    pub fn new(descriptor: &'static RuleDescriptor, sink: &'a mut dyn ViolationSink) -> Self {
        Self { descriptor, sink }
    }

    /// The rule this reporter reports for.
    #[must_use]
    pub fn descriptor(&self) -> &'static RuleDescriptor {
        self.descriptor
    }

    /// Reports that `name` at `location` does not satisfy `suffix`.
    pub fn report(&mut self, location: &Location, name: &str, suffix: &str) {
        self.sink
            .accept(build_violation(self.descriptor, location, name, suffix));
    }
}

/// Builds the violation for one failing declaration.
#[must_use]
pub fn build_violation(
    descriptor: &RuleDescriptor,
    location: &Location,
    name: &str,
    suffix: &str,
) -> Violation {
    Violation::new(
        descriptor.code,
        descriptor.name,
        descriptor.default_severity,
        Some(location.clone()),
        format_message(descriptor.subject, name, suffix),
    )
    .with_target(name, suffix)
    .with_help_uri(descriptor.help_uri)
}
