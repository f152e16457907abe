//! `.editorconfig` rendering for rule severities.

use crate::config::Config;
use crate::resolver::pattern_option_key;
use crate::rule::RuleDescriptor;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Renders one block per rule, ordered by code.
///
/// Each block is the rule description as a comment followed by its
/// severity line. Severity overrides and patterns from `config` are
/// included; without them the defaults are written.
#[must_use]
pub fn render_editorconfig(descriptors: &[&RuleDescriptor], config: &Config) -> String {
    let namespace = &config.analyzer.namespace;
    let by_code: BTreeMap<&str, &RuleDescriptor> =
        descriptors.iter().map(|d| (d.code, *d)).collect();

    let mut output = String::new();
    for (code, descriptor) in by_code {
        let severity = config
            .rule_severity(descriptor)
            .unwrap_or(descriptor.default_severity);

        let _ = writeln!(output, "# {}", descriptor.description);
        let _ = writeln!(
            output,
            "{namespace}.{code}.severity = {}",
            severity.editorconfig_name()
        );
        if let Some(pattern) = config.rule_pattern(descriptor) {
            let _ = writeln!(
                output,
                "{} = {pattern}",
                pattern_option_key(namespace, code)
            );
        }
        output.push('\n');
    }
    output
}
