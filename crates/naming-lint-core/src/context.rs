//! Context types for rule execution.

use crate::model::{Compilation, TypeId};
use crate::resolver::{pattern_option_key, resolve_effective_pattern, EffectivePattern};
use crate::rule::RuleDescriptor;
use crate::types::{Severity, Violation};
use std::collections::{HashMap, HashSet};

/// Key/value options visible to one compilation.
///
/// Built by the analyzer from the configuration file and then overlaid
/// with the primary syntax tree's options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    values: HashMap<String, String>,
}

impl AnalyzerOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets an option value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Sets an option value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Overlays `other` on top of these options.
    pub fn merge<'a, I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (key, value) in other {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnalyzerOptions {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Context handed to each rule when a compilation starts.
///
/// Everything a rule needs to decide whether it is active, and with which
/// pattern, is read here before any declaration is dispatched. Diagnostics
/// that belong to the compilation as a whole are collected here and
/// emitted after all declarations have been checked.
#[derive(Debug)]
pub struct CompilationStart<'a> {
    compilation: &'a Compilation,
    options: &'a AnalyzerOptions,
    namespace: &'a str,
    end_diagnostics: Vec<Violation>,
    scheduled: HashSet<&'static str>,
}

impl<'a> CompilationStart<'a> {
    /// Creates a context for `compilation`.
    #[must_use]
    pub fn new(
        compilation: &'a Compilation,
        options: &'a AnalyzerOptions,
        namespace: &'a str,
    ) -> Self {
        Self {
            compilation,
            options,
            namespace,
            end_diagnostics: Vec::new(),
            scheduled: HashSet::new(),
        }
    }

    /// The compilation being analyzed.
    #[must_use]
    pub fn compilation(&self) -> &'a Compilation {
        self.compilation
    }

    /// The effective options for this compilation.
    #[must_use]
    pub fn options(&self) -> &'a AnalyzerOptions {
        self.options
    }

    /// The option key namespace.
    #[must_use]
    pub fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// Looks up a type in the compilation's type universe.
    #[must_use]
    pub fn resolve_type(&self, metadata_name: &str) -> Option<TypeId> {
        self.compilation.resolve_type(metadata_name).cloned()
    }

    /// Resolves a `{metadata name -> tag}` table, keeping only the entries
    /// whose type exists in this compilation.
    #[must_use]
    pub fn resolve_table<T: Copy>(&self, table: &[(&str, T)]) -> Vec<(TypeId, T)> {
        table
            .iter()
            .filter_map(|(name, tag)| self.resolve_type(name).map(|id| (id, *tag)))
            .collect()
    }

    /// Resolves the effective pattern for a rule.
    ///
    /// An invalid configured value schedules one error diagnostic for the
    /// end of the compilation, however often this is called.
    pub fn read_pattern(&mut self, descriptor: &'static RuleDescriptor) -> EffectivePattern {
        let key = pattern_option_key(self.namespace, descriptor.code);
        let effective = resolve_effective_pattern(&key, self.options);

        if let EffectivePattern::ConfigurationError(value) = &effective {
            if self.scheduled.insert(descriptor.code) {
                tracing::warn!(
                    rule = descriptor.name,
                    key = %key,
                    "Invalid pattern '{value}', falling back to the default"
                );
                self.end_diagnostics.push(Violation::new(
                    descriptor.code,
                    descriptor.name,
                    Severity::Error,
                    None,
                    format!("'{value}' is an invalid regex pattern"),
                ));
            }
        }

        effective
    }

    /// Consumes the context, returning the end-of-compilation diagnostics.
    #[must_use]
    pub fn into_end_diagnostics(self) -> Vec<Violation> {
        self.end_diagnostics
    }
}
