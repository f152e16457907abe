//! Core types for naming violations and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for naming violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Returns the `.editorconfig` spelling of this severity.
    #[must_use]
    pub fn editorconfig_name(self) -> &'static str {
        match self {
            Self::Info => "suggestion",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source location of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path of the syntax tree that contains the declaration.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A naming violation found during analysis.
///
/// Configuration problems are reported through the same type with no
/// location, since they apply to the whole compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "NL0004").
    pub code: String,
    /// Rule name (e.g., "boolean-member-name").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Declaration location, `None` for compilation-wide diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Human-readable message.
    pub message: String,
    /// The offending identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Second message argument: the convention or pattern the name missed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Link to the rule documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_uri: Option<String>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Option<Location>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            target: None,
            explanation: None,
            help_uri: None,
        }
    }

    /// Records the offending name and the explanation suffix.
    #[must_use]
    pub fn with_target(mut self, name: impl Into<String>, explanation: impl Into<String>) -> Self {
        self.target = Some(name.into());
        self.explanation = Some(explanation.into());
        self
    }

    /// Adds a documentation link to this violation.
    #[must_use]
    pub fn with_help_uri(mut self, uri: impl Into<String>) -> Self {
        self.help_uri = Some(uri.into());
        self
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = match &self.location {
            Some(location) => format!("{} {} at {location}\n", self.code, self.rule),
            None => format!("{} {}\n", self.code, self.rule),
        };
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(uri) = &self.help_uri {
            let _ = writeln!(output, "  = see: {uri}");
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{} [{}] {}", self.severity, self.code, self.message)
    }
}

/// Result of running naming analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of compilations checked.
    pub compilations_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Returns true if there are any warnings or errors.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity >= Severity::Warning)
    }

    /// Returns violations filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Formats all violations followed by a one-line summary.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;
        let (errors, warnings, infos) = self.count_by_severity();

        let mut report = String::new();
        for violation in &self.violations {
            let _ = writeln!(report, "{}", violation.format());
        }
        let _ = write!(
            report,
            "Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} compilation(s)",
            self.compilations_checked
        );
        report
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.compilations_checked += other.compilations_checked;
    }
}
