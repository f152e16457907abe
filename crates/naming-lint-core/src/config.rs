//! Configuration types for naming-lint.

use crate::resolver::DEFAULT_NAMESPACE;
use crate::rule::RuleDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for naming-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations, keyed by rule name or code.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Gets the configuration of a rule, looked up by name first, then code.
    #[must_use]
    pub fn rule_config(&self, descriptor: &RuleDescriptor) -> Option<&RuleConfig> {
        self.rules
            .get(descriptor.name)
            .or_else(|| self.rules.get(descriptor.code))
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, descriptor: &RuleDescriptor) -> bool {
        self.rule_config(descriptor)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, descriptor: &RuleDescriptor) -> Option<crate::Severity> {
        self.rule_config(descriptor).and_then(|c| c.severity)
    }

    /// Gets the configured custom pattern for a rule.
    #[must_use]
    pub fn rule_pattern(&self, descriptor: &RuleDescriptor) -> Option<&str> {
        self.rule_config(descriptor).and_then(RuleConfig::pattern)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Namespace of option keys (`<namespace>.<code>.pattern`).
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Glob patterns of files whose declarations are skipped.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Number of worker threads for declaration dispatch.
    #[serde(default)]
    pub parallelism: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            exclude: default_exclude(),
            parallelism: None,
        }
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/obj/**".to_string(),
        "**/*.g.cs".to_string(),
        "**/*.Designer.cs".to_string(),
    ]
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets the `pattern` option, if set.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.options.get("pattern").and_then(toml::Value::as_str)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(naming_lint::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(
        code(naming_lint::config::parse),
        help("see `naming-lint init` for a commented example")
    )]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
        code: "NL0004",
        name: "boolean-member-name",
        title: "Incorrect boolean name",
        subject: "Boolean",
        description: "A boolean name should follow the naming convention.",
        category: "Naming",
        default_severity: Severity::Warning,
        help_uri: "docs/NL0004.md",
        default_pattern: ".*",
        default_convention: "follow the 'can|has|is' naming convention",
    };

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analyzer.namespace, "dotnet_diagnostic");
        assert_eq!(config.analyzer.exclude.len(), 3);
        assert!(config.rules.is_empty());
        assert!(config.is_rule_enabled(&DESCRIPTOR));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
namespace = "naming"
exclude = ["**/generated/**"]
parallelism = 2

[rules.boolean-member-name]
severity = "error"
pattern = "^.*Flag$"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.namespace, "naming");
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**"]);
        assert_eq!(config.analyzer.parallelism, Some(2));
        assert_eq!(config.rule_severity(&DESCRIPTOR), Some(Severity::Error));
        assert_eq!(config.rule_pattern(&DESCRIPTOR), Some("^.*Flag$"));
    }

    #[test]
    fn rules_can_be_keyed_by_code() {
        let config = Config::parse("[rules.NL0004]\nenabled = false\n").expect("parse");
        assert!(!config.is_rule_enabled(&DESCRIPTOR));
        assert_eq!(config.rule_pattern(&DESCRIPTOR), None);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = Config::parse("[analyzer\n").expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
