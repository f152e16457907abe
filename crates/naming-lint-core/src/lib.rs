//! # naming-lint-core
//!
//! Core framework for checking declaration names against regex-based
//! conventions in a host-supplied semantic model.
//!
//! This crate provides:
//!
//! - [`Compilation`] and the rest of the [`model`], the read-only view of
//!   declarations a host hands to the analyzer
//! - [`Rule`] and [`RuleSession`], the per-compilation rule lifecycle
//! - [`ResolvedShape`] for classifying declared types structurally
//! - [`NamePolicy`] and [`is_valid_pattern`] for name validation
//! - [`Analyzer`] for orchestrating rule execution
//! - [`Violation`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use naming_lint_core::{Analyzer, Compilation};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let compilation = Compilation::from_file("obj/naming-model.json".as_ref())?;
//! let result = analyzer.analyze(&compilation);
//! println!("{}", result.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod editorconfig;
mod pattern;
mod policy;
mod reporter;
mod resolver;
mod rule;
mod shape;
mod types;

/// The host-supplied semantic model.
pub mod model;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::{AnalyzerOptions, CompilationStart};
pub use editorconfig::render_editorconfig;
pub use model::{Compilation, EventKind, ModelError, Symbol, TypeId, TypeRef};
pub use pattern::{is_valid_pattern, NamePattern, PatternError};
pub use policy::{
    custom_pattern_suffix, format_message, is_name_valid, is_name_valid_with, NamePolicy,
};
pub use reporter::{build_violation, Reporter, ViolationSink};
pub use resolver::{
    pattern_option_key, resolve_effective_pattern, EffectivePattern, DEFAULT_NAMESPACE,
};
pub use rule::{Rule, RuleBox, RuleDescriptor, RuleSession, RuleSessionBox};
pub use shape::{matches, ResolvedShape, ShapeKind, ShapeSpec, TargetShape};
pub use types::{LintResult, Location, Severity, Violation};
