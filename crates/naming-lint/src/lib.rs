//! # naming-lint
//!
//! Regex-configurable naming-convention checker for the declarations of a
//! compilation.
//!
//! This is the facade crate that re-exports the core framework and the
//! built-in rules.
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use naming_lint::{Compilation, Config};
//!
//! let compilation = Compilation::from_file("obj/naming-model.json".as_ref())?;
//! let analyzer = naming_lint::analyzer_with_all_rules(Config::default())?;
//!
//! let result = analyzer.analyze(&compilation);
//! println!("{}", result.format_report());
//! ```
//!
//! ## Configuration
//!
//! Every rule reads `<namespace>.<code>.pattern` from the options of the
//! compilation's primary syntax tree, falling back to the `pattern` set in
//! `naming-lint.toml`, then to its built-in default. The namespace defaults
//! to `dotnet_diagnostic`.

#![forbid(unsafe_code)]

pub use naming_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use naming_lint_rules::*;
}

/// Builds an analyzer running every built-in rule under `config`.
///
/// # Errors
///
/// Returns an error if an exclude pattern in `config` is not a valid glob
/// or the worker pool cannot be created.
pub fn analyzer_with_all_rules(config: Config) -> Result<Analyzer, AnalyzerError> {
    Analyzer::builder()
        .config(config)
        .rules(naming_lint_rules::all_rules())
        .build()
}
