//! Core analyzer for orchestrating rule execution over compilations.

use crate::config::Config;
use crate::context::{AnalyzerOptions, CompilationStart};
use crate::model::{Compilation, ModelError};
use crate::reporter::Reporter;
use crate::resolver::pattern_option_key;
use crate::rule::{Rule, RuleBox, RuleSessionBox};
use crate::types::{LintResult, Location, Severity, Violation};

use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during analysis.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum AnalyzerError {
    /// Configuration error.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// A compilation model could not be loaded.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] ModelError),

    /// Glob pattern error.
    #[error("Invalid exclude pattern: {0}")]
    #[diagnostic(code(naming_lint::analyzer::glob))]
    Glob(#[from] glob::PatternError),

    /// The worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    #[diagnostic(code(naming_lint::analyzer::pool))]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    parallelism: Option<usize>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules to the analyzer.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the number of worker threads.
    #[must_use]
    pub fn parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is not a valid glob or the
    /// worker pool cannot be created.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        // Builder excludes come first; config excludes are merged in
        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());

        let exclude = exclude_patterns
            .into_iter()
            .map(|pattern| glob::Pattern::new(&pattern).map(|glob| (pattern, glob)))
            .collect::<Result<Vec<_>, _>>()?;

        let pool = match self.parallelism.or(config.analyzer.parallelism) {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("naming-lint-{i}"))
                    .build()?,
            ),
            None => None,
        };

        Ok(Analyzer {
            rules: self.rules,
            exclude,
            config,
            pool,
        })
    }
}

/// The main analyzer that runs rules over compilations.
///
/// Use [`Analyzer::builder()`] to construct an instance. An analyzer holds
/// no per-compilation state and can be reused for any number of
/// compilations.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    exclude: Vec<(String, glob::Pattern)>,
    config: Config,
    pool: Option<rayon::ThreadPool>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the registered rules.
    #[must_use]
    pub fn rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyzes one compilation.
    #[must_use]
    pub fn analyze(&self, compilation: &Compilation) -> LintResult {
        self.install(|| self.analyze_compilation(compilation))
    }

    /// Analyzes several compilations concurrently and merges the results.
    #[must_use]
    pub fn analyze_all(&self, compilations: &[Compilation]) -> LintResult {
        self.install(|| {
            compilations
                .par_iter()
                .map(|compilation| self.analyze_compilation(compilation))
                .reduce(LintResult::new, |mut acc, result| {
                    acc.extend(result);
                    acc
                })
        })
    }

    /// Loads a compilation model from `path` and analyzes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be read or parsed.
    pub fn analyze_file(&self, path: &Path) -> Result<LintResult, AnalyzerError> {
        debug!("Loading model: {}", path.display());
        let compilation = Compilation::from_file(path)?;
        Ok(self.analyze(&compilation))
    }

    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    fn analyze_compilation(&self, compilation: &Compilation) -> LintResult {
        info!("Analyzing compilation '{}'", compilation.assembly);

        let options = self.effective_options(compilation);
        let mut ctx =
            CompilationStart::new(compilation, &options, &self.config.analyzer.namespace);

        let mut sessions: Vec<(&dyn Rule, RuleSessionBox)> = Vec::new();
        for rule in &self.rules {
            let descriptor = rule.descriptor();
            if !self.config.is_rule_enabled(descriptor) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            match rule.start(&mut ctx) {
                Some(session) => {
                    debug!("Rule {} active", rule.name());
                    sessions.push((rule.as_ref(), session));
                }
                None => debug!("Rule {} inactive: target types not present", rule.name()),
            }
        }
        let end_diagnostics = ctx.into_end_diagnostics();

        let mut violations = self.dispatch(compilation, &sessions);
        self.apply_severity_overrides(&mut violations);
        violations.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        violations.extend(end_diagnostics);

        info!(
            "Analysis of '{}' complete: {} violations",
            compilation.assembly,
            violations.len()
        );

        LintResult {
            violations,
            compilations_checked: 1,
        }
    }

    /// Builds the options visible to a compilation: configured patterns,
    /// overlaid with the primary syntax tree's options.
    fn effective_options(&self, compilation: &Compilation) -> AnalyzerOptions {
        let namespace = &self.config.analyzer.namespace;
        let mut options = AnalyzerOptions::new();

        for rule in &self.rules {
            let descriptor = rule.descriptor();
            if let Some(pattern) = self.config.rule_pattern(descriptor) {
                options.insert(pattern_option_key(namespace, descriptor.code), pattern);
            }
        }

        if let Some(tree) = compilation.primary_tree() {
            options.merge(&tree.options);
        }

        options
    }

    fn dispatch(
        &self,
        compilation: &Compilation,
        sessions: &[(&dyn Rule, RuleSessionBox)],
    ) -> Vec<Violation> {
        if sessions.is_empty() {
            return Vec::new();
        }

        let symbols = compilation
            .symbols
            .par_iter()
            .filter(|symbol| !self.should_skip(compilation, symbol.location()))
            .flat_map_iter(|symbol| {
                let kind = symbol.event_kind();
                let mut out: Vec<Violation> = Vec::new();
                for (rule, session) in sessions.iter().filter(|(_, s)| s.wants(kind)) {
                    session.on_symbol(symbol, &mut Reporter::new(rule.descriptor(), &mut out));
                }
                out
            });

        let locals = compilation
            .local_declarations
            .par_iter()
            .filter(|group| {
                group
                    .declarators
                    .first()
                    .is_some_and(|d| !self.should_skip(compilation, &d.location))
            })
            .flat_map_iter(|group| {
                let mut out: Vec<Violation> = Vec::new();
                for (rule, session) in sessions
                    .iter()
                    .filter(|(_, s)| s.wants(crate::model::EventKind::LocalDeclarations))
                {
                    session.on_local_declarations(
                        group,
                        &mut Reporter::new(rule.descriptor(), &mut out),
                    );
                }
                out
            });

        let calls = compilation
            .call_sites
            .par_iter()
            .filter(|call| !self.should_skip(compilation, &call.location))
            .flat_map_iter(|call| {
                let mut out: Vec<Violation> = Vec::new();
                for (rule, session) in sessions
                    .iter()
                    .filter(|(_, s)| s.wants(crate::model::EventKind::CallSite))
                {
                    session.on_call_site(call, &mut Reporter::new(rule.descriptor(), &mut out));
                }
                out
            });

        symbols.chain(locals).chain(calls).collect()
    }

    /// Applies severity overrides from configuration.
    ///
    /// Compilation-wide diagnostics keep their severity.
    fn apply_severity_overrides(&self, violations: &mut [Violation]) {
        let overrides: HashMap<&str, Severity> = self
            .rules
            .iter()
            .filter_map(|rule| {
                self.config
                    .rule_severity(rule.descriptor())
                    .map(|severity| (rule.code(), severity))
            })
            .collect();

        if overrides.is_empty() {
            return;
        }

        for v in violations.iter_mut().filter(|v| v.location.is_some()) {
            if let Some(severity) = overrides.get(v.code.as_str()) {
                v.severity = *severity;
            }
        }
    }

    /// Checks if declarations at `location` should be skipped.
    fn should_skip(&self, compilation: &Compilation, location: &Location) -> bool {
        if compilation
            .tree(&location.file)
            .is_some_and(|tree| tree.generated)
        {
            return true;
        }
        self.should_exclude(&location.file)
    }

    /// Checks if a path matches an exclude pattern.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for (pattern, glob_pattern) in &self.exclude {
            if glob_pattern.matches(&path_str) {
                return true;
            }

            // Also check as substring for patterns like "**/obj/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.contains('*')
                && !normalized_pattern.is_empty()
                && path_str.contains(&normalized_pattern)
            {
                return true;
            }
        }

        false
    }
}

fn sort_key(v: &Violation) -> (Option<&PathBuf>, usize, usize, &str) {
    match &v.location {
        Some(location) => (Some(&location.file), location.line, location.column, &v.code),
        None => (None, 0, 0, &v.code),
    }
}
