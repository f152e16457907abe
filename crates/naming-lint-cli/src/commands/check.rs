//! Check command implementation.

use anyhow::{Context, Result};
use naming_lint_core::{Analyzer, Compilation, RuleBox};
use naming_lint_rules::all_rules;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = source.load()?;

    let rules = match rules_filter {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(&names)
        }
        None => all_rules(),
    };

    let analyzer = Analyzer::builder()
        .config(config)
        .excludes(exclude)
        .rules(rules)
        .build()
        .context("Failed to build analyzer")?;

    let compilations = load_compilations(path)?;
    tracing::info!(
        "Analyzing {} compilation(s) from {:?} with {} rules",
        compilations.len(),
        path,
        analyzer.rule_count()
    );

    let result = analyzer.analyze_all(&compilations);

    super::output::print(&result, format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Selects rules by name or code, warning about unknown entries.
fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut selected = Vec::new();
    let mut available = all_rules();

    for name in names {
        match available
            .iter()
            .position(|rule| rule.name() == *name || rule.code() == *name)
        {
            Some(index) => selected.push(available.swap_remove(index)),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }

    selected
}

/// Loads one model file, or every `*.json` model below a directory.
///
/// An explicitly named file must parse. Inside a directory, files that are
/// not compilation models are skipped with a warning.
fn load_compilations(path: &Path) -> Result<Vec<Compilation>> {
    if path.is_file() {
        let compilation = Compilation::from_file(path)
            .with_context(|| format!("Failed to load model: {}", path.display()))?;
        return Ok(vec![compilation]);
    }

    let mut compilations = Vec::new();
    for file in model_files(path)? {
        match Compilation::from_file(&file) {
            Ok(compilation) => compilations.push(compilation),
            Err(e) => tracing::warn!("Skipping {}: {e}", file.display()),
        }
    }
    Ok(compilations)
}

fn model_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let is_model = entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "json");
        if is_model {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}
