//! Editorconfig command implementation.

use anyhow::{Context, Result};
use naming_lint_core::{render_editorconfig, Config};
use naming_lint_rules::all_descriptors;
use std::path::Path;

use crate::config_resolver::ConfigSource;

/// Runs the editorconfig command.
pub fn run(output: &Path, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;
    write_editorconfig(output, &config)?;

    println!("Created .editorconfig file in '{}'.", output.display());
    Ok(())
}

fn write_editorconfig(output: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let content = render_editorconfig(&all_descriptors(), config);
    std::fs::write(output, content)
        .with_context(|| format!("Failed to write {}", output.display()))
}
