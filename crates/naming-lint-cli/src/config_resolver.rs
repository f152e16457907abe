//! Locates `naming-lint.toml` for a model path.
//!
//! Compilation models are usually written below the project (`obj/Debug/`),
//! so the search walks up from the model's directory the way `.editorconfig`
//! lookup does:
//!
//! 1. `--config` flag (explicit path)
//! 2. nearest `naming-lint.toml` or `.naming-lint.toml` in the model's
//!    directory or any ancestor
//! 3. `config.toml` in the global directory (`$NAMING_LINT_CONFIG_DIR` or
//!    `~/.naming-lint/`)
//! 4. built-in defaults

use anyhow::{Context, Result};
use naming_lint_core::Config;
use std::path::{Path, PathBuf};

/// File names that mark a project configuration, checked in order within
/// each directory.
const PROJECT_CONFIG_NAMES: &[&str] = &["naming-lint.toml", ".naming-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config`.
    Explicit(PathBuf),
    /// Nearest project file above the model.
    Project(PathBuf),
    /// The user-wide fallback file.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No naming-lint.toml found, using defaults");
            return Ok(Config::default());
        };

        let config = Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;
        tracing::info!(
            namespace = %config.analyzer.namespace,
            rules = config.rules.len(),
            "Loaded {}",
            path.display()
        );
        Ok(config)
    }
}

/// Resolves the configuration for `target`, a model file or a directory of
/// models.
#[must_use]
pub fn resolve(target: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_from(target, explicit, global_config_dir())
}

fn resolve_from(target: &Path, explicit: Option<&Path>, global_dir: Option<PathBuf>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(path) = nearest_project_config(target) {
        tracing::debug!("Found project config: {}", path.display());
        return ConfigSource::Project(path);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|path| path.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

fn nearest_project_config(target: &Path) -> Option<PathBuf> {
    let start = if target.is_dir() {
        target.to_path_buf()
    } else {
        match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    };
    let start = start.canonicalize().unwrap_or(start);

    start.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// `$NAMING_LINT_CONFIG_DIR`, else `~/.naming-lint/`.
fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("NAMING_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".naming-lint"))
}
