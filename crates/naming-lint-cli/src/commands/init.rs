//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# naming-lint configuration
# See https://github.com/naming-lint/naming-lint for documentation

[analyzer]
# Namespace of per-file option keys (<namespace>.<code>.pattern)
namespace = "dotnet_diagnostic"

# Glob patterns of generated files to skip
exclude = [
    "**/obj/**",
    "**/*.g.cs",
    "**/*.Designer.cs",
]

# Worker threads for declaration dispatch (default: all cores)
# parallelism = 4

# Rule configurations
# Each rule can be enabled/disabled, have its severity overridden and
# replace its default pattern. Rules are keyed by name or code.

[rules.boolean-member-name]
enabled = true
# severity = "error"
# pattern = "^_?(is|has|can|should)[A-Z][a-zA-Z0-9]*$"

[rules.dictionary-member-name]
enabled = true

# [rules.test-method-name]
# enabled = true
# pattern = "^[A-Z][a-zA-Z0-9]*_[A-Z][a-zA-Z0-9_]*$"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("naming-lint.toml");
    write_default_config(config_path, force)?;

    println!("Created naming-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit naming-lint.toml to configure rules");
    println!("  2. Run: naming-lint check <model.json>");

    Ok(())
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use naming_lint_core::Config;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.analyzer.namespace, "dotnet_diagnostic");
        assert_eq!(config.analyzer.exclude.len(), 3);
        assert!(config.rules.contains_key("boolean-member-name"));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("naming-lint.toml");
        std::fs::write(&path, "# mine").unwrap();

        assert!(write_default_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        write_default_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
