//! Scaffolder configuration stored in `scaffold.toml` at the project root.

use std::fs;
use std::path::{Component, Path};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Template location used when no config overrides it, relative to the root.
pub const DEFAULT_TEMPLATE_DIR: &str = "scripts/template";

/// File name of the config, relative to the root.
pub const CONFIG_FILE: &str = "scaffold.toml";

/// Scaffolder configuration (TOML).
///
/// Missing fields fall back to the layout of the exercise repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Template directory copied for each new exercise, relative to the root.
    pub template_dir: String,

    /// Solution file linked from the readme entry.
    pub solution_file: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template_dir: DEFAULT_TEMPLATE_DIR.to_string(),
            solution_file: "solution.ts".to_string(),
        }
    }
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.template_dir.trim().is_empty() {
            return Err(anyhow!("template_dir must be non-empty"));
        }
        if self.solution_file.trim().is_empty() {
            return Err(anyhow!("solution_file must be non-empty"));
        }
        let escapes = Path::new(&self.solution_file)
            .components()
            .any(|component| !matches!(component, Component::Normal(_)));
        if escapes {
            return Err(anyhow!(
                "solution_file must be a relative path inside the exercise, got '{}'",
                self.solution_file
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ScaffoldConfig::default()`.
pub fn load_config(path: &Path) -> Result<ScaffoldConfig> {
    if !path.exists() {
        let cfg = ScaffoldConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ScaffoldConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
