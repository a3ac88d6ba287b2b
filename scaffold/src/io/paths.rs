//! Paths derived for a single scaffold invocation.

use std::path::{Path, PathBuf};

use crate::core::args::Invocation;
use crate::io::config::{CONFIG_FILE, ScaffoldConfig};

/// All canonical paths for one invocation, rooted at the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPaths {
    pub root: PathBuf,
    /// `<root>/<level>`
    pub level_dir: PathBuf,
    /// `<root>/<level>/<name>`
    pub exercise_dir: PathBuf,
    /// `<root>/<template_dir>`
    pub template_dir: PathBuf,
    /// `<level>/<name>`, for user-facing output.
    pub display_dir: PathBuf,
}

impl ScaffoldPaths {
    pub fn new(root: impl Into<PathBuf>, invocation: &Invocation, config: &ScaffoldConfig) -> Self {
        let root = root.into();
        let level_dir = root.join(invocation.level.as_str());
        let exercise_dir = level_dir.join(&invocation.name);
        let template_dir = root.join(&config.template_dir);
        let display_dir = Path::new(invocation.level.as_str()).join(&invocation.name);
        Self {
            root,
            level_dir,
            exercise_dir,
            template_dir,
            display_dir,
        }
    }
}

/// Default config location for a project root.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
