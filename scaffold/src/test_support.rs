//! Test-only helpers for building scratch project roots.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::io::config::DEFAULT_TEMPLATE_DIR;

/// Template files written by [`TestProject::new`], keyed by relative path.
pub const TEMPLATE_FILES: &[(&str, &str)] = &[
    ("README.md", "# Title\n"),
    ("notes.md", "## Notes\n"),
    ("solution.ts", "type Solution = unknown\n"),
];

/// Temporary project root with a template at `scripts/template`.
pub struct TestProject {
    temp: TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let template = temp.path().join(DEFAULT_TEMPLATE_DIR);
        fs::create_dir_all(&template)
            .with_context(|| format!("create {}", template.display()))?;
        for (name, contents) in TEMPLATE_FILES {
            let path = template.join(name);
            fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        }
        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn template_dir(&self) -> PathBuf {
        self.root().join(DEFAULT_TEMPLATE_DIR)
    }

    /// Sorted `(relative path, contents)` for every file under the template.
    pub fn template_files(&self) -> Vec<(String, String)> {
        self.relative_files(&self.template_dir())
    }

    /// Sorted `(relative path, contents)` for every file under `dir`.
    pub fn relative_files(&self, dir: &Path) -> Vec<(String, String)> {
        let mut files: Vec<(String, String)> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let relative = entry
                    .path()
                    .strip_prefix(dir)
                    .unwrap_or(entry.path())
                    .to_string_lossy()
                    .to_string();
                let contents = fs::read_to_string(entry.path()).unwrap_or_default();
                (relative, contents)
            })
            .collect();
        files.sort();
        files
    }
}
