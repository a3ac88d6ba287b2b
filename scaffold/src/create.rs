//! Orchestration for creating a new exercise from the template.
//!
//! Creating an exercise: ensures the level directory exists, then copies the
//! template tree into `<level>/<name>`. An existing exercise directory is
//! merged into rather than refused; callers pick a fresh name.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::args::Invocation;
use crate::io::config::ScaffoldConfig;
use crate::io::copy::copy_tree;
use crate::io::paths::ScaffoldPaths;

/// Outcome of a successful scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// `<level>/<name>`, as shown to the user.
    pub display_dir: PathBuf,
    /// Absolute (root-joined) exercise directory.
    pub exercise_dir: PathBuf,
    /// True when the level directory did not exist beforehand.
    pub level_dir_created: bool,
    /// True when the exercise directory already existed and was merged into.
    pub merged: bool,
    pub files_copied: usize,
}

/// Create `<root>/<level>/<name>` from the configured template.
pub fn create_exercise(
    root: &Path,
    invocation: &Invocation,
    config: &ScaffoldConfig,
) -> Result<CreateOutcome> {
    let paths = ScaffoldPaths::new(root, invocation, config);
    debug!(
        level = %invocation.level,
        name = %invocation.name,
        template = %paths.template_dir.display(),
        "creating exercise"
    );

    let level_dir_created = ensure_level_dir(&paths.level_dir)?;
    ensure_parent_dirs(&paths.exercise_dir)?;

    let merged = paths.exercise_dir.exists();
    if merged {
        warn!(
            dir = %paths.exercise_dir.display(),
            "exercise directory already exists, template files will overwrite it"
        );
    }

    let stats = copy_tree(&paths.template_dir, &paths.exercise_dir).with_context(|| {
        format!(
            "copy {} to {}",
            paths.template_dir.display(),
            paths.exercise_dir.display()
        )
    })?;

    info!(
        dir = %paths.display_dir.display(),
        files = stats.files,
        "exercise created"
    );
    Ok(CreateOutcome {
        display_dir: paths.display_dir,
        exercise_dir: paths.exercise_dir,
        level_dir_created,
        merged,
        files_copied: stats.files + stats.symlinks,
    })
}

/// Create the level directory if missing. Returns whether it was created.
///
/// Only the last segment is created; the root must already exist.
fn ensure_level_dir(level_dir: &Path) -> Result<bool> {
    if level_dir.exists() {
        return Ok(false);
    }
    debug!(dir = %level_dir.display(), "creating level directory");
    fs::create_dir(level_dir).with_context(|| format!("create {}", level_dir.display()))?;
    Ok(true)
}

/// Create directories between the level directory and the exercise itself
/// when the name has several segments (`group/foo`).
fn ensure_parent_dirs(exercise_dir: &Path) -> Result<()> {
    if let Some(parent) = exercise_dir.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}
