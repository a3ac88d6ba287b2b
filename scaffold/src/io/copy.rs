//! Recursive, in-process directory copy.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::trace;
use walkdir::WalkDir;

/// Counts gathered while copying a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub dirs: usize,
    pub files: usize,
    pub symlinks: usize,
}

/// Copy `src` and everything below it to `dst`.
///
/// `dst` itself is created if missing (its parent must exist). When `dst`
/// already exists the copy merges into it: existing directories are reused
/// and files with the same relative path are overwritten. Nothing is rolled
/// back if a step fails part way through.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<CopyStats> {
    if !src.is_dir() {
        return Err(anyhow!("read template {}: not a directory", src.display()));
    }

    let mut stats = CopyStats::default();
    for entry in WalkDir::new(src).follow_links(false).sort_by_file_name() {
        let entry = entry.with_context(|| format!("read template {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("relativize {}", entry.path().display()))?;
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            if !target.is_dir() {
                fs::create_dir(&target).with_context(|| format!("create {}", target.display()))?;
            }
            stats.dirs += 1;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
            stats.symlinks += 1;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("copy {} to {}", entry.path().display(), target.display())
            })?;
            stats.files += 1;
        }
        trace!(path = %relative.display(), "copied entry");
    }
    Ok(stats)
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let link = fs::read_link(src).with_context(|| format!("read link {}", src.display()))?;
    if dst.symlink_metadata().is_ok() {
        fs::remove_file(dst).with_context(|| format!("replace {}", dst.display()))?;
    }
    std::os::unix::fs::symlink(&link, dst)
        .with_context(|| format!("link {} to {}", dst.display(), link.display()))?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .with_context(|| format!("copy {} to {}", src.display(), dst.display()))?;
    Ok(())
}
