//! Directory enumeration.
//!
//! Both listings look only at immediate children and return sorted names so
//! the generated output is deterministic across runs and platforms.

use compdoc_core::{Error, Result};
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Lists the immediate child directories of the components root.
///
/// # Errors
///
/// Any enumeration failure (unreadable root, broken entry) is returned as
/// [`Error::Scan`] and aborts the whole run.
pub fn component_dirs(root: &Path) -> Result<Vec<String>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| Error::Scan {
            path: root.to_path_buf(),
            source: source.into(),
        })?;
        if entry.file_type().is_dir() {
            dirs.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Lists the immediate child files of a component's examples directory.
///
/// A missing directory is the documented non-fatal case: a warning is logged
/// and an empty list returned.
///
/// # Errors
///
/// Returns [`Error::Scan`] if the directory exists but cannot be enumerated.
pub fn example_files(examples_root: &Path, component: &str) -> Result<Vec<String>> {
    let dir = examples_root.join(component);
    if !dir.is_dir() {
        warn!(component, "no examples found");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| Error::Scan {
            path: dir.clone(),
            source: source.into(),
        })?;
        if entry.file_type().is_file() {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    files.sort();
    Ok(files)
}
