//! Manifest file discovery.
//!
//! A path is either a single file, taken as-is, or a directory whose direct
//! `.yaml`/`.yml` children are collected in file-name order. Subdirectories
//! are not descended into.

use crate::error::{Result, ValidatorError};
use std::path::{Path, PathBuf};

const MANIFEST_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Whether `path` has a manifest extension.
pub fn is_manifest_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| MANIFEST_EXTENSIONS.contains(&ext))
}

/// Whether `path` matches one of the ignore globs.
pub fn is_ignored(path: &Path, ignore_paths: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    ignore_paths.iter().any(|pattern| match glob::Pattern::new(pattern) {
        Ok(glob) => glob.matches(&path_str) || glob.matches(&file_name),
        Err(e) => {
            log::warn!("ignoring invalid ignore pattern '{}': {}", pattern, e);
            false
        }
    })
}

/// Collect the manifest files named by `path`.
///
/// A file path is returned even if its extension is not `.yaml`/`.yml`.
/// Fails with `PathNotFound` when `path` is neither a file nor a directory.
pub fn discover(path: &Path, ignore_paths: &[String]) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if is_ignored(path, ignore_paths) {
            log::debug!("{} matches an ignore pattern", path.display());
            return Ok(Vec::new());
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        return Err(ValidatorError::PathNotFound(path.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(path)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry in {}: {}", path.display(), e);
                continue;
            }
        };
        let entry_path = entry.path();
        if !entry.file_type().is_file() || !is_manifest_file(entry_path) {
            continue;
        }
        if is_ignored(entry_path, ignore_paths) {
            log::debug!("{} matches an ignore pattern", entry_path.display());
            continue;
        }
        files.push(entry_path.to_path_buf());
    }

    log::debug!("discovered {} manifest file(s) in {}", files.len(), path.display());
    Ok(files)
}
