//! Run-level aggregation of validation results.

use crate::validator::types::ValidationResult;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// Everything a run found, accumulated as the run progresses.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Files that parsed cleanly.
    pub files_checked: usize,
    /// Files with a syntax or read error.
    pub file_errors: Vec<FileError>,
    /// Documents parsed across all files.
    pub documents_seen: usize,
    /// One entry per evaluated document, in (file, doc index) order.
    pub results: Vec<ValidationResult>,
    /// Set when no file yielded a document; nothing was validated.
    pub no_documents_found: bool,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_file(&mut self, documents: usize) {
        self.files_checked += 1;
        self.documents_seen += documents;
    }

    pub fn record_file_error(&mut self, path: &Path, message: impl Into<String>) {
        self.file_errors.push(FileError {
            path: path.to_path_buf(),
            message: message.into(),
        });
    }

    pub fn record_results(&mut self, results: impl IntoIterator<Item = ValidationResult>) {
        self.results.extend(results);
    }

    pub fn mark_no_documents(&mut self) {
        self.no_documents_found = true;
    }

    /// Documents that produced a result.
    pub fn documents_validated(&self) -> usize {
        self.results.len()
    }

    /// Documents with no matching rule set under the run's filter.
    pub fn documents_skipped(&self) -> usize {
        self.documents_seen.saturating_sub(self.results.len())
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.passed).count()
    }

    pub fn error_count(&self) -> usize {
        self.results.iter().map(|r| r.errors.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.results.iter().map(|r| r.warnings.len()).sum()
    }

    /// No failed document, no file error, and something was validated.
    pub fn passed(&self) -> bool {
        !self.no_documents_found && self.file_errors.is_empty() && self.failed_count() == 0
    }

    /// Process exit status for this run. `strict` makes warnings fatal.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if !self.passed() || (strict && self.warning_count() > 0) {
            1
        } else {
            0
        }
    }
}
