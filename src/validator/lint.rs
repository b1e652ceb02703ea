//! Orchestration of one validation run.
//!
//! Discovery, parallel loading, per-file syntax reporting, the engine and
//! the run summary are tied together here.

use crate::error::{Result, ValidatorError};
use crate::validator::discovery;
use crate::validator::engine;
use crate::validator::formatter::Reporter;
use crate::validator::parser::{self, ManifestDocument, ParseError};
use crate::validator::summary::RunSummary;
use crate::validator::types::{KindFilter, ValidationResult};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Settings for a run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub filter: KindFilter,
    /// Glob patterns of files to leave out.
    pub ignore_paths: Vec<String>,
}

impl RunOptions {
    pub fn new(filter: KindFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    pub fn with_ignore_paths(mut self, ignore_paths: Vec<String>) -> Self {
        self.ignore_paths = ignore_paths;
        self
    }
}

/// Resolve a `--type` selector. `None` means identity checks only.
pub fn parse_filter(selector: Option<&str>) -> Result<KindFilter> {
    match selector {
        None => Ok(KindFilter::BaselineOnly),
        Some(s) => {
            KindFilter::parse(s).ok_or_else(|| ValidatorError::UnsupportedKind(s.to_string()))
        }
    }
}

/// Validate every manifest under `path`, streaming events to `reporter`.
///
/// Per-file and per-document problems end up in the returned summary; only
/// invocation-level failures are returned as `Err`.
pub fn run(path: &Path, options: &RunOptions, reporter: &mut dyn Reporter) -> Result<RunSummary> {
    let files = discovery::discover(path, &options.ignore_paths)?;

    let loaded: Vec<(PathBuf, std::result::Result<Vec<ManifestDocument>, ParseError>)> = files
        .par_iter()
        .map(|file| (file.clone(), parser::parse_file(file)))
        .collect();

    let mut summary = RunSummary::new();
    let mut documents = Vec::new();

    for (file, outcome) in loaded {
        match outcome {
            Ok(docs) => {
                reporter.file_loaded(&file, docs.len());
                summary.record_file(docs.len());
                documents.extend(docs);
            }
            Err(e) => {
                let message = e.to_string();
                log::debug!("{}: {}", file.display(), message);
                reporter.file_error(&file, &message);
                summary.record_file_error(&file, message);
            }
        }
    }

    if documents.is_empty() {
        reporter.no_documents();
        summary.mark_no_documents();
    } else {
        reporter.validation_started(options.filter, documents.len());
        let results = engine::validate(&documents, options.filter, reporter);
        summary.record_results(results);
    }

    log::info!(
        "validated {} of {} document(s) from {} file(s)",
        summary.documents_validated(),
        summary.documents_seen,
        files.len()
    );

    reporter.finish(&summary).map_err(ValidatorError::Output)?;
    Ok(summary)
}

/// Validate YAML content directly, without touching the filesystem.
pub fn validate_content(
    content: &str,
    source: &Path,
    filter: KindFilter,
) -> std::result::Result<Vec<ValidationResult>, ParseError> {
    let documents = parser::parse_documents(content, source)?;
    Ok(documents
        .iter()
        .filter_map(|doc| engine::validate_document(doc, filter))
        .collect())
}
