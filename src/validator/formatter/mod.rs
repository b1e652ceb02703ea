//! Reporters for validation runs.
//!
//! A run pushes events into a [`Reporter`] as they happen. The plain
//! reporter renders them as classified lines; the JSON reporter buffers
//! nothing and renders the final [`RunSummary`] as one document.

pub mod json;
pub mod plain;

use crate::validator::summary::RunSummary;
use crate::validator::types::{KindFilter, ValidationResult};
use std::io::{self, Write};
use std::path::Path;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Line-oriented text output.
    #[default]
    Plain,
    /// A single JSON document.
    Json,
}

impl OutputFormat {
    /// Parse from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Display options shared by reporters.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub color: bool,
    pub show_warnings: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            color: true,
            show_warnings: true,
        }
    }
}

/// Receives the events of a validation run.
///
/// Every method but [`Reporter::finish`] has an empty default so a reporter
/// only handles what it renders.
pub trait Reporter {
    /// A file parsed cleanly into `documents` documents.
    fn file_loaded(&mut self, _path: &Path, _documents: usize) {}

    /// A file could not be read or parsed.
    fn file_error(&mut self, _path: &Path, _message: &str) {}

    /// Kind validation is about to start over `documents` documents.
    fn validation_started(&mut self, _filter: KindFilter, _documents: usize) {}

    /// One document was evaluated.
    fn result(&mut self, _result: &ValidationResult) {}

    /// No file yielded a document.
    fn no_documents(&mut self) {}

    /// The run is over.
    fn finish(&mut self, summary: &RunSummary) -> io::Result<()>;
}

/// Build the reporter for `format`, writing to `out`.
pub fn reporter_for<'a, W: Write + 'a>(
    format: OutputFormat,
    options: ReportOptions,
    out: W,
) -> Box<dyn Reporter + 'a> {
    match format {
        OutputFormat::Plain => Box::new(plain::PlainReporter::new(out, options)),
        OutputFormat::Json => Box::new(json::JsonReporter::new(out, options)),
    }
}
