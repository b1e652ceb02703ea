//! JSON reporter.

use crate::validator::formatter::{ReportOptions, Reporter};
use crate::validator::summary::{FileError, RunSummary};
use crate::validator::types::{ResourceKind, ResultStatus, ValidationResult};
use serde::Serialize;
use std::io::{self, Write};

/// Renders the whole run as one JSON object once it finishes.
pub struct JsonReporter<W: Write> {
    out: W,
    options: ReportOptions,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W, options: ReportOptions) -> Self {
        Self { out, options }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        let mut output = JsonOutput::from(summary);
        if !self.options.show_warnings {
            for result in &mut output.results {
                result.warnings.clear();
            }
        }
        serde_json::to_writer_pretty(&mut self.out, &output)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: Vec<JsonResult<'a>>,
    syntax_errors: Vec<JsonSyntaxError<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    file_path: String,
    document: usize,
    kind: &'a str,
    name: Option<&'a str>,
    status: &'static str,
    rule_set: Option<ResourceKind>,
    passed: bool,
    errors: &'a [String],
    warnings: Vec<&'a str>,
}

#[derive(Serialize)]
struct JsonSyntaxError<'a> {
    file_path: String,
    message: &'a str,
}

#[derive(Serialize)]
struct JsonSummary {
    files_checked: usize,
    documents_checked: usize,
    documents_validated: usize,
    documents_skipped: usize,
    passed_count: usize,
    failed_count: usize,
    total_errors: usize,
    total_warnings: usize,
    syntax_errors: usize,
    no_documents_found: bool,
    passed: bool,
}

impl<'a> From<&'a RunSummary> for JsonOutput<'a> {
    fn from(summary: &'a RunSummary) -> Self {
        Self {
            results: summary.results.iter().map(JsonResult::from).collect(),
            syntax_errors: summary.file_errors.iter().map(JsonSyntaxError::from).collect(),
            summary: JsonSummary {
                files_checked: summary.files_checked,
                documents_checked: summary.documents_seen,
                documents_validated: summary.documents_validated(),
                documents_skipped: summary.documents_skipped(),
                passed_count: summary.passed_count(),
                failed_count: summary.failed_count(),
                total_errors: summary.error_count(),
                total_warnings: summary.warning_count(),
                syntax_errors: summary.file_errors.len(),
                no_documents_found: summary.no_documents_found,
                passed: summary.passed(),
            },
        }
    }
}

impl<'a> From<&'a ValidationResult> for JsonResult<'a> {
    fn from(r: &'a ValidationResult) -> Self {
        Self {
            file_path: r.source.display().to_string(),
            document: r.doc_index,
            kind: &r.kind,
            name: r.name.as_deref(),
            status: match r.status {
                ResultStatus::MissingIdentity => "missing_identity",
                ResultStatus::BaselineOnly => "baseline_only",
                ResultStatus::Checked(_) => "checked",
            },
            rule_set: match r.status {
                ResultStatus::Checked(kind) => Some(kind),
                _ => None,
            },
            passed: r.passed,
            errors: &r.errors,
            warnings: r.warnings.iter().map(String::as_str).collect(),
        }
    }
}

impl<'a> From<&'a FileError> for JsonSyntaxError<'a> {
    fn from(e: &'a FileError) -> Self {
        Self {
            file_path: e.path.display().to_string(),
            message: &e.message,
        }
    }
}
