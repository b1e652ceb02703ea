//! Plain text reporter.
//!
//! Writes one classified line per event as it arrives:
//!
//! ```text
//! [INFO] manifests/app.yaml: YAML syntax OK (2 document(s))
//! [WARN] manifests/app.yaml (doc #1) Deployment/web: recommended field 'spec.strategy' is missing from Deployment
//! [INFO] manifests/app.yaml (doc #1) Deployment/web: validation passed, all required fields in Deployment are present
//! ```

use crate::validator::formatter::{ReportOptions, Reporter};
use crate::validator::summary::RunSummary;
use crate::validator::types::{KindFilter, ResultStatus, ValidationResult};
use colored::{Color, Colorize};
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "[INFO]",
            Level::Warn => "[WARN]",
            Level::Error => "[ERROR]",
        }
    }

    fn color(self) -> Color {
        match self {
            Level::Info => Color::Green,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
        }
    }
}

/// Line-oriented reporter.
///
/// Write failures do not interrupt the run; the first one is kept and
/// returned from [`Reporter::finish`].
pub struct PlainReporter<W: Write> {
    out: W,
    options: ReportOptions,
    write_error: Option<io::Error>,
}

impl<W: Write> PlainReporter<W> {
    pub fn new(out: W, options: ReportOptions) -> Self {
        Self {
            out,
            options,
            write_error: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, level: Level, text: &str) {
        let tag = if self.options.color {
            level.tag().color(level.color()).bold().to_string()
        } else {
            level.tag().to_string()
        };
        self.write_line(&format!("{} {}", tag, text));
    }

    fn write_line(&mut self, text: &str) {
        if self.write_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", text) {
            self.write_error = Some(e);
        }
    }
}

impl<W: Write> Reporter for PlainReporter<W> {
    fn file_loaded(&mut self, path: &Path, documents: usize) {
        self.line(
            Level::Info,
            &format!(
                "{}: YAML syntax OK ({} document(s))",
                path.display(),
                documents
            ),
        );
    }

    fn file_error(&mut self, path: &Path, message: &str) {
        self.line(Level::Error, &format!("{}: {}", path.display(), message));
    }

    fn validation_started(&mut self, filter: KindFilter, documents: usize) {
        let scope = match filter {
            KindFilter::BaselineOnly => "apiVersion, kind and metadata.name".to_string(),
            KindFilter::Kind(kind) => format!("{} rules", kind),
            KindFilter::All => "all rule sets".to_string(),
        };
        self.line(
            Level::Info,
            &format!("Validating {} document(s) against {}", documents, scope),
        );
    }

    fn result(&mut self, result: &ValidationResult) {
        let subject = format!("{} {}", result.location(), result.object_identifier());

        for error in &result.errors {
            self.line(Level::Error, &format!("{}: {}", subject, error));
        }
        if self.options.show_warnings {
            for warning in &result.warnings {
                self.line(Level::Warn, &format!("{}: {}", subject, warning));
            }
        }

        match (result.status, result.passed) {
            (ResultStatus::Checked(kind), true) => self.line(
                Level::Info,
                &format!(
                    "{}: validation passed, all required fields in {} are present",
                    subject, kind
                ),
            ),
            (ResultStatus::Checked(_), false) => self.line(
                Level::Error,
                &format!(
                    "{}: validation failed with {} error(s)",
                    subject,
                    result.errors.len()
                ),
            ),
            (ResultStatus::BaselineOnly, _) => self.line(
                Level::Info,
                &format!("{}: apiVersion, kind and metadata.name are present", subject),
            ),
            (ResultStatus::MissingIdentity, _) => {}
        }
    }

    fn no_documents(&mut self) {
        self.line(
            Level::Error,
            "No valid YAML documents found. Skipping K8s validation.",
        );
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        let text = format!(
            "Validation complete. Total YAML documents checked: {} (passed: {}, failed: {}, skipped: {}, syntax errors: {})",
            summary.documents_seen,
            summary.passed_count(),
            summary.failed_count(),
            summary.documents_skipped(),
            summary.file_errors.len()
        );
        self.write_line(&text);

        if let Some(e) = self.write_error.take() {
            return Err(e);
        }
        self.out.flush()
    }
}
