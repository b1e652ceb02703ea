//! Core types for the manifest validator.
//!
//! - `Severity` - classification of a reported message
//! - `ResourceKind` - the Kubernetes kinds that have a rule set
//! - `KindFilter` - which rule sets a run applies
//! - `Diagnostic` - one finding produced by a rule
//! - `ValidationResult` - everything found for one document

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

/// Severity of a reported message.
///
/// Ordered from most severe to least severe:
/// `Error > Warning > Info`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A required field is missing; the document fails.
    Error,
    /// A recommended field is missing; advisory only.
    #[default]
    Warning,
    /// Progress and pass notices.
    Info,
}

impl Severity {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warning => 1,
            Self::Info => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so Error > Warning > Info
        other.rank().cmp(&self.rank())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Resource kinds with a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
    Pod,
    Deployment,
    Service,
    Ingress,
    PersistentVolume,
    PersistentVolumeClaim,
    StatefulSet,
    DaemonSet,
    StorageClass,
}

impl ResourceKind {
    /// Every supported kind, in the order `all` runs them.
    pub const ALL: [ResourceKind; 9] = [
        Self::Pod,
        Self::Deployment,
        Self::Service,
        Self::Ingress,
        Self::PersistentVolume,
        Self::PersistentVolumeClaim,
        Self::StatefulSet,
        Self::DaemonSet,
        Self::StorageClass,
    ];

    /// The canonical `kind` value as written in a manifest.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pod => "Pod",
            Self::Deployment => "Deployment",
            Self::Service => "Service",
            Self::Ingress => "Ingress",
            Self::PersistentVolume => "PersistentVolume",
            Self::PersistentVolumeClaim => "PersistentVolumeClaim",
            Self::StatefulSet => "StatefulSet",
            Self::DaemonSet => "DaemonSet",
            Self::StorageClass => "StorageClass",
        }
    }

    /// The shorthand accepted by `--type`.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::Pod => "po",
            Self::Deployment => "deploy",
            Self::Service => "svc",
            Self::Ingress => "ing",
            Self::PersistentVolume => "pv",
            Self::PersistentVolumeClaim => "pvc",
            Self::StatefulSet => "sts",
            Self::DaemonSet => "ds",
            Self::StorageClass => "sc",
        }
    }

    /// Match a manifest `kind` field. Case-sensitive.
    pub fn from_kind(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == kind)
    }

    /// Parse a `--type` selector: canonical name or alias, any case.
    pub fn from_selector(selector: &str) -> Option<Self> {
        let selector = selector.trim().to_lowercase();
        Self::ALL.into_iter().find(|k| {
            k.as_str().to_lowercase() == selector || k.alias() == selector
        })
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which rule sets a run applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    /// No selector: only the identity fields are checked.
    #[default]
    BaselineOnly,
    /// One kind; documents of other kinds are skipped.
    Kind(ResourceKind),
    /// Every rule set, each applied to the documents of its kind.
    All,
}

impl KindFilter {
    /// Parse a `--type` value. Returns `None` for an unknown selector.
    pub fn parse(selector: &str) -> Option<Self> {
        if selector.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        ResourceKind::from_selector(selector).map(Self::Kind)
    }

    /// The rule-set kind this filter applies to a document of `kind`.
    pub fn select(&self, kind: &str) -> Option<ResourceKind> {
        match self {
            Self::BaselineOnly => None,
            Self::Kind(k) => (k.as_str() == kind).then_some(*k),
            Self::All => ResourceKind::from_kind(kind),
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaselineOnly => write!(f, "baseline"),
            Self::Kind(k) => write!(f, "{}", k),
            Self::All => write!(f, "all"),
        }
    }
}

/// A single finding produced by a rule or structural check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// How a document was evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "kind")]
pub enum ResultStatus {
    /// `apiVersion`, `kind` or `metadata.name` is missing; nothing else ran.
    MissingIdentity,
    /// Identity fields present, no kind-specific rules requested.
    BaselineOnly,
    /// Checked against the rule set of this kind.
    Checked(ResourceKind),
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// File the document came from.
    pub source: PathBuf,
    /// 1-based position of the document within its file.
    pub doc_index: usize,
    /// The document's `kind`, or empty when missing.
    pub kind: String,
    /// `metadata.name`, when present.
    pub name: Option<String>,
    pub status: ResultStatus,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// True when `errors` is empty. Warnings never affect it.
    pub passed: bool,
}

impl ValidationResult {
    /// Build a result, splitting diagnostics by severity.
    pub fn new(
        source: impl Into<PathBuf>,
        doc_index: usize,
        kind: impl Into<String>,
        name: Option<String>,
        status: ResultStatus,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        for diag in diagnostics {
            match diag.severity {
                Severity::Error => errors.push(diag.message),
                Severity::Warning => warnings.push(diag.message),
                Severity::Info => {}
            }
        }
        let passed = errors.is_empty();

        Self {
            source: source.into(),
            doc_index,
            kind: kind.into(),
            name,
            status,
            errors,
            warnings,
            passed,
        }
    }

    /// `file (doc #n)` label used in every reported line.
    pub fn location(&self) -> String {
        format!("{} (doc #{})", self.source.display(), self.doc_index)
    }

    /// `Kind/name` when both are known.
    pub fn object_identifier(&self) -> String {
        match (&self.name, self.kind.is_empty()) {
            (Some(name), false) => format!("{}/{}", self.kind, name),
            (Some(name), true) => name.clone(),
            (None, false) => self.kind.clone(),
            (None, true) => "<unknown>".to_string(),
        }
    }
}
