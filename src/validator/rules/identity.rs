//! Baseline identity check applied to every document.

use crate::validator::accessor;
use crate::validator::parser::ManifestDocument;
use crate::validator::types::Diagnostic;

/// Fields every Kubernetes object must carry.
const IDENTITY_FIELDS: &[(&str, &[&str])] = &[
    ("apiVersion", &["apiVersion"]),
    ("kind", &["kind"]),
    ("metadata.name", &["metadata", "name"]),
];

/// An error when `apiVersion`, `kind` or `metadata.name` is missing or empty.
pub fn check_identity(doc: &ManifestDocument) -> Option<Diagnostic> {
    if doc.tree.as_mapping().is_none_or(|map| map.is_empty()) {
        return Some(Diagnostic::error(
            "document is empty or not a mapping; apiVersion, kind and metadata.name are required",
        ));
    }

    // Presence, not type: `name: 123` is present like any other required field.
    let missing: Vec<&str> = IDENTITY_FIELDS
        .iter()
        .filter(|(_, path)| !accessor::is_present(&doc.tree, path))
        .map(|(field, _)| *field)
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(Diagnostic::error(format!(
            "missing required field(s): {}",
            missing.join(", ")
        )))
    }
}
