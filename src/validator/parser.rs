//! YAML parsing for Kubernetes manifests.
//!
//! A file is a YAML stream of one or more `---`-separated documents. Parsing
//! is all-or-nothing per file: one malformed document makes the whole file a
//! syntax error and contributes no documents.

use crate::validator::accessor;
use crate::validator::node::Node;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-file load failures. Recorded and reported, never fatal for a run.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("YAML syntax error: {0}")]
    Syntax(String),

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// One document of a manifest file.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    /// File the document was read from.
    pub source: PathBuf,
    /// 1-based index of the document within its file.
    pub doc_index: usize,
    pub kind: Option<String>,
    pub api_version: Option<String>,
    pub metadata_name: Option<String>,
    pub tree: Node,
}

impl ManifestDocument {
    pub fn new(source: impl Into<PathBuf>, doc_index: usize, tree: Node) -> Self {
        let non_empty = |path: &[&str]| {
            accessor::get_str(&tree, path)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let kind = non_empty(&["kind"]);
        let api_version = non_empty(&["apiVersion"]);
        let metadata_name = non_empty(&["metadata", "name"]);

        Self {
            source: source.into(),
            doc_index,
            kind,
            api_version,
            metadata_name,
            tree,
        }
    }

    /// `kind` as written, or empty when missing.
    pub fn kind_str(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }
}

/// Parse a YAML stream into documents tagged with `path`.
pub fn parse_documents(content: &str, path: &Path) -> Result<Vec<ManifestDocument>, ParseError> {
    let mut documents = Vec::new();

    for (index, de) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let value = serde_yaml::Value::deserialize(de)
            .map_err(|e| ParseError::Syntax(e.to_string()))?;
        documents.push(ManifestDocument::new(path, index + 1, Node::from(value)));
    }

    Ok(documents)
}

/// Read and parse a manifest file.
pub fn parse_file(path: &Path) -> Result<Vec<ManifestDocument>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let documents = parse_documents(&content, path)?;
    log::debug!("parsed {} document(s) from {}", documents.len(), path.display());
    Ok(documents)
}
