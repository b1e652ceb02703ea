//! Nested-path lookup over a manifest tree.
//!
//! Every lookup is total: a missing key, a null, or an intermediate that is
//! not a mapping all yield `None` rather than an error.

use crate::validator::node::Node;
use std::fmt;

/// A dotted path of mapping keys, e.g. `spec.template.metadata.labels`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(pub &'static [&'static str]);

impl FieldPath {
    pub const fn new(segments: &'static [&'static str]) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &'static [&'static str] {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Walk `path` through nested mappings.
///
/// Returns `None` as soon as a key is missing, an intermediate is not a
/// mapping, or the final value is null. An empty path returns `node` itself
/// unless it is null.
pub fn get<'a>(node: &'a Node, path: &[&str]) -> Option<&'a Node> {
    let mut current = node;
    for key in path {
        current = current.child(key)?;
    }
    if current.is_null() { None } else { Some(current) }
}

/// Whether the value at `path` exists and is non-empty.
pub fn is_present(node: &Node, path: &[&str]) -> bool {
    get(node, path).is_some_and(Node::is_truthy)
}

/// String value at `path`, if it is a string scalar.
pub fn get_str<'a>(node: &'a Node, path: &[&str]) -> Option<&'a str> {
    get(node, path).and_then(Node::as_str)
}

/// Sequence at `path`. Anything that is not a sequence reads as empty.
pub fn get_seq<'a>(node: &'a Node, path: &[&str]) -> &'a [Node] {
    get(node, path).and_then(Node::as_sequence).unwrap_or(&[])
}
