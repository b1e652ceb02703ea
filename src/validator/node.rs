//! Generic manifest tree.
//!
//! A `Node` is what a parsed YAML document looks like once the YAML library
//! is done with it: mappings, sequences and scalars, nothing Kubernetes
//! specific. Rules only ever look at it through [`crate::validator::accessor`].

use std::collections::BTreeMap;
use std::fmt;

/// A scalar leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Scalars follow YAML/Python falsiness: `false`, `0`, `0.0` and `""` are empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

/// One node of a manifest tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Scalar(Scalar),
    Sequence(Vec<Node>),
    Mapping(BTreeMap<String, Node>),
}

impl Node {
    /// Whether this node counts as "present" for a field check.
    ///
    /// Null, empty collections and falsy scalars all read as absent.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Scalar(s) => s.is_truthy(),
            Self::Sequence(items) => !items.is_empty(),
            Self::Mapping(map) => !map.is_empty(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Direct child lookup on a mapping. Any other node has no children.
    pub fn child(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|map| map.get(key))
    }
}

impl From<serde_yaml::Value> for Node {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Scalar(Scalar::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Self::Scalar(Scalar::Int(i64::try_from(u).unwrap_or(i64::MAX)))
                } else {
                    Self::Scalar(Scalar::Float(n.as_f64().unwrap_or_default()))
                }
            }
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Sequence(items) => Self::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Mapping(mapping) => {
                let mut map = BTreeMap::new();
                for (k, v) in mapping {
                    if let Some(key) = mapping_key(&k) {
                        map.insert(key, Node::from(v));
                    }
                }
                Self::Mapping(map)
            }
            Value::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

/// Render a YAML mapping key as a string. Collection keys are dropped.
fn mapping_key(key: &serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Tagged(tagged) => mapping_key(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
