//! Per-kind rule sets.
//!
//! A [`RuleSet`] bundles the declarative field rules for one kind with the
//! structural checks that need to iterate lists (containers, ports, ingress
//! paths). Rule sets are built once and are read-only afterwards.

pub mod identity;
pub mod networking;
pub mod storage;
pub mod workloads;

use crate::validator::accessor::{self, FieldPath};
use crate::validator::node::Node;
use crate::validator::types::{Diagnostic, ResourceKind, Severity};
use std::fmt;
use std::sync::OnceLock;

pub use identity::check_identity;

/// Whether a missing field fails the document or only warns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Recommended,
}

impl Requirement {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Required => Severity::Error,
            Self::Recommended => Severity::Warning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Recommended => "recommended",
        }
    }
}

/// A single field whose presence is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub path: FieldPath,
    pub requirement: Requirement,
}

impl FieldRule {
    pub const fn required(path: &'static [&'static str]) -> Self {
        Self {
            path: FieldPath::new(path),
            requirement: Requirement::Required,
        }
    }

    pub const fn recommended(path: &'static [&'static str]) -> Self {
        Self {
            path: FieldPath::new(path),
            requirement: Requirement::Recommended,
        }
    }

    /// A diagnostic when the field is absent or empty.
    pub fn evaluate(&self, kind: ResourceKind, tree: &Node) -> Option<Diagnostic> {
        if accessor::is_present(tree, self.path.segments()) {
            return None;
        }
        Some(Diagnostic {
            severity: self.requirement.severity(),
            message: format!(
                "{} field '{}' is missing from {}",
                self.requirement.as_str(),
                self.path,
                kind
            ),
        })
    }
}

/// A check over structure the field rules cannot express.
pub trait StructuralCheck: Send + Sync {
    /// Short identifier, used in debug logging.
    fn name(&self) -> &'static str;

    /// Run the check on a document tree and return any diagnostics.
    fn check(&self, kind: ResourceKind, tree: &Node) -> Vec<Diagnostic>;
}

/// All rules for one kind.
pub struct RuleSet {
    pub kind: ResourceKind,
    pub required: Vec<FieldRule>,
    pub recommended: Vec<FieldRule>,
    pub structural_checks: Vec<Box<dyn StructuralCheck>>,
}

impl RuleSet {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            required: Vec::new(),
            recommended: Vec::new(),
            structural_checks: Vec::new(),
        }
    }

    pub fn require(mut self, paths: &[&'static [&'static str]]) -> Self {
        self.required.extend(paths.iter().copied().map(FieldRule::required));
        self
    }

    pub fn recommend(mut self, paths: &[&'static [&'static str]]) -> Self {
        self.recommended.extend(paths.iter().copied().map(FieldRule::recommended));
        self
    }

    pub fn with_check(mut self, check: impl StructuralCheck + 'static) -> Self {
        self.structural_checks.push(Box::new(check));
        self
    }

    /// Run every rule against `tree`.
    ///
    /// All violations are collected; no check stops the ones after it.
    pub fn evaluate(&self, tree: &Node) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = self
            .required
            .iter()
            .filter_map(|rule| rule.evaluate(self.kind, tree))
            .collect();

        for check in &self.structural_checks {
            let found = check.check(self.kind, tree);
            log::trace!("{} check '{}': {} finding(s)", self.kind, check.name(), found.len());
            diagnostics.extend(found);
        }

        diagnostics.extend(
            self.recommended
                .iter()
                .filter_map(|rule| rule.evaluate(self.kind, tree)),
        );

        diagnostics
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checks: Vec<&str> = self.structural_checks.iter().map(|c| c.name()).collect();
        f.debug_struct("RuleSet")
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("recommended", &self.recommended)
            .field("structural_checks", &checks)
            .finish()
    }
}

static REGISTRY: OnceLock<Vec<RuleSet>> = OnceLock::new();

/// Every rule set, in `ResourceKind::ALL` order.
pub fn registry() -> &'static [RuleSet] {
    REGISTRY.get_or_init(|| {
        ResourceKind::ALL
            .into_iter()
            .map(|kind| match kind {
                ResourceKind::Pod => workloads::pod_rules(),
                ResourceKind::Deployment => workloads::deployment_rules(),
                ResourceKind::StatefulSet => workloads::statefulset_rules(),
                ResourceKind::DaemonSet => workloads::daemonset_rules(),
                ResourceKind::Service => networking::service_rules(),
                ResourceKind::Ingress => networking::ingress_rules(),
                ResourceKind::PersistentVolume => storage::persistent_volume_rules(),
                ResourceKind::PersistentVolumeClaim => storage::persistent_volume_claim_rules(),
                ResourceKind::StorageClass => storage::storage_class_rules(),
            })
            .collect()
    })
}

/// The rule set for `kind`.
pub fn rule_set(kind: ResourceKind) -> Option<&'static RuleSet> {
    registry().iter().find(|rs| rs.kind == kind)
}
