//! Rule sets for pod-bearing kinds: Pod, Deployment, StatefulSet, DaemonSet.
//!
//! A Pod carries its pod spec at `spec`; the controllers carry it at
//! `spec.template.spec`. Container checks are parameterized by that root.

use crate::validator::accessor::{self, FieldPath};
use crate::validator::node::Node;
use crate::validator::rules::{RuleSet, StructuralCheck};
use crate::validator::types::{Diagnostic, ResourceKind};

const POD_SPEC: &[&str] = &["spec"];
const TEMPLATE_POD_SPEC: &[&str] = &["spec", "template", "spec"];

const REPLICAS: &[&str] = &["spec", "replicas"];
const SELECTOR_MATCH_LABELS: &[&str] = &["spec", "selector", "matchLabels"];
const TEMPLATE_LABELS: &[&str] = &["spec", "template", "metadata", "labels"];
const SERVICE_NAME: &[&str] = &["spec", "serviceName"];

const STRATEGY: &[&str] = &["spec", "strategy"];
const UPDATE_STRATEGY: &[&str] = &["spec", "updateStrategy"];
const VOLUME_CLAIM_TEMPLATES: &[&str] = &["spec", "volumeClaimTemplates"];
const POD_MANAGEMENT_POLICY: &[&str] = &["spec", "podManagementPolicy"];

const POD_RECOMMENDED: &[&[&str]] = &[
    &["spec", "securityContext"],
    &["spec", "tolerations"],
    &["spec", "nodeSelector"],
    &["spec", "restartPolicy"],
];

const TEMPLATE_RECOMMENDED: &[&[&str]] = &[
    &["spec", "template", "spec", "securityContext"],
    &["spec", "template", "spec", "tolerations"],
    &["spec", "template", "spec", "nodeSelector"],
    &["spec", "template", "spec", "restartPolicy"],
];

pub fn pod_rules() -> RuleSet {
    RuleSet::new(ResourceKind::Pod)
        .with_check(ContainerFieldsCheck::new(POD_SPEC))
        .with_check(ContainerResourcesCheck::new(POD_SPEC))
        .recommend(POD_RECOMMENDED)
}

pub fn deployment_rules() -> RuleSet {
    RuleSet::new(ResourceKind::Deployment)
        .require(&[REPLICAS, SELECTOR_MATCH_LABELS, TEMPLATE_LABELS])
        .with_check(ContainerFieldsCheck::new(TEMPLATE_POD_SPEC))
        .with_check(ContainerResourcesCheck::new(TEMPLATE_POD_SPEC))
        .recommend(&[STRATEGY])
        .recommend(TEMPLATE_RECOMMENDED)
}

pub fn statefulset_rules() -> RuleSet {
    RuleSet::new(ResourceKind::StatefulSet)
        .require(&[REPLICAS, SERVICE_NAME, SELECTOR_MATCH_LABELS, TEMPLATE_LABELS])
        .with_check(ContainerFieldsCheck::new(TEMPLATE_POD_SPEC))
        .with_check(ContainerResourcesCheck::new(TEMPLATE_POD_SPEC))
        .recommend(&[VOLUME_CLAIM_TEMPLATES, POD_MANAGEMENT_POLICY, UPDATE_STRATEGY])
        .recommend(TEMPLATE_RECOMMENDED)
}

pub fn daemonset_rules() -> RuleSet {
    RuleSet::new(ResourceKind::DaemonSet)
        .require(&[SELECTOR_MATCH_LABELS, TEMPLATE_LABELS])
        .with_check(ContainerFieldsCheck::new(TEMPLATE_POD_SPEC))
        .with_check(ContainerResourcesCheck::new(TEMPLATE_POD_SPEC))
        .recommend(&[UPDATE_STRATEGY])
        .recommend(TEMPLATE_RECOMMENDED)
}

/// Containers under a pod spec, and the dotted path they were read from.
fn containers<'a>(pod_spec: &'static [&'static str], tree: &'a Node) -> (String, &'a [Node]) {
    let mut path = pod_spec.to_vec();
    path.push("containers");
    (path.join("."), accessor::get_seq(tree, &path))
}

/// `container 'web'` or `container #2` when it has no name.
fn container_label(index: usize, container: &Node) -> String {
    match accessor::get_str(container, &["name"]).filter(|n| !n.is_empty()) {
        Some(name) => format!("container '{}'", name),
        None => format!("container #{}", index + 1),
    }
}

/// Every container must have a `name` and an `image`, and there must be at
/// least one container.
pub struct ContainerFieldsCheck {
    pod_spec: FieldPath,
}

impl ContainerFieldsCheck {
    pub fn new(pod_spec: &'static [&'static str]) -> Self {
        Self {
            pod_spec: FieldPath::new(pod_spec),
        }
    }
}

impl StructuralCheck for ContainerFieldsCheck {
    fn name(&self) -> &'static str {
        "container-name-image"
    }

    fn check(&self, kind: ResourceKind, tree: &Node) -> Vec<Diagnostic> {
        let (path, containers) = containers(self.pod_spec.segments(), tree);

        if containers.is_empty() {
            return vec![Diagnostic::error(format!(
                "required field '{}' is missing or empty; {} must have containers with name and image",
                path, kind
            ))];
        }

        containers
            .iter()
            .enumerate()
            .filter_map(|(i, container)| {
                let missing: Vec<&str> = ["name", "image"]
                    .into_iter()
                    .filter(|field| !accessor::is_present(container, &[*field]))
                    .collect();
                if missing.is_empty() {
                    return None;
                }
                Some(Diagnostic::error(format!(
                    "required field(s) {} missing from {} in {}",
                    missing.join(", "),
                    container_label(i, container),
                    kind
                )))
            })
            .collect()
    }
}

/// Recommends `resources.requests` and `resources.limits` on every container.
///
/// Presence only; quantity strings are not parsed.
pub struct ContainerResourcesCheck {
    pod_spec: FieldPath,
}

impl ContainerResourcesCheck {
    pub fn new(pod_spec: &'static [&'static str]) -> Self {
        Self {
            pod_spec: FieldPath::new(pod_spec),
        }
    }
}

impl StructuralCheck for ContainerResourcesCheck {
    fn name(&self) -> &'static str {
        "container-resources"
    }

    fn check(&self, kind: ResourceKind, tree: &Node) -> Vec<Diagnostic> {
        let (_, containers) = containers(self.pod_spec.segments(), tree);
        let mut diagnostics = Vec::new();

        for (i, container) in containers.iter().enumerate() {
            for field in ["requests", "limits"] {
                if !accessor::is_present(container, &["resources", field]) {
                    diagnostics.push(Diagnostic::warning(format!(
                        "recommended field 'resources.{}' is missing from {} in {}",
                        field,
                        container_label(i, container),
                        kind
                    )));
                }
            }
        }

        diagnostics
    }
}
