//! Rule sets for Service and Ingress.

use crate::validator::accessor;
use crate::validator::node::Node;
use crate::validator::rules::{RuleSet, StructuralCheck};
use crate::validator::types::{Diagnostic, ResourceKind};

pub fn service_rules() -> RuleSet {
    RuleSet::new(ResourceKind::Service)
        .require(&[&["spec", "selector"]])
        .with_check(ServicePortsCheck)
        .recommend(&[
            &["spec", "type"],
            &["spec", "sessionAffinity"],
            &["spec", "externalTrafficPolicy"],
        ])
}

pub fn ingress_rules() -> RuleSet {
    RuleSet::new(ResourceKind::Ingress)
        .with_check(IngressBackendCheck)
        .recommend(&[&["metadata", "annotations"], &["spec", "tls"]])
}

/// `spec.ports` must be non-empty and every entry needs `port` and `targetPort`.
pub struct ServicePortsCheck;

impl StructuralCheck for ServicePortsCheck {
    fn name(&self) -> &'static str {
        "service-ports"
    }

    fn check(&self, kind: ResourceKind, tree: &Node) -> Vec<Diagnostic> {
        let ports = accessor::get_seq(tree, &["spec", "ports"]);
        if ports.is_empty() {
            return vec![Diagnostic::error(format!(
                "required field 'spec.ports' is missing or empty; {} must have ports with port and targetPort",
                kind
            ))];
        }

        ports
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                let missing: Vec<&str> = ["port", "targetPort"]
                    .into_iter()
                    .filter(|field| !accessor::is_present(entry, &[*field]))
                    .collect();
                (!missing.is_empty()).then(|| {
                    Diagnostic::error(format!(
                        "required field(s) {} missing from spec.ports[{}] in {}",
                        missing.join(", "),
                        i,
                        kind
                    ))
                })
            })
            .collect()
    }
}

/// How an ingress backend names its service port.
#[derive(Debug, PartialEq)]
enum PortRef<'a> {
    /// `port: {number: 80}`
    Structured(&'a Node),
    /// `port: 80`
    Shorthand(&'a Node),
    /// Missing, empty, or a mapping without `number`.
    Unresolved,
}

impl PortRef<'_> {
    fn resolve(port: Option<&Node>) -> PortRef<'_> {
        match port {
            Some(node @ Node::Mapping(_)) => match accessor::get(node, &["number"]) {
                Some(number) if number.is_truthy() => PortRef::Structured(number),
                _ => PortRef::Unresolved,
            },
            Some(node @ Node::Scalar(scalar)) if scalar.is_truthy() => PortRef::Shorthand(node),
            _ => PortRef::Unresolved,
        }
    }

    fn is_resolved(&self) -> bool {
        !matches!(self, PortRef::Unresolved)
    }
}

/// Walks rules → paths → backends.
///
/// An empty `spec.rules` ends the check. Otherwise every rule and every path
/// is checked on its own so one bad entry does not hide the rest.
pub struct IngressBackendCheck;

impl IngressBackendCheck {
    fn check_path(at: &str, path: &Node, diagnostics: &mut Vec<Diagnostic>) {
        let Some(backend) = accessor::get(path, &["backend"]).filter(|b| b.is_truthy()) else {
            diagnostics.push(Diagnostic::error(format!(
                "required field 'backend' is missing from {}",
                at
            )));
            return;
        };

        let Some(service) = accessor::get(backend, &["service"]).filter(|s| s.is_truthy()) else {
            diagnostics.push(Diagnostic::error(format!(
                "required field 'backend.service' is missing from {}",
                at
            )));
            return;
        };

        let port = PortRef::resolve(service.child("port"));
        if let PortRef::Shorthand(_) = port {
            diagnostics.push(Diagnostic::warning(format!(
                "service port in {} is not a structured object; using shorthand format",
                at
            )));
        }

        let mut missing = Vec::new();
        if !accessor::is_present(path, &["pathType"]) {
            missing.push("pathType");
        }
        if !accessor::is_present(service, &["name"]) {
            missing.push("backend.service.name");
        }
        if !port.is_resolved() {
            missing.push("backend.service.port.number");
        }

        if !missing.is_empty() {
            diagnostics.push(Diagnostic::error(format!(
                "required field(s) {} missing from {}",
                missing.join(", "),
                at
            )));
        }
    }
}

impl StructuralCheck for IngressBackendCheck {
    fn name(&self) -> &'static str {
        "ingress-backends"
    }

    fn check(&self, kind: ResourceKind, tree: &Node) -> Vec<Diagnostic> {
        let rules = accessor::get_seq(tree, &["spec", "rules"]);
        if rules.is_empty() {
            return vec![Diagnostic::error(format!(
                "required field 'spec.rules' is missing or empty in {}",
                kind
            ))];
        }

        let mut diagnostics = Vec::new();
        for (r, rule) in rules.iter().enumerate() {
            let paths = accessor::get_seq(rule, &["http", "paths"]);
            if paths.is_empty() {
                diagnostics.push(Diagnostic::error(format!(
                    "required field 'http.paths' is missing or empty in spec.rules[{}]",
                    r
                )));
                continue;
            }

            for (p, path) in paths.iter().enumerate() {
                let at = format!("spec.rules[{}].http.paths[{}]", r, p);
                Self::check_path(&at, path, &mut diagnostics);
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::node::Scalar;
    use crate::validator::types::Severity;

    fn tree(yaml: &str) -> Node {
        Node::from(serde_yaml::from_str::<serde_yaml::Value>(yaml).unwrap())
    }

    fn split(diags: Vec<Diagnostic>) -> (Vec<String>, Vec<String>) {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            diags.into_iter().partition(|d| d.severity == Severity::Error);
        (
            errors.into_iter().map(|d| d.message).collect(),
            warnings.into_iter().map(|d| d.message).collect(),
        )
    }

    #[test]
    fn test_service_port_missing_target_port() {
        let node = tree("spec:\n  selector: {app: web}\n  ports:\n    - port: 80\n");
        let (errors, _) = split(service_rules().evaluate(&node));
        assert_eq!(
            errors,
            vec!["required field(s) targetPort missing from spec.ports[0] in Service"]
        );
    }

    #[test]
    fn test_service_without_ports_or_selector() {
        let node = tree("spec:\n  type: ClusterIP\n");
        let (errors, warnings) = split(service_rules().evaluate(&node));
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("'spec.selector'"));
        assert!(errors[1].contains("'spec.ports' is missing or empty"));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_service_complete() {
        let node = tree(
            r#"
spec:
  type: LoadBalancer
  sessionAffinity: ClientIP
  externalTrafficPolicy: Local
  selector: {app: web}
  ports:
    - port: 80
      targetPort: http
    - port: 443
      targetPort: 8443
"#,
        );
        let (errors, warnings) = split(service_rules().evaluate(&node));
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_bare_ingress_recommended_paths() {
        let node = tree("spec: {}\n");
        let (_, warnings) = split(ingress_rules().evaluate(&node));
        assert_eq!(
            warnings,
            vec![
                "recommended field 'metadata.annotations' is missing from Ingress",
                "recommended field 'spec.tls' is missing from Ingress",
            ]
        );
    }

    #[test]
    fn test_ingress_structured_port_passes() {
        let node = tree(
            r#"
spec:
  rules:
    - http:
        paths:
          - pathType: Prefix
            backend:
              service:
                name: svc
                port:
                  number: 80
"#,
        );
        let (errors, warnings) = split(IngressBackendCheck.check(ResourceKind::Ingress, &node));
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_ingress_shorthand_port_warns_once() {
        let node = tree(
            r#"
spec:
  rules:
    - http:
        paths:
          - pathType: Prefix
            backend:
              service:
                name: svc
                port: 80
"#,
        );
        let (errors, warnings) = split(IngressBackendCheck.check(ResourceKind::Ingress, &node));
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("shorthand format"));
    }

    #[test]
    fn test_ingress_without_rules() {
        let node = tree("spec: {}\n");
        let (errors, _) = split(IngressBackendCheck.check(ResourceKind::Ingress, &node));
        assert_eq!(errors, vec!["required field 'spec.rules' is missing or empty in Ingress"]);
    }

    #[test]
    fn test_ingress_continues_after_failures() {
        let node = tree(
            r#"
spec:
  rules:
    - host: a.example.com
    - http:
        paths:
          - pathType: Prefix
          - pathType: Exact
            backend:
              resource: {kind: Bucket, name: assets}
          - backend:
              service:
                name: svc
                port:
                  name: http
          - pathType: Prefix
            backend:
              service:
                name: ok
                port: {number: 8080}
"#,
        );
        let (errors, warnings) = split(IngressBackendCheck.check(ResourceKind::Ingress, &node));
        assert_eq!(
            errors,
            vec![
                "required field 'http.paths' is missing or empty in spec.rules[0]",
                "required field 'backend' is missing from spec.rules[1].http.paths[0]",
                "required field 'backend.service' is missing from spec.rules[1].http.paths[1]",
                "required field(s) pathType, backend.service.port.number missing from spec.rules[1].http.paths[2]",
            ]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_port_resolution() {
        let mapping = tree("number: 80\n");
        assert_eq!(
            PortRef::resolve(Some(&mapping)),
            PortRef::Structured(&Node::Scalar(Scalar::Int(80)))
        );

        let scalar = Node::Scalar(Scalar::String("http".to_string()));
        assert_eq!(PortRef::resolve(Some(&scalar)), PortRef::Shorthand(&scalar));

        let named = tree("name: http\n");
        assert_eq!(PortRef::resolve(Some(&named)), PortRef::Unresolved);
        assert_eq!(PortRef::resolve(Some(&Node::Null)), PortRef::Unresolved);
        assert_eq!(PortRef::resolve(None), PortRef::Unresolved);
    }
}
