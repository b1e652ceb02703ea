//! The validation engine.
//!
//! Each document is first held to the identity baseline. Documents that pass
//! it are matched to at most one rule set through the run's [`KindFilter`];
//! documents with no matching rule set are skipped and produce no result.

use crate::validator::formatter::Reporter;
use crate::validator::parser::ManifestDocument;
use crate::validator::rules::{self, check_identity};
use crate::validator::types::{Diagnostic, KindFilter, ResultStatus, ValidationResult};

/// Validate one document. `None` means the document was skipped.
pub fn validate_document(doc: &ManifestDocument, filter: KindFilter) -> Option<ValidationResult> {
    let result = |status: ResultStatus, diagnostics: Vec<Diagnostic>| {
        ValidationResult::new(
            doc.source.clone(),
            doc.doc_index,
            doc.kind_str(),
            doc.metadata_name.clone(),
            status,
            diagnostics,
        )
    };

    if let Some(diag) = check_identity(doc) {
        return Some(result(ResultStatus::MissingIdentity, vec![diag]));
    }

    if filter == KindFilter::BaselineOnly {
        return Some(result(ResultStatus::BaselineOnly, Vec::new()));
    }

    let kind = filter.select(doc.kind_str())?;
    let rule_set = rules::rule_set(kind)?;
    log::trace!(
        "{} (doc #{}): applying {} rules",
        doc.source.display(),
        doc.doc_index,
        kind
    );
    Some(result(ResultStatus::Checked(kind), rule_set.evaluate(&doc.tree)))
}

/// Validate every document, reporting each result as it is produced.
///
/// Results come back in input order.
pub fn validate(
    documents: &[ManifestDocument],
    filter: KindFilter,
    reporter: &mut dyn Reporter,
) -> Vec<ValidationResult> {
    let mut results = Vec::with_capacity(documents.len());

    for doc in documents {
        match validate_document(doc, filter) {
            Some(result) => {
                reporter.result(&result);
                results.push(result);
            }
            None => log::debug!(
                "{} (doc #{}): no {} rule set for kind '{}', skipped",
                doc.source.display(),
                doc.doc_index,
                filter,
                doc.kind_str()
            ),
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::formatter::testing::RecordingReporter;
    use crate::validator::parser::parse_documents;
    use crate::validator::types::ResourceKind;
    use std::path::Path;

    const STACK: &str = r#"
apiVersion: v1
kind: PersistentVolume
metadata:
  name: data
spec:
  capacity:
    storage: 10Gi
  accessModes: [ReadWriteOnce]
  storageClassName: standard
---
apiVersion: v1
kind: PersistentVolumeClaim
metadata:
  name: data-claim
spec:
  accessModes: [ReadWriteOnce]
  storageClassName: standard
  resources:
    requests:
      storage: 10Gi
---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
spec:
  replicas: 2
  selector:
    matchLabels: {app: web}
  template:
    metadata:
      labels: {app: web}
    spec:
      containers:
        - name: web
          image: nginx:1.27
"#;

    fn docs(yaml: &str) -> Vec<ManifestDocument> {
        parse_documents(yaml, Path::new("stack.yaml")).unwrap()
    }

    #[test]
    fn test_all_yields_one_result_per_document() {
        let documents = docs(STACK);
        let mut reporter = RecordingReporter::default();
        let results = validate(&documents, KindFilter::All, &mut reporter);

        assert_eq!(results.len(), 3);
        assert_eq!(
            results.iter().map(|r| r.status).collect::<Vec<_>>(),
            vec![
                ResultStatus::Checked(ResourceKind::PersistentVolume),
                ResultStatus::Checked(ResourceKind::PersistentVolumeClaim),
                ResultStatus::Checked(ResourceKind::Deployment),
            ]
        );
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(reporter.results.len(), 3);
    }

    #[test]
    fn test_single_kind_skips_other_kinds() {
        let documents = docs(STACK);
        let mut reporter = RecordingReporter::default();
        let results = validate(
            &documents,
            KindFilter::Kind(ResourceKind::PersistentVolumeClaim),
            &mut reporter,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].doc_index, 2);
        assert_eq!(results[0].name.as_deref(), Some("data-claim"));
    }

    #[test]
    fn test_missing_identity_stops_kind_checks() {
        let documents = docs("kind: Deployment\nspec: {}\n");
        let result = validate_document(&documents[0], KindFilter::All).unwrap();
        assert_eq!(result.status, ResultStatus::MissingIdentity);
        assert!(!result.passed);
        assert_eq!(
            result.errors,
            vec!["missing required field(s): apiVersion, metadata.name"]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_identity_reported_for_non_matching_kind() {
        let documents = docs("apiVersion: v1\nkind: ConfigMap\n");
        let result =
            validate_document(&documents[0], KindFilter::Kind(ResourceKind::Pod)).unwrap();
        assert_eq!(result.status, ResultStatus::MissingIdentity);
    }

    #[test]
    fn test_baseline_only_checks_identity() {
        let documents = docs("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: settings\n");
        let result = validate_document(&documents[0], KindFilter::BaselineOnly).unwrap();
        assert_eq!(result.status, ResultStatus::BaselineOnly);
        assert!(result.passed);
        assert!(result.errors.is_empty() && result.warnings.is_empty());
    }

    #[test]
    fn test_unsupported_kind_is_skipped_under_all() {
        let documents = docs("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: settings\n");
        assert!(validate_document(&documents[0], KindFilter::All).is_none());
    }

    #[test]
    fn test_passed_is_fresh_per_document() {
        let yaml = r#"
apiVersion: v1
kind: Pod
metadata:
  name: broken
spec:
  containers: []
---
apiVersion: v1
kind: Pod
metadata:
  name: fine
spec:
  containers:
    - name: app
      image: busybox
"#;
        let documents = docs(yaml);
        let mut reporter = RecordingReporter::default();
        let results = validate(&documents, KindFilter::Kind(ResourceKind::Pod), &mut reporter);
        assert!(!results[0].passed);
        assert!(results[1].passed);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let documents = docs(STACK);
        let first = validate(&documents, KindFilter::All, &mut RecordingReporter::default());
        let second = validate(&documents, KindFilter::All, &mut RecordingReporter::default());
        assert_eq!(first, second);
    }
}
