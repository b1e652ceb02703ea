//! End-to-end tests of the `k8s-validate` binary.
//!
//! Every command runs inside an empty temp dir with HOME pointed at it so no
//! local or global config file is picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn k8s_validate(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("k8s-validate").unwrap();
    cmd.current_dir(sandbox.path())
        .env("HOME", sandbox.path())
        .env_remove("RUST_LOG");
    cmd
}

fn validate(sandbox: &TempDir, path: &PathBuf, extra: &[&str]) -> Command {
    let mut cmd = k8s_validate(sandbox);
    cmd.arg("validate")
        .arg("--path")
        .arg(path)
        .arg("--no-color")
        .args(extra);
    cmd
}

#[test]
fn test_multi_document_all_kinds_pass() {
    let sandbox = TempDir::new().unwrap();
    validate(&sandbox, &fixture("stack.yaml"), &["--type", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("YAML syntax OK (3 document(s))"))
        .stdout(predicate::str::contains(
            "(doc #1) PersistentVolume/data: validation passed, all required fields in PersistentVolume are present",
        ))
        .stdout(predicate::str::contains(
            "(doc #2) PersistentVolumeClaim/data-claim: validation passed",
        ))
        .stdout(predicate::str::contains("(doc #3) Deployment/web: validation passed"))
        .stdout(predicate::str::contains(
            "Validation complete. Total YAML documents checked: 3 (passed: 3, failed: 0, skipped: 0, syntax errors: 0)",
        ));
}

#[test]
fn test_single_kind_skips_other_documents() {
    let sandbox = TempDir::new().unwrap();
    validate(&sandbox, &fixture("stack.yaml"), &["--type", "pvc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PersistentVolumeClaim/data-claim: validation passed"))
        .stdout(predicate::str::contains("Deployment/web").not())
        .stdout(predicate::str::contains("(passed: 1, failed: 0, skipped: 2"));
}

#[test]
fn test_without_type_only_identity_is_checked() {
    let sandbox = TempDir::new().unwrap();
    validate(&sandbox, &fixture("service-missing-target-port.yaml"), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Service/web: apiVersion, kind and metadata.name are present",
        ))
        .stdout(predicate::str::contains("targetPort").not());
}

#[test]
fn test_service_missing_target_port_fails() {
    let sandbox = TempDir::new().unwrap();
    validate(
        &sandbox,
        &fixture("service-missing-target-port.yaml"),
        &["--type", "svc"],
    )
    .assert()
    .code(1)
    .stdout(predicate::str::contains(
        "Service/web: required field(s) targetPort missing from spec.ports[0] in Service",
    ))
    .stdout(predicate::str::contains(
        "Service/web: recommended field 'spec.sessionAffinity' is missing from Service",
    ))
    .stdout(predicate::str::contains("validation failed with 1 error(s)"));
}

#[test]
fn test_ingress_shorthand_port_warns() {
    let sandbox = TempDir::new().unwrap();
    validate(&sandbox, &fixture("ingress-shorthand-port.yaml"), &["--type", "ingress"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "service port in spec.rules[0].http.paths[0] is not a structured object; using shorthand format",
        ))
        .stdout(predicate::str::contains("Ingress/web: validation passed"));
}

#[test]
fn test_strict_mode_fails_on_warnings() {
    let sandbox = TempDir::new().unwrap();
    validate(
        &sandbox,
        &fixture("ingress-shorthand-port.yaml"),
        &["--type", "ingress", "--strict"],
    )
    .assert()
    .code(1);
}

#[test]
fn test_hide_warnings() {
    let sandbox = TempDir::new().unwrap();
    validate(
        &sandbox,
        &fixture("ingress-shorthand-port.yaml"),
        &["--type", "ingress", "--hide-warnings"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("[WARN]").not());
}

#[test]
fn test_missing_identity_does_not_stop_other_documents() {
    let sandbox = TempDir::new().unwrap();
    validate(&sandbox, &fixture("missing-identity.yaml"), &["--type", "pod"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "(doc #1) ConfigMap: missing required field(s): apiVersion, metadata.name",
        ))
        .stdout(predicate::str::contains("(doc #2) Pod/app: validation passed"));
}

#[test]
fn test_directory_with_syntax_error() {
    let sandbox = TempDir::new().unwrap();
    let manifests = sandbox.path().join("manifests");
    fs::create_dir(&manifests).unwrap();
    fs::copy(fixture("invalid.yaml"), manifests.join("a-invalid.yaml")).unwrap();
    fs::copy(fixture("stack.yaml"), manifests.join("b-stack.yml")).unwrap();
    fs::write(manifests.join("README.md"), "# not a manifest").unwrap();

    validate(&sandbox, &manifests, &["--type", "all"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("a-invalid.yaml: YAML syntax error"))
        .stdout(predicate::str::contains("b-stack.yml: YAML syntax OK (3 document(s))"))
        .stdout(predicate::str::contains("README.md").not())
        .stdout(predicate::str::contains(
            "(passed: 3, failed: 0, skipped: 0, syntax errors: 1)",
        ));
}

#[test]
fn test_empty_directory_has_no_documents() {
    let sandbox = TempDir::new().unwrap();
    let empty = sandbox.path().join("empty");
    fs::create_dir(&empty).unwrap();

    validate(&sandbox, &empty, &["--type", "all"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "No valid YAML documents found. Skipping K8s validation.",
        ))
        .stdout(predicate::str::contains("Total YAML documents checked: 0"));
}

#[test]
fn test_unsupported_type_is_fatal() {
    let sandbox = TempDir::new().unwrap();
    validate(&sandbox, &fixture("stack.yaml"), &["--type", "cronjob"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: unsupported resource type 'cronjob'"));
}

#[test]
fn test_missing_path_is_fatal() {
    let sandbox = TempDir::new().unwrap();
    let missing = sandbox.path().join("does-not-exist");
    validate(&sandbox, &missing, &[])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "provided path is neither a file nor a directory",
        ));
}

#[test]
fn test_json_output() {
    let sandbox = TempDir::new().unwrap();
    let output = validate(
        &sandbox,
        &fixture("service-missing-target-port.yaml"),
        &["--type", "all", "--format", "json"],
    )
    .assert()
    .code(1)
    .get_output()
    .stdout
    .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 1);
    assert_eq!(value["results"][0]["kind"], "Service");
    assert_eq!(value["results"][0]["passed"], false);
    assert_eq!(value["summary"]["failed_count"], 1);
    assert_eq!(value["summary"]["passed"], false);
    assert!(value["syntax_errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_local_config_file() {
    let sandbox = TempDir::new().unwrap();
    fs::write(
        sandbox.path().join(".k8s-validator.toml"),
        "[validation]\ntype = \"svc\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = validate(&sandbox, &fixture("service-missing-target-port.yaml"), &[])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["results"][0]["status"], "checked");
}

#[test]
fn test_invalid_explicit_config_is_fatal() {
    let sandbox = TempDir::new().unwrap();
    let config = sandbox.path().join("custom.toml");
    fs::write(&config, "[output]\nformat = 3\n").unwrap();

    k8s_validate(&sandbox)
        .arg("--config")
        .arg(&config)
        .arg("kinds")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn test_kinds_lists_supported_types() {
    let sandbox = TempDir::new().unwrap();
    k8s_validate(&sandbox)
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("PersistentVolumeClaim"))
        .stdout(predicate::str::contains("pvc"))
        .stdout(predicate::str::contains("ingress-backends"));
}
