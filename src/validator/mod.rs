//! Kubernetes manifest validation.
//!
//! Every document must carry `apiVersion`, `kind` and `metadata.name`.
//! Documents of a supported kind can additionally be held to that kind's
//! rule set: required fields are errors when absent, recommended fields are
//! warnings.
//!
//! # Supported kinds
//!
//! | Kind | Alias |
//! |------|-------|
//! | Pod | `po` |
//! | Deployment | `deploy` |
//! | Service | `svc` |
//! | Ingress | `ing` |
//! | PersistentVolume | `pv` |
//! | PersistentVolumeClaim | `pvc` |
//! | StatefulSet | `sts` |
//! | DaemonSet | `ds` |
//! | StorageClass | `sc` |
//!
//! # Example
//!
//! ```rust,no_run
//! use k8s_yaml_validator::validator::{validate_content, KindFilter};
//! use std::path::Path;
//!
//! let yaml = std::fs::read_to_string("deployment.yaml").unwrap();
//! let results = validate_content(&yaml, Path::new("deployment.yaml"), KindFilter::All).unwrap();
//!
//! for result in results {
//!     for error in &result.errors {
//!         println!("{} {}: {}", result.location(), result.object_identifier(), error);
//!     }
//! }
//! ```

pub mod accessor;
pub mod discovery;
pub mod engine;
pub mod formatter;
pub mod lint;
pub mod node;
pub mod parser;
pub mod rules;
pub mod summary;
pub mod types;

pub use formatter::{OutputFormat, ReportOptions, Reporter};
pub use lint::{parse_filter, run, validate_content, RunOptions};
pub use summary::RunSummary;
pub use types::{Diagnostic, KindFilter, ResourceKind, ResultStatus, Severity, ValidationResult};
