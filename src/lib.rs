//! # k8s-yaml-validator
//!
//! Validates Kubernetes manifest files (single- or multi-document YAML)
//! against per-kind field rules. Missing required fields are errors, missing
//! recommended fields are warnings.
//!
//! ## Example
//!
//! ```rust,no_run
//! use k8s_yaml_validator::validator::{self, formatter::{plain::PlainReporter, ReportOptions}, RunOptions, KindFilter};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut reporter = PlainReporter::new(std::io::stdout(), ReportOptions::default());
//! let summary = validator::run(Path::new("./k8s"), &RunOptions::new(KindFilter::All), &mut reporter)?;
//! std::process::exit(summary.exit_code(false));
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod validator;

// Re-export commonly used types and functions
pub use error::{ConfigError, Result, ValidatorError};
pub use handlers::*;
use cli::Commands;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status for invocation-level failures.
pub const EXIT_FATAL: i32 = 2;

/// Run a parsed command and return its exit status.
pub fn run_command(command: Commands, config: &config::types::Config) -> Result<i32> {
    match command {
        Commands::Validate {
            path,
            kind,
            format,
            strict,
            no_color,
            hide_warnings,
        } => handlers::handle_validate(
            ValidateOptions {
                path,
                kind,
                format: format.map(Into::into),
                strict,
                no_color,
                hide_warnings,
            },
            config,
        ),
        Commands::Kinds => handlers::handle_kinds(),
    }
}
