use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub validation: ValidationConfig,
    pub output: OutputConfig,
}

/// Validation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Default resource-type selector when `--type` is not given
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Warnings make the exit status non-zero
    pub strict: bool,
    /// Glob patterns of manifest files to skip
    pub ignore_paths: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// `plain` or `json`
    pub format: String,
    pub color: bool,
    pub show_warnings: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "plain".to_string(),
            color: true,
            show_warnings: true,
        }
    }
}
