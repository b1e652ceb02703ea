pub mod types;

use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".k8s-validator.toml";

/// Get the global config file path (~/.k8s-validator.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (./.k8s-validator.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Read and parse one config file.
pub fn read_config(path: &Path) -> Result<types::Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration.
///
/// An explicit file must exist and parse. Otherwise the local config is
/// tried first, then the global one, then defaults; implicit files that
/// fail to load are skipped with a warning.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config, ConfigError> {
    if let Some(path) = explicit {
        log::debug!("loading config from {}", path.display());
        return read_config(path);
    }

    let candidates = std::env::current_dir()
        .ok()
        .map(|dir| local_config_path(&dir))
        .into_iter()
        .chain(global_config_path());

    for path in candidates {
        if !path.is_file() {
            continue;
        }
        match read_config(&path) {
            Ok(config) => {
                log::debug!("loaded config from {}", path.display());
                return Ok(config);
            }
            Err(e) => log::warn!("{}; using defaults", e),
        }
    }

    Ok(types::Config::default())
}
