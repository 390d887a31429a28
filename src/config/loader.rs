//! Configuration file discovery and loading.
//!
//! Built-in defaults form the base layer; project files are merged on top
//! in priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::ChecklistConfig;
use crate::error::{PredeployError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding predeploy's own configuration.
pub const CONFIG_DIR: &str = ".predeploy";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Built-in defaults
/// 2. Project config (`.predeploy/config.yml`)
/// 3. Local overrides (`.predeploy/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .predeploy/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .predeploy/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a config file as a raw YAML value (for merging).
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PredeployError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PredeployError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| PredeployError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the checklist for a project.
///
/// With `config_override`, only that file is layered over the defaults and
/// it must exist. Otherwise discovered project files are layered in order;
/// having none is fine.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ChecklistConfig> {
    let files: Vec<PathBuf> = match config_override {
        Some(path) => vec![path.to_path_buf()],
        None => ConfigPaths::discover(project_root)
            .all_existing()
            .into_iter()
            .cloned()
            .collect(),
    };

    let defaults = serde_yaml::to_value(ChecklistConfig::default())
        .map_err(|e| PredeployError::Other(e.into()))?;
    let mut layers = vec![defaults];
    for path in &files {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    let merged = merge_configs(&layers);

    let report_path = files
        .last()
        .cloned()
        .unwrap_or_else(|| project_root.join(CONFIG_DIR).join("config.yml"));
    serde_yaml::from_value(merged).map_err(|e| PredeployError::ConfigParseError {
        path: report_path,
        message: format!("Failed to parse merged config: {}", e),
    })
}
