//! Checklist configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use predeploy::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".predeploy");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "settings:\n  timeout_secs: 3\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.settings.timeout_secs, 3);
//! ```
//!
//! # Configuration File Locations
//!
//! Layered over the built-in defaults, in this order:
//! 1. Project config (`.predeploy/config.yml`)
//! 2. Local overrides (`.predeploy/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{
    ChecklistConfig, CloudConfig, DocPointer, EnvConfig, EnvVarSpec, FilesConfig, OutputMode,
    ScriptSpec, Settings, ToolSpec, MAX_TIMEOUT_SECS,
};

pub use loader::{load_config, load_config_value, ConfigPaths, CONFIG_DIR};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};
