//! Configuration validation rules.
//!
//! - The process timeout must be positive and at most an hour
//! - Tool commands must be non-empty, unique, and not shadow a built-in check id
//! - File paths must be non-empty
//! - Environment variable names must be non-empty and contain no `=`

use crate::checklist::BUILTIN_CHECK_IDS;
use crate::config::schema::{ChecklistConfig, EnvVarSpec, MAX_TIMEOUT_SECS};
use crate::error::{PredeployError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &ChecklistConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_settings(config));
    errors.extend(validate_tools(config));
    errors.extend(validate_files(config));
    errors.extend(validate_env(config));

    errors
}

/// Validate and convert the error list into a single [`PredeployError`].
pub fn validate(config: &ChecklistConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| format!("[{}] {}", e.rule, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(PredeployError::ConfigValidationError { message })
}

fn validate_settings(config: &ChecklistConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if config.settings.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "settings.timeout_secs must be greater than 0".to_string(),
        ));
    } else if config.settings.timeout_secs > MAX_TIMEOUT_SECS {
        errors.push(ValidationError::new(
            "timeout-too-large",
            format!(
                "settings.timeout_secs must be at most {} (got {})",
                MAX_TIMEOUT_SECS, config.settings.timeout_secs
            ),
        ));
    }
    if config.cloud.cli.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-cloud-cli",
            "cloud.cli must name an executable".to_string(),
        ));
    }
    errors
}

fn validate_tools(config: &ChecklistConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (idx, tool) in config.tools.iter().enumerate() {
        if tool.command.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-tool-command",
                format!("tools[{}] has an empty command", idx),
            ));
            continue;
        }
        if BUILTIN_CHECK_IDS.contains(&tool.command.as_str()) {
            errors.push(ValidationError::new(
                "reserved-tool-name",
                format!("Tool '{}' collides with a built-in check id", tool.command),
            ));
        }
        if !seen.insert(tool.command.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-tool",
                format!("Tool '{}' is listed more than once", tool.command),
            ));
        }
    }

    errors
}

fn validate_files(config: &ChecklistConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let files = &config.files;

    if files.config.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-path",
            "files.config must not be empty".to_string(),
        ));
    }
    for (idx, manifest) in files.manifests.iter().enumerate() {
        if manifest.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-path",
                format!("files.manifests[{}] must not be empty", idx),
            ));
        }
    }
    for (idx, script) in files.scripts.iter().enumerate() {
        if script.path.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-path",
                format!("files.scripts[{}] must not be empty", idx),
            ));
        }
    }

    errors
}

fn validate_env(config: &ChecklistConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let project_env = config.cloud.project_env.as_str();
    if let Some(message) = env_name_problem(project_env) {
        errors.push(ValidationError::new(
            "invalid-env-name",
            format!("cloud.project_env {}", message),
        ));
    }

    let vars: Vec<&EnvVarSpec> = config
        .env
        .required
        .iter()
        .chain(config.env.optional.iter())
        .collect();
    for var in vars {
        if let Some(message) = env_name_problem(&var.name) {
            errors.push(ValidationError::new(
                "invalid-env-name",
                format!("env var '{}' {}", var.name, message),
            ));
        }
    }

    errors
}

fn env_name_problem(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some("must not be empty")
    } else if name.contains('=') {
        Some("must not contain '='")
    } else {
        None
    }
}
