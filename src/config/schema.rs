//! Configuration schema definitions for predeploy.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format. Every field has a default, so an empty file
//! (or no file at all) yields the stock GKE deployment checklist.

use serde::{Deserialize, Serialize};

/// Root configuration structure for `.predeploy/config.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Global settings
    pub settings: Settings,

    /// Command-line tools that must be installed, in check order
    pub tools: Vec<ToolSpec>,

    /// Cloud CLI used for authentication and project checks
    pub cloud: CloudConfig,

    /// Files expected in the project root
    pub files: FilesConfig,

    /// Environment variables
    pub env: EnvConfig,

    /// Documents pointed to when the checklist fails
    pub docs: Vec<DocPointer>,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            tools: vec![
                ToolSpec::with_args("gcloud", "Google Cloud SDK", &["version"]),
                ToolSpec::new("kubectl", "Kubernetes CLI"),
                ToolSpec::new("docker", "Docker"),
                ToolSpec::new("git", "Git"),
            ],
            cloud: CloudConfig::default(),
            files: FilesConfig::default(),
            env: EnvConfig::default(),
            docs: vec![
                DocPointer::new("gcloud-setup.md", "detailed deployment guide"),
                DocPointer::new("DEPLOYMENT_SUMMARY.md", "architecture summary"),
                DocPointer::new("QUICK_REFERENCE.txt", "quick reference"),
            ],
        }
    }
}

/// Upper bound for the per-process timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Global settings that apply to the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seconds each external command may run before it counts as failed
    pub timeout_secs: u64,

    /// Default output mode: verbose, normal, quiet
    pub default_output: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            default_output: OutputMode::Normal,
        }
    }
}

/// Output mode as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
}

/// A command-line tool whose presence is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Executable name, also used as the check id
    pub command: String,

    /// Human-readable name shown in output
    pub description: String,

    /// Arguments that make the tool print its version and exit zero
    #[serde(default = "default_version_args")]
    pub version_args: Vec<String>,
}

impl ToolSpec {
    /// A tool probed with `--version`.
    pub fn new(command: &str, description: &str) -> Self {
        Self {
            command: command.to_string(),
            description: description.to_string(),
            version_args: default_version_args(),
        }
    }

    /// A tool probed with custom version arguments.
    pub fn with_args(command: &str, description: &str, args: &[&str]) -> Self {
        Self {
            command: command.to_string(),
            description: description.to_string(),
            version_args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

fn default_version_args() -> Vec<String> {
    vec!["--version".to_string()]
}

/// Cloud CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Cloud CLI executable
    pub cli: String,

    /// Environment variable naming the target project
    pub project_env: String,

    /// Marker that `auth list` prints for an active account
    pub active_marker: String,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            cli: "gcloud".to_string(),
            project_env: "GCP_PROJECT_ID".to_string(),
            active_marker: "ACTIVE".to_string(),
        }
    }
}

/// Files expected in the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Primary configuration file
    pub config: String,

    /// Example file the primary config is copied from
    pub config_example: String,

    /// Deployment manifests; all must exist
    pub manifests: Vec<String>,

    /// Deploy scripts; missing ones only warn
    pub scripts: Vec<ScriptSpec>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            config: "config.yaml".to_string(),
            config_example: "config.example.yaml".to_string(),
            manifests: vec![
                "k8s-deployment.yaml".to_string(),
                "cloudbuild.yaml".to_string(),
            ],
            scripts: vec![
                ScriptSpec::new("deploy.ps1", "PowerShell script"),
                ScriptSpec::new("deploy.sh", "Bash script"),
            ],
        }
    }
}

/// A deploy script whose presence is reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSpec {
    /// Path relative to the project root
    pub path: String,

    /// Human-readable kind of script
    pub description: String,
}

impl ScriptSpec {
    pub fn new(path: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            description: description.to_string(),
        }
    }
}

/// Environment variable expectations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Variables that must be set
    pub required: Vec<EnvVarSpec>,

    /// Variables that fall back to a default when unset
    pub optional: Vec<EnvVarSpec>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            required: vec![EnvVarSpec::new("GCP_PROJECT_ID", "GCP project ID", None)],
            optional: vec![
                EnvVarSpec::new("GCP_REGION", "GCP region", Some("us-central1")),
                EnvVarSpec::new("GCP_ZONE", "GCP zone", Some("us-central1-a")),
                EnvVarSpec::new(
                    "GKE_CLUSTER_NAME",
                    "GKE cluster name",
                    Some("cli-proxy-cluster"),
                ),
            ],
        }
    }
}

/// A single environment variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvVarSpec {
    /// Variable name
    pub name: String,

    /// What the variable holds
    pub description: String,

    /// Value used by the deploy scripts when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl EnvVarSpec {
    pub fn new(name: &str, description: &str, default: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            default: default.map(String::from),
        }
    }
}

/// A document suggested when checks fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocPointer {
    /// Path relative to the project root
    pub path: String,

    /// What the reader finds there
    pub description: String,
}

impl DocPointer {
    pub fn new(path: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            description: description.to_string(),
        }
    }
}
