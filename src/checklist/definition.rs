//! Check definitions and the ordered checklist.
//!
//! The checklist is built once from the configuration. Order matters: checks
//! run in definition order, and the critical tally follows the same order.

use crate::config::{ChecklistConfig, ToolSpec};

/// Ids of the checks that are not tool-presence checks.
///
/// Tool checks use the tool's command as id, so a tool may not be named
/// after one of these.
pub const BUILTIN_CHECK_IDS: &[&str] = &[
    AUTH_ID,
    PROJECT_ID,
    DOCKER_DAEMON.id,
    KUBE_CLUSTER.id,
    CONFIG_ID,
    MANIFESTS_ID,
    SCRIPTS_ID,
    ENV_VARS_ID,
];

pub const AUTH_ID: &str = "gcp_auth";
pub const PROJECT_ID: &str = "gcp_project";
pub const CONFIG_ID: &str = "config";
pub const MANIFESTS_ID: &str = "kubernetes";
pub const SCRIPTS_ID: &str = "scripts";
pub const ENV_VARS_ID: &str = "env_vars";

/// Groups of checks, each printed under its own header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Tools,
    Cloud,
    Connectivity,
    ProjectFiles,
    Environment,
}

impl Section {
    /// All sections in run order.
    pub const ALL: [Section; 5] = [
        Section::Tools,
        Section::Cloud,
        Section::Connectivity,
        Section::ProjectFiles,
        Section::Environment,
    ];

    /// Header shown above the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::Tools => "1. Required tools",
            Section::Cloud => "2. Cloud authentication and project",
            Section::Connectivity => "3. Local connectivity",
            Section::ProjectFiles => "4. Project files",
            Section::Environment => "5. Environment variables",
        }
    }
}

/// How bad a failed daemon probe is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A lightweight status command against a local daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaemonProbe {
    pub id: &'static str,
    pub description: &'static str,
    pub program: &'static str,
    pub args: &'static [&'static str],
    pub ok_message: &'static str,
    pub fail_message: &'static str,
    pub fail_severity: Severity,
}

/// `docker ps` against the container runtime.
pub const DOCKER_DAEMON: DaemonProbe = DaemonProbe {
    id: "docker_conn",
    description: "Docker connection",
    program: "docker",
    args: &["ps"],
    ok_message: "Docker daemon is running",
    fail_message: "Docker daemon is not running or permission was denied",
    fail_severity: Severity::Error,
};

/// `kubectl cluster-info` against the current cluster context.
pub const KUBE_CLUSTER: DaemonProbe = DaemonProbe {
    id: "kubectl_conn",
    description: "kubectl connection (optional)",
    program: "kubectl",
    args: &["cluster-info"],
    ok_message: "kubectl is connected to a cluster",
    fail_message: "kubectl is not connected to a cluster (it may need to be created)",
    fail_severity: Severity::Warning,
};

/// What a check does.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckKind {
    /// Run the tool's version command.
    Tool(ToolSpec),
    /// `gcloud auth list` reports an active account.
    CloudAuth,
    /// Configured project matches the target project variable.
    CloudProject,
    /// Local daemon answers a status command.
    Daemon(DaemonProbe),
    /// Primary config file (or its example) exists.
    ConfigFile,
    /// All deployment manifests exist.
    Manifests,
    /// Deploy scripts exist.
    Scripts,
    /// Required and optional environment variables.
    EnvVars,
}

/// A single named check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckDef {
    /// Key in the result table.
    pub id: String,
    /// Name shown in the summary.
    pub description: String,
    /// Section the check is printed under.
    pub section: Section,
    /// Whether the check counts toward the exit code.
    pub critical: bool,
    /// The work to perform.
    pub kind: CheckKind,
}

impl CheckDef {
    fn new(id: &str, description: &str, section: Section, critical: bool, kind: CheckKind) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            section,
            critical,
            kind,
        }
    }

    /// Whether running this check spawns an external process.
    pub fn spawns_process(&self) -> bool {
        matches!(
            self.kind,
            CheckKind::Tool(_) | CheckKind::CloudAuth | CheckKind::CloudProject | CheckKind::Daemon(_)
        )
    }
}

/// The full, ordered list of checks for one run.
#[derive(Debug, Clone)]
pub struct Checklist {
    config: ChecklistConfig,
    checks: Vec<CheckDef>,
}

impl Checklist {
    /// Build the checklist described by `config`.
    pub fn from_config(config: ChecklistConfig) -> Self {
        let mut checks: Vec<CheckDef> = config
            .tools
            .iter()
            .map(|tool| {
                CheckDef::new(
                    &tool.command,
                    &tool.description,
                    Section::Tools,
                    true,
                    CheckKind::Tool(tool.clone()),
                )
            })
            .collect();

        checks.push(CheckDef::new(
            AUTH_ID,
            "GCP authentication",
            Section::Cloud,
            true,
            CheckKind::CloudAuth,
        ));
        checks.push(CheckDef::new(
            PROJECT_ID,
            "GCP project",
            Section::Cloud,
            true,
            CheckKind::CloudProject,
        ));

        for probe in [DOCKER_DAEMON, KUBE_CLUSTER] {
            checks.push(CheckDef::new(
                probe.id,
                probe.description,
                Section::Connectivity,
                false,
                CheckKind::Daemon(probe),
            ));
        }

        checks.push(CheckDef::new(
            CONFIG_ID,
            "Config file",
            Section::ProjectFiles,
            true,
            CheckKind::ConfigFile,
        ));
        checks.push(CheckDef::new(
            MANIFESTS_ID,
            "Kubernetes files",
            Section::ProjectFiles,
            true,
            CheckKind::Manifests,
        ));
        checks.push(CheckDef::new(
            SCRIPTS_ID,
            "Deploy scripts",
            Section::ProjectFiles,
            false,
            CheckKind::Scripts,
        ));

        checks.push(CheckDef::new(
            ENV_VARS_ID,
            "Environment variables",
            Section::Environment,
            true,
            CheckKind::EnvVars,
        ));

        Self { config, checks }
    }

    /// The configuration this checklist was built from.
    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    /// All checks in run order.
    pub fn checks(&self) -> &[CheckDef] {
        &self.checks
    }

    /// Checks belonging to `section`, in run order.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &CheckDef> {
        self.checks.iter().filter(move |c| c.section == section)
    }

    /// Critical checks, in tally order.
    pub fn critical(&self) -> impl Iterator<Item = &CheckDef> {
        self.checks.iter().filter(|c| c.critical)
    }

    /// Look up a check by id.
    pub fn get(&self, id: &str) -> Option<&CheckDef> {
        self.checks.iter().find(|c| c.id == id)
    }
}
