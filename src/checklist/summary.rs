//! Aggregation of critical results into the final verdict.

use super::definition::Checklist;
use super::outcome::ResultTable;
use crate::config::{DocPointer, FilesConfig};
use crate::shell::Platform;

/// One critical check as it appears in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalEntry {
    pub id: String,
    pub description: String,
    pub passed: bool,
}

/// Everything the summary section needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistSummary {
    /// Critical checks in tally order.
    pub critical: Vec<CriticalEntry>,
    /// Documentation pointers shown on failure.
    pub docs: Vec<DocPointer>,
    /// Config file the user is told to edit on success.
    pub config_file: String,
    /// Deploy invocation suggested on success, e.g. `Bash: ./deploy.sh full`.
    pub deploy_command: String,
}

impl ChecklistSummary {
    /// Tally `results` over the checklist's critical set.
    ///
    /// A critical check missing from `results` counts as failed.
    pub fn from_results(checklist: &Checklist, results: &ResultTable, platform: Platform) -> Self {
        let critical = checklist
            .critical()
            .map(|check| CriticalEntry {
                id: check.id.clone(),
                description: check.description.clone(),
                passed: results.passed(&check.id),
            })
            .collect();

        let config = checklist.config();
        Self {
            critical,
            docs: config.docs.clone(),
            config_file: config.files.config.clone(),
            deploy_command: deploy_command(&config.files, platform),
        }
    }

    pub fn passed_count(&self) -> usize {
        self.critical.iter().filter(|e| e.passed).count()
    }

    pub fn total(&self) -> usize {
        self.critical.len()
    }

    pub fn failed_count(&self) -> usize {
        self.total() - self.passed_count()
    }

    /// Whether every critical check passed.
    pub fn all_passed(&self) -> bool {
        self.critical.iter().all(|e| e.passed)
    }

    /// Process exit code: 0 when ready to deploy, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// The deploy script invocation for `platform`.
///
/// Uses the first configured script with the platform's extension and
/// falls back to `deploy.ps1` / `deploy.sh`.
pub fn deploy_command(files: &FilesConfig, platform: Platform) -> String {
    let (label, ext, fallback, prefix) = if platform.uses_powershell() {
        ("PowerShell", ".ps1", "deploy.ps1", ".\\")
    } else {
        ("Bash", ".sh", "deploy.sh", "./")
    };

    let script = files
        .scripts
        .iter()
        .map(|s| s.path.as_str())
        .find(|p| p.ends_with(ext))
        .unwrap_or(fallback);

    format!("{}: {}{} full", label, prefix, script)
}
