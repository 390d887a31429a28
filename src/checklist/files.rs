//! Project file existence checks.
//!
//! All paths resolve against the project root.

use super::context::CheckContext;
use super::outcome::{CheckLine, CheckOutcome};
use crate::config::FilesConfig;

/// The primary config file must exist; its example alone is not enough.
pub fn check_config_file(ctx: &CheckContext<'_>, files: &FilesConfig) -> CheckOutcome {
    if ctx.exists(&files.config) {
        return CheckOutcome::passed().line(CheckLine::Success(format!("{} exists", files.config)));
    }

    if ctx.exists(&files.config_example) {
        return CheckOutcome::failed()
            .line(CheckLine::Warning(format!(
                "{} exists, but {} is missing",
                files.config_example, files.config
            )))
            .line(CheckLine::Hint(format!(
                "Run: cp {} {}",
                files.config_example, files.config
            )));
    }

    CheckOutcome::failed().line(CheckLine::Error(format!(
        "Neither {} nor {} exists",
        files.config, files.config_example
    )))
}

/// Every manifest must exist.
pub fn check_manifests(ctx: &CheckContext<'_>, files: &FilesConfig) -> CheckOutcome {
    let mut outcome = CheckOutcome::passed();
    for manifest in &files.manifests {
        if ctx.exists(manifest) {
            outcome = outcome.line(CheckLine::Success(format!("{} exists", manifest)));
        } else {
            outcome.passed = false;
            outcome = outcome.line(CheckLine::Error(format!("{} does not exist", manifest)));
        }
    }
    outcome
}

/// Report each deploy script; missing scripts only warn.
pub fn check_scripts(ctx: &CheckContext<'_>, files: &FilesConfig) -> CheckOutcome {
    files
        .scripts
        .iter()
        .fold(CheckOutcome::passed(), |outcome, script| {
            let line = if ctx.exists(&script.path) {
                CheckLine::Success(format!("{} ({}) exists", script.description, script.path))
            } else {
                CheckLine::Warning(format!(
                    "{} ({}) does not exist",
                    script.description, script.path
                ))
            };
            outcome.line(line)
        })
}
