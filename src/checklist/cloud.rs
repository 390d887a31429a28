//! Cloud CLI authentication and project checks.

use super::context::CheckContext;
use super::outcome::{CheckLine, CheckOutcome};
use crate::config::CloudConfig;

/// `<cli> auth list` must exit zero and list an active account.
pub fn check_auth(ctx: &CheckContext<'_>, cloud: &CloudConfig) -> CheckOutcome {
    match ctx.run(&cloud.cli, &["auth", "list"]) {
        Ok(result) if result.success && result.stdout.contains(&cloud.active_marker) => {
            CheckOutcome::passed().line(CheckLine::Success(
                "GCP authentication is configured".to_string(),
            ))
        }
        Ok(result) => unauthenticated(cloud).detail(result.stderr),
        Err(e) => unauthenticated(cloud).detail(e.to_string()),
    }
}

fn unauthenticated(cloud: &CloudConfig) -> CheckOutcome {
    CheckOutcome::failed()
        .line(CheckLine::Error(
            "GCP authentication is not configured".to_string(),
        ))
        .line(CheckLine::Hint(format!("Run: {} auth login", cloud.cli)))
}

/// Compare the CLI's active project against the target project variable.
///
/// A mismatch is reported as a warning but does not fail the check.
pub fn check_project(ctx: &CheckContext<'_>, cloud: &CloudConfig) -> CheckOutcome {
    let Some(target) = ctx.var(&cloud.project_env) else {
        return CheckOutcome::failed().line(CheckLine::Warning(format!(
            "{} environment variable is not set",
            cloud.project_env
        )));
    };

    match ctx.run(&cloud.cli, &["config", "get-value", "project"]) {
        Ok(result) if result.success => {
            let current = result.stdout.trim();
            if current == target {
                CheckOutcome::passed().line(CheckLine::Success(format!(
                    "GCP project is set: {}",
                    target
                )))
            } else {
                tracing::debug!("Active project '{}' differs from '{}'", current, target);
                CheckOutcome::passed().line(CheckLine::Warning(format!(
                    "Current project: {}, target project: {}",
                    current, target
                )))
            }
        }
        Ok(result) => unknown_project(&target).detail(result.stderr),
        Err(e) => unknown_project(&target).detail(e.to_string()),
    }
}

fn unknown_project(target: &str) -> CheckOutcome {
    CheckOutcome::failed().line(CheckLine::Error(format!(
        "Unable to check GCP project: {}",
        target
    )))
}
