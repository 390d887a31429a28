//! Environment variable checks.

use super::context::CheckContext;
use super::outcome::{CheckLine, CheckOutcome};
use crate::config::EnvConfig;

/// Required variables fail the check when unset; optional ones only warn.
pub fn check_env_vars(ctx: &CheckContext<'_>, env: &EnvConfig) -> CheckOutcome {
    let mut outcome =
        CheckOutcome::passed().line(CheckLine::Heading("Required environment variables:".to_string()));

    for var in &env.required {
        match ctx.var(&var.name) {
            Some(value) => {
                outcome = outcome.line(CheckLine::Success(format!("{}: {}", var.name, value)));
            }
            None => {
                outcome.passed = false;
                outcome = outcome.line(CheckLine::Error(format!("{} is not set", var.name)));
            }
        }
    }

    outcome = outcome.line(CheckLine::Heading("Optional environment variables:".to_string()));

    for var in &env.optional {
        let line = match (ctx.var(&var.name), &var.default) {
            (Some(value), _) => CheckLine::Success(format!("{}: {}", var.name, value)),
            (None, Some(default)) => CheckLine::Warning(format!(
                "{} is not set ({}, default: {})",
                var.name, var.description, default
            )),
            (None, None) => {
                CheckLine::Warning(format!("{} is not set ({})", var.name, var.description))
            }
        };
        outcome = outcome.line(line);
    }

    outcome
}
