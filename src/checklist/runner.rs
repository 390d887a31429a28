//! Runs the checklist section by section and reports through the UI.

use super::cloud::{check_auth, check_project};
use super::context::CheckContext;
use super::daemons::check_daemon;
use super::definition::{CheckDef, CheckKind, Checklist, Section};
use super::env::check_env_vars;
use super::files::{check_config_file, check_manifests, check_scripts};
use super::outcome::{CheckLine, CheckOutcome, ResultTable};
use super::summary::ChecklistSummary;
use super::tools::check_tool;
use crate::shell::Platform;
use crate::ui::UserInterface;

/// Banner printed before the first section.
pub const TITLE: &str = "GCloud pre-deployment checklist";

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct ChecklistReport {
    pub results: ResultTable,
    pub summary: ChecklistSummary,
}

impl ChecklistReport {
    /// Process exit code for this run.
    pub fn exit_code(&self) -> i32 {
        self.summary.exit_code()
    }
}

/// Drives one run of the checklist.
///
/// Checks run strictly in order, one at a time. Every check produces a
/// result; failures in the process layer never abort the run.
pub struct ChecklistRunner<'a> {
    checklist: &'a Checklist,
    ctx: CheckContext<'a>,
    platform: Platform,
}

impl<'a> ChecklistRunner<'a> {
    /// Create a runner for `checklist`.
    pub fn new(checklist: &'a Checklist, ctx: CheckContext<'a>) -> Self {
        Self {
            checklist,
            ctx,
            platform: Platform::current(),
        }
    }

    /// Override the platform used for deploy guidance.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Evaluate a single check without reporting it.
    pub fn evaluate(&self, check: &CheckDef) -> CheckOutcome {
        let config = self.checklist.config();
        match &check.kind {
            CheckKind::Tool(tool) => check_tool(&self.ctx, tool),
            CheckKind::CloudAuth => check_auth(&self.ctx, &config.cloud),
            CheckKind::CloudProject => check_project(&self.ctx, &config.cloud),
            CheckKind::Daemon(probe) => check_daemon(&self.ctx, probe),
            CheckKind::ConfigFile => check_config_file(&self.ctx, &config.files),
            CheckKind::Manifests => check_manifests(&self.ctx, &config.files),
            CheckKind::Scripts => check_scripts(&self.ctx, &config.files),
            CheckKind::EnvVars => check_env_vars(&self.ctx, &config.env),
        }
    }

    /// Run every check, print each section, then print the summary.
    pub fn run(&self, ui: &mut dyn UserInterface) -> ChecklistReport {
        let mode = ui.output_mode();
        let mut results = ResultTable::new();

        if mode.shows_passing() {
            ui.show_header(TITLE);
        }

        for section in Section::ALL {
            if mode.shows_passing() {
                ui.show_header(section.title());
            }

            for check in self.checklist.section(section) {
                let outcome = if check.spawns_process() {
                    let mut spinner =
                        ui.start_spinner(&format!("Checking {}...", check.description));
                    let outcome = self.evaluate(check);
                    spinner.finish();
                    outcome
                } else {
                    self.evaluate(check)
                };

                report(ui, &outcome);

                tracing::debug!(
                    "Check '{}' finished: passed={} critical={}",
                    check.id,
                    outcome.passed,
                    check.critical
                );
                results.record(&check.id, outcome.passed);
            }
        }

        let summary = ChecklistSummary::from_results(self.checklist, &results, self.platform);
        ui.show_header("Summary");
        ui.show_summary(&summary);

        ChecklistReport { results, summary }
    }
}

fn report(ui: &mut dyn UserInterface, outcome: &CheckOutcome) {
    let mode = ui.output_mode();

    for line in &outcome.lines {
        match line {
            CheckLine::Success(msg) if mode.shows_passing() => ui.success(msg),
            CheckLine::Heading(msg) if mode.shows_passing() => ui.message(&format!("\n{}", msg)),
            CheckLine::Success(_) | CheckLine::Heading(_) => {}
            CheckLine::Warning(msg) => ui.warning(msg),
            CheckLine::Error(msg) => ui.error(msg),
            CheckLine::Hint(msg) => ui.show_hint(msg),
        }
    }

    if mode.shows_command_output() {
        if let Some(detail) = &outcome.detail {
            ui.show_detail(detail);
        }
    }
}
