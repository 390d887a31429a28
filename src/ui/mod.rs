//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes and CI
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use predeploy::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("GCloud pre-deployment checklist");
//! ui.success("Docker is installed");
//! ```

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PredeployTheme};

use crate::checklist::ChecklistSummary;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a passing line.
    fn success(&mut self, msg: &str);

    /// Display an advisory problem.
    fn warning(&mut self, msg: &str);

    /// Display a failure. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a header banner.
    fn show_header(&mut self, title: &str);

    /// Show a suggested follow-up under the previous line.
    fn show_hint(&mut self, hint: &str);

    /// Show captured diagnostic output (verbose mode).
    fn show_detail(&mut self, detail: &str);

    /// Start a spinner for a running check.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Render the final tally and next steps.
    fn show_summary(&mut self, summary: &ChecklistSummary);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop and clear the spinner.
    fn finish(&mut self);
}

/// Summary section as display lines, styled with `theme`.
///
/// Shared by the terminal and non-interactive UIs so both print the same
/// report.
pub fn format_summary(theme: &PredeployTheme, summary: &ChecklistSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "Critical checks: {}/{} passed",
        summary.passed_count(),
        summary.total()
    )];
    lines.push(String::new());

    for entry in &summary.critical {
        lines.push(format!(
            "  {}",
            StatusKind::from_passed(entry.passed).format(theme, &entry.description)
        ));
    }

    lines.push(String::new());
    lines.push(theme.rule());

    if summary.all_passed() {
        lines.push(theme.format_success("All checks passed! Ready to deploy"));
        lines.push(String::new());
        lines.push(theme.highlight.apply_to("Suggested next steps:").to_string());
        lines.push(format!(
            "  1. Edit {} and fill in your API keys",
            summary.config_file
        ));
        lines.push("  2. Run the deploy script:".to_string());
        lines.push(format!(
            "     {}",
            theme.hint.apply_to(&summary.deploy_command)
        ));
    } else {
        lines.push(theme.format_error(&format!(
            "Checks failed! Fix the issues above and try again ({} failed)",
            summary.failed_count()
        )));
        if !summary.docs.is_empty() {
            lines.push(String::new());
            lines.push(theme.highlight.apply_to("Need help? See:").to_string());
            for doc in &summary.docs {
                lines.push(format!("  • {} - {}", doc.path, doc.description));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{Checklist, ResultTable};
    use crate::config::ChecklistConfig;
    use crate::shell::Platform;

    fn summary(pass: bool) -> ChecklistSummary {
        let checklist = Checklist::from_config(ChecklistConfig::default());
        let mut results = ResultTable::new();
        for check in checklist.checks() {
            results.record(&check.id, pass);
        }
        ChecklistSummary::from_results(&checklist, &results, Platform::Linux)
    }

    #[test]
    fn passing_summary_suggests_deploy() {
        let lines = format_summary(&PredeployTheme::plain(), &summary(true));

        assert_eq!(lines[0], "Critical checks: 9/9 passed");
        assert!(lines.contains(&"  ✓ Google Cloud SDK".to_string()));
        assert!(lines.contains(&"✓ All checks passed! Ready to deploy".to_string()));
        assert!(lines.contains(&"  1. Edit config.yaml and fill in your API keys".to_string()));
        assert!(lines.contains(&"     Bash: ./deploy.sh full".to_string()));
        assert!(!lines.iter().any(|l| l.contains("Need help")));
    }

    #[test]
    fn failing_summary_points_to_docs() {
        let lines = format_summary(&PredeployTheme::plain(), &summary(false));

        assert_eq!(lines[0], "Critical checks: 0/9 passed");
        assert!(lines.contains(&"  ✗ Environment variables".to_string()));
        assert!(lines.contains(
            &"✗ Checks failed! Fix the issues above and try again (9 failed)".to_string()
        ));
        assert!(lines.contains(&"  • gcloud-setup.md - detailed deployment guide".to_string()));
        assert!(lines.contains(&"  • QUICK_REFERENCE.txt - quick reference".to_string()));
    }
}
