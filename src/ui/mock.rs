//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use predeploy::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Docker is installed");
//! ui.warning("deploy.ps1 does not exist");
//!
//! assert!(ui.has_success("Docker"));
//! assert!(ui.has_warning("deploy.ps1"));
//! ```

use super::{OutputMode, SpinnerHandle, UserInterface};
use crate::checklist::ChecklistSummary;

/// Mock UI implementation for testing.
///
/// Records every call regardless of output mode; filtering by mode is the
/// caller's job and is what tests assert on.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    details: Vec<String>,
    spinners: Vec<String>,
    summaries: Vec<ChecklistSummary>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Captured diagnostic output.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Messages of every spinner that was started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    pub fn summaries(&self) -> &[ChecklistSummary] {
        &self.summaries
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a hint containing `msg` was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_detail(&mut self, detail: &str) {
        self.details.push(detail.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn show_summary(&mut self, summary: &ChecklistSummary) {
        self.summaries.push(summary.clone());
    }

}

/// Spinner handle returned by [`MockUI`].
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn finish(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_kind() {
        let mut ui = MockUI::new();
        ui.message("Required environment variables:");
        ui.success("Git is installed");
        ui.warning("GCP_REGION is not set");
        ui.error("config.yaml missing");
        ui.show_header("1. Required tools");
        ui.show_hint("Run: gcloud auth login");
        ui.show_detail("permission denied");

        assert!(ui.has_message("Required"));
        assert!(ui.has_success("Git"));
        assert!(ui.has_warning("GCP_REGION"));
        assert!(ui.has_error("config.yaml"));
        assert_eq!(ui.headers(), ["1. Required tools"]);
        assert!(ui.has_hint("auth login"));
        assert_eq!(ui.details(), ["permission denied"]);
    }

    #[test]
    fn records_spinners() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Checking Docker...");
        spinner.finish();
        assert_eq!(ui.spinners(), ["Checking Docker..."]);
    }

    #[test]
    fn mode_can_change() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        ui.set_output_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
