//! Non-interactive UI for pipes and CI.

use super::{format_summary, OutputMode, PredeployTheme, SpinnerHandle, UserInterface};
use crate::checklist::ChecklistSummary;

/// UI implementation for non-interactive mode.
///
/// Everything goes to stdout so the report reads top to bottom when piped.
/// Spinners are suppressed; colors follow [`super::should_use_colors`].
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: PredeployTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: PredeployTheme::for_stdout(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        println!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", self.theme.format_header(title));
    }

    fn show_hint(&mut self, hint: &str) {
        println!("{}", self.theme.format_hint(hint));
    }

    fn show_detail(&mut self, detail: &str) {
        if self.mode.shows_command_output() {
            for line in detail.lines() {
                println!("    {}", line);
            }
        }
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }

    fn show_summary(&mut self, summary: &ChecklistSummary) {
        for line in format_summary(&self.theme, summary) {
            println!("{}", line);
        }
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish(&mut self) {}
}
