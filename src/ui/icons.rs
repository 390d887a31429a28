//! Status icons used in the summary.

use super::theme::PredeployTheme;

/// Pass/fail status of a summary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Success,
    Failed,
}

impl StatusKind {
    /// Status for a check result.
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Success
        } else {
            Self::Failed
        }
    }

    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
        }
    }

    /// Icon colored with the given theme.
    pub fn styled(self, theme: &PredeployTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &PredeployTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}
