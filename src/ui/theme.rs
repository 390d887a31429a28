//! Visual theme and styling.

use console::Style;

/// Width of banner rules.
pub const RULE_WIDTH: usize = 60;

/// Colors for checklist output.
#[derive(Debug, Clone)]
pub struct PredeployTheme {
    /// Style for passing lines (green).
    pub success: Style,
    /// Style for advisory problems (yellow).
    pub warning: Style,
    /// Style for failures (red).
    pub error: Style,
    /// Style for section banners (blue bold).
    pub header: Style,
    /// Style for suggested commands (cyan).
    pub hint: Style,
    /// Style for captured command output (dim).
    pub dim: Style,
    /// Style for emphasized text (bold).
    pub highlight: Style,
}

impl Default for PredeployTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PredeployTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            header: Style::new().blue().bold(),
            hint: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            hint: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Pick the colored or plain theme for stdout.
    pub fn for_stdout() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a suggested follow-up, indented under the line it belongs to.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {}", self.hint.apply_to(hint))
    }

    /// Format a banner: a rule, the centered title, another rule.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let banner = format!("{}\n{:^width$}\n{}", rule, title, rule, width = RULE_WIDTH);
        format!("{}", self.header.apply_to(banner))
    }

    /// A plain rule line.
    pub fn rule(&self) -> String {
        "=".repeat(RULE_WIDTH)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
