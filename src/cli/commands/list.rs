//! List command implementation.
//!
//! The `predeploy list` command shows every check without running it.

use std::path::{Path, PathBuf};

use crate::checklist::{Checklist, Section};
use crate::error::Result;
use crate::ui::{PredeployTheme, UserInterface};

use super::dispatcher::{load_for_command, Command, CommandResult, USAGE_ERROR};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
        }
    }

    /// Use an explicit config file instead of discovery.
    pub fn with_config_path(mut self, config_path: Option<&Path>) -> Self {
        self.config_path = config_path.map(Path::to_path_buf);
        self
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = load_for_command(&self.project_root, self.config_path.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(USAGE_ERROR));
        };

        let checklist = Checklist::from_config(config);
        let theme = PredeployTheme::for_stdout();

        for section in Section::ALL {
            ui.message(&theme.highlight.apply_to(section.title()).to_string());
            for check in checklist.section(section) {
                let kind = if check.critical {
                    "critical"
                } else {
                    "advisory"
                };
                ui.message(&format!(
                    "  {:<14} {:<24} {}",
                    check.id,
                    check.description,
                    theme.dim.apply_to(kind)
                ));
            }
            ui.message("");
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_every_check_with_criticality() {
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(temp.path());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("1. Required tools"));
        assert!(ui
            .messages()
            .iter()
            .any(|m| m.contains("gcp_auth") && m.contains("critical")));
        assert!(ui
            .messages()
            .iter()
            .any(|m| m.contains("docker_conn") && m.contains("advisory")));
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn lists_configured_tools() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".predeploy");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.yml"),
            "tools:\n  - { command: helm, description: Helm }\n",
        )
        .unwrap();
        let cmd = ListCommand::new(temp.path());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("helm"));
        assert!(!ui.has_message("Google Cloud SDK"));
    }
}
