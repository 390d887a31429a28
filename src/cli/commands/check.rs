//! Check command implementation.
//!
//! The `predeploy check` command runs the checklist and exits 0 only when
//! every critical check passed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::checklist::{system_env, CheckContext, Checklist, ChecklistRunner};
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::shell::{CommandOptions, SystemRunner};
use crate::ui::UserInterface;

use super::dispatcher::{load_for_command, Command, CommandResult, USAGE_ERROR};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            args,
        }
    }

    /// Use an explicit config file instead of discovery.
    pub fn with_config_path(mut self, config_path: Option<&Path>) -> Self {
        self.config_path = config_path.map(Path::to_path_buf);
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = load_for_command(&self.project_root, self.config_path.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(USAGE_ERROR));
        };

        let timeout_secs = self.args.timeout.unwrap_or(config.settings.timeout_secs);
        let timeout = Duration::from_secs(timeout_secs);
        tracing::debug!(
            "Running checklist in {} with a {}s command timeout",
            self.project_root.display(),
            timeout.as_secs()
        );

        let runner = SystemRunner::new(CommandOptions {
            cwd: Some(self.project_root.clone()),
            timeout: Some(timeout),
        });
        let checklist = Checklist::from_config(config);
        let ctx = CheckContext::new(&runner, &system_env, &self.project_root);

        let report = ChecklistRunner::new(&checklist, ctx).run(ui);

        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn check_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), CheckArgs { timeout: Some(3) });

        assert_eq!(cmd.project_root(), temp.path());
        assert_eq!(cmd.args().timeout, Some(3));
    }

    #[test]
    fn missing_project_exits_two() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(&temp.path().join("missing"), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.summaries().is_empty());
    }

    #[test]
    fn invalid_config_exits_two_without_running() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".predeploy");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.yml"),
            "tools:\n  - { command: git, description: Git }\n  - { command: git, description: Git }\n",
        )
        .unwrap();
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("duplicate-tool"));
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn unparseable_config_exits_two() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("checklist.yml");
        fs::write(&config, "tools: [unclosed\n").unwrap();
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default())
            .with_config_path(Some(config.as_path()));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Failed to parse config"));
    }
}
