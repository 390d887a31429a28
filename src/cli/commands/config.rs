//! Config command implementation.
//!
//! The `predeploy config` command shows the resolved checklist configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::ConfigPaths;
use crate::error::{PredeployError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{load_for_command, Command, CommandResult, USAGE_ERROR};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, args: ConfigArgs) -> Self {
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

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }

    fn sources(&self) -> Vec<PathBuf> {
        match &self.config_path {
            Some(path) => vec![path.clone()],
            None => ConfigPaths::discover(&self.project_root)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = load_for_command(&self.project_root, self.config_path.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(USAGE_ERROR));
        };

        let sources = self.sources();
        if sources.is_empty() {
            ui.message("# built-in defaults");
        }
        for path in &sources {
            ui.message(&format!("# {}", path.display()));
        }
        ui.message("");

        if self.args.json {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| PredeployError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml =
                serde_yaml::to_string(&config).map_err(|e| PredeployError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}
