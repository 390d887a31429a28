//! Scripted command runner for testing.
//!
//! `ScriptedRunner` implements [`CommandRunner`] from a table of canned
//! responses keyed by the full command line, and records every call.
//!
//! # Example
//!
//! ```
//! use predeploy::shell::{CommandRunner, ScriptedRunner};
//!
//! let runner = ScriptedRunner::new()
//!     .succeed("docker --version", "Docker version 24.0.7, build afdd53b")
//!     .fail("docker ps", 1, "Cannot connect to the Docker daemon");
//!
//! assert!(runner.run("docker", &["--version"]).unwrap().success);
//! assert!(!runner.run("docker", &["ps"]).unwrap().success);
//! assert!(runner.run("git", &["--version"]).is_err());
//! assert_eq!(runner.calls().len(), 3);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{PredeployError, Result};

use super::command::{display_command, CommandResult, CommandRunner};

#[derive(Debug, Clone)]
enum Response {
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    Timeout,
}

/// Command runner that replays canned responses.
///
/// Commands without a response behave like a missing executable.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, Response>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Create a runner where every command is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// `command_line` exits zero printing `stdout`.
    pub fn succeed(self, command_line: &str, stdout: &str) -> Self {
        self.respond(command_line, 0, stdout, "")
    }

    /// `command_line` exits with `code` printing `stderr`.
    pub fn fail(self, command_line: &str, code: i32, stderr: &str) -> Self {
        self.respond(command_line, code, "", stderr)
    }

    /// `command_line` exceeds its time budget.
    pub fn time_out(mut self, command_line: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), Response::Timeout);
        self
    }

    /// `command_line` exits with `code` and the given output.
    pub fn respond(mut self, command_line: &str, code: i32, stdout: &str, stderr: &str) -> Self {
        self.responses.insert(
            command_line.to_string(),
            Response::Exit {
                code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether `command_line` was run.
    pub fn was_called(&self, command_line: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command_line)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        let command_line = display_command(program, args);
        self.calls.borrow_mut().push(command_line.clone());

        match self.responses.get(&command_line) {
            Some(Response::Exit {
                code,
                stdout,
                stderr,
            }) => {
                if *code == 0 {
                    Ok(CommandResult::success(
                        stdout.clone(),
                        stderr.clone(),
                        Duration::ZERO,
                    ))
                } else {
                    Ok(CommandResult::failure(
                        Some(*code),
                        stdout.clone(),
                        stderr.clone(),
                        Duration::ZERO,
                    ))
                }
            }
            Some(Response::Timeout) => Err(PredeployError::CommandTimedOut {
                command: command_line,
                timeout: Duration::from_secs(5),
            }),
            None => Err(PredeployError::CommandFailed {
                command: command_line,
                code: None,
            }),
        }
    }
}
