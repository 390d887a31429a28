//! External command execution with a time budget.
//!
//! Checks never go through a shell: the program is spawned directly with an
//! argument vector, its output is captured, and it is killed if it outlives
//! the configured timeout.

use crate::error::{PredeployError, Result};
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often a running child is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Maximum time the command may run (None = no timeout).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Options with only a timeout set.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Default::default()
        }
    }
}

/// Runs external programs on behalf of the checks.
///
/// The checklist talks to this trait rather than `std::process` so tests
/// can script tool behavior without touching the host.
pub trait CommandRunner {
    /// Run `program` with `args`, capturing output.
    ///
    /// Returns `Err` when the program cannot be started or exceeds its
    /// time budget; a non-zero exit is an `Ok` result with `success == false`.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult>;
}

/// [`CommandRunner`] backed by real processes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    options: CommandOptions,
}

impl SystemRunner {
    /// Create a runner that applies `options` to every command.
    pub fn new(options: CommandOptions) -> Self {
        Self { options }
    }

    /// Get the options applied to every command.
    pub fn options(&self) -> &CommandOptions {
        &self.options
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        execute(program, args, &self.options)
    }
}

/// Render a program and its arguments the way a user would type them.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Execute a program directly, capturing stdout and stderr.
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let command_line = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| {
        tracing::debug!("Failed to start '{}': {}", command_line, e);
        PredeployError::CommandFailed {
            command: command_line.clone(),
            code: None,
        }
    })?;

    // Drain both pipes concurrently so a chatty child never blocks on a full pipe.
    let stdout_handle = child.stdout.take().map(spawn_reader);
    let stderr_handle = child.stderr.take().map(spawn_reader);

    let status = match wait_with_deadline(&mut child, options.timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            kill_and_reap(&mut child);
            let timeout = options.timeout.unwrap_or_default();
            tracing::warn!(
                "'{}' did not finish within {}s, killed",
                command_line,
                timeout.as_secs()
            );
            // Readers are detached: a grandchild may still hold the pipes open.
            return Err(PredeployError::CommandTimedOut {
                command: command_line,
                timeout,
            });
        }
        Err(e) => {
            kill_and_reap(&mut child);
            return Err(PredeployError::Io(e));
        }
    };

    let stdout = join_reader(stdout_handle);
    let stderr = join_reader(stderr_handle);
    let duration = start.elapsed();

    tracing::debug!(
        "'{}' exited with {:?} in {}ms",
        command_line,
        status.code(),
        duration.as_millis()
    );

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(status.code(), stdout, stderr, duration))
    }
}

/// Wait for `child`, giving up once `timeout` has elapsed.
///
/// Returns `Ok(None)` when the deadline passed with the child still running.
fn wait_with_deadline(
    child: &mut Child,
    timeout: Option<Duration>,
) -> std::io::Result<Option<std::process::ExitStatus>> {
    let Some(timeout) = timeout else {
        return child.wait().map(Some);
    };

    // A deadline past the clock's range can never be reached.
    let Some(deadline) = Instant::now().checked_add(timeout) else {
        return child.wait().map(Some);
    };
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

/// Kill `child` and wait for it so no zombie is left behind.
fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).to_string()
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}
