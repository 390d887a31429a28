//! External command execution and platform detection.

pub mod command;
pub mod platform;
pub mod scripted;

pub use command::{
    display_command, execute, CommandOptions, CommandResult, CommandRunner, SystemRunner,
};
pub use platform::{is_ci, Platform};
pub use scripted::ScriptedRunner;
