//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`predeploy check`, `predeploy list`)
//! - Shared config loading and validation
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod list;

pub use dispatcher::{load_for_command, Command, CommandDispatcher, CommandResult, USAGE_ERROR};
