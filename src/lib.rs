//! predeploy - pre-deployment environment checks for Google Cloud projects.
//!
//! Before a deploy, predeploy verifies that the CLI tools are installed,
//! the cloud CLI is authenticated against the right project, local daemons
//! answer, the expected project files exist and the deployment environment
//! variables are set. The process exits 0 only when every critical check
//! passed.
//!
//! # Modules
//!
//! - [`checklist`] - Check definitions, evaluation and the summary
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Checklist configuration loading, merging and validation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External command execution with timeouts
//! - [`ui`] - Terminal output, spinners and test doubles
//!
//! # Example
//!
//! ```
//! use predeploy::checklist::Checklist;
//! use predeploy::config::ChecklistConfig;
//!
//! let checklist = Checklist::from_config(ChecklistConfig::default());
//! let critical: Vec<_> = checklist.critical().map(|c| c.id.as_str()).collect();
//! assert_eq!(critical.first(), Some(&"gcloud"));
//! assert_eq!(critical.last(), Some(&"env_vars"));
//! ```

pub mod checklist;
pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{PredeployError, Result};
