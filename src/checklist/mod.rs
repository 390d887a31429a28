//! The pre-deployment checklist.
//!
//! - Check definitions and ordering in [`definition`]
//! - Per-family checks in [`tools`], [`cloud`], [`daemons`], [`files`] and [`env`]
//! - Outcomes and the result table in [`outcome`]
//! - Tally and exit code in [`summary`]
//! - Orchestration in [`runner`]
//!
//! # Example
//!
//! ```
//! use predeploy::checklist::{CheckContext, Checklist, ChecklistRunner};
//! use predeploy::config::ChecklistConfig;
//! use predeploy::shell::ScriptedRunner;
//! use predeploy::ui::MockUI;
//! use std::path::Path;
//!
//! let checklist = Checklist::from_config(ChecklistConfig::default());
//! let runner = ScriptedRunner::new().succeed("git --version", "git version 2.43.0");
//! let env = |_: &str| -> Option<String> { None };
//! let ctx = CheckContext::new(&runner, &env, Path::new("."));
//! let mut ui = MockUI::new();
//!
//! let report = ChecklistRunner::new(&checklist, ctx).run(&mut ui);
//! assert_eq!(report.results.get("git"), Some(true));
//! assert_eq!(report.exit_code(), 1);
//! ```

pub mod cloud;
pub mod context;
pub mod daemons;
pub mod definition;
pub mod env;
pub mod files;
pub mod outcome;
pub mod runner;
pub mod summary;
pub mod tools;

pub use context::{system_env, CheckContext, EnvLookup};
pub use definition::{
    CheckDef, CheckKind, Checklist, DaemonProbe, Section, Severity, BUILTIN_CHECK_IDS,
    DOCKER_DAEMON, KUBE_CLUSTER,
};
pub use outcome::{CheckLine, CheckOutcome, ResultTable};
pub use runner::{ChecklistReport, ChecklistRunner, TITLE};
pub use summary::{deploy_command, ChecklistSummary, CriticalEntry};
