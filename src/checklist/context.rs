//! Everything a check may touch: processes, environment, filesystem.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{CommandResult, CommandRunner};

/// Environment variable lookup.
///
/// Injected so checks can be exercised without mutating the process
/// environment.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Read a variable from the real process environment.
///
/// A value that is not valid UTF-8 still counts as set; it is converted
/// lossily.
pub fn system_env(name: &str) -> Option<String> {
    std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
}

/// Inputs shared by all checks in a run.
pub struct CheckContext<'a> {
    runner: &'a dyn CommandRunner,
    env: EnvLookup<'a>,
    project_root: &'a Path,
}

impl<'a> CheckContext<'a> {
    /// Create a context.
    pub fn new(runner: &'a dyn CommandRunner, env: EnvLookup<'a>, project_root: &'a Path) -> Self {
        Self {
            runner,
            env,
            project_root,
        }
    }

    /// Value of an environment variable; empty values count as unset.
    pub fn var(&self, name: &str) -> Option<String> {
        (self.env)(name).filter(|v| !v.is_empty())
    }

    /// Resolve a project-relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.join(relative)
    }

    /// Whether a project-relative file exists.
    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Run an external command through the configured runner.
    pub fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        self.runner.run(program, args)
    }

    /// The project root checks resolve files against.
    pub fn project_root(&self) -> &Path {
        self.project_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::SystemRunner;
    use tempfile::TempDir;

    #[test]
    fn empty_var_counts_as_unset() {
        let runner = SystemRunner::default();
        let env = |name: &str| match name {
            "EMPTY" => Some(String::new()),
            "SET" => Some("value".to_string()),
            _ => None,
        };
        let root = Path::new(".");
        let ctx = CheckContext::new(&runner, &env, root);

        assert_eq!(ctx.var("SET").as_deref(), Some("value"));
        assert_eq!(ctx.var("EMPTY"), None);
        assert_eq!(ctx.var("MISSING"), None);
    }

    #[test]
    fn exists_resolves_against_project_root() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.yaml"), "").unwrap();
        let runner = SystemRunner::default();
        let ctx = CheckContext::new(&runner, &system_env, temp.path());

        assert!(ctx.exists("config.yaml"));
        assert!(!ctx.exists("cloudbuild.yaml"));
        assert_eq!(ctx.project_root(), temp.path());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_value_counts_as_set() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = "PREDEPLOY_CONTEXT_TEST_NON_UTF8";
        std::env::set_var(name, OsStr::from_bytes(b"proj\xffect"));
        let value = system_env(name);
        std::env::remove_var(name);

        assert_eq!(value.as_deref(), Some("proj\u{FFFD}ect"));
    }
}
