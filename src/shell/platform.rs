//! Platform and CI detection.

/// Host platform, as far as deploy guidance is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Whether deploy scripts on this platform are PowerShell rather than Bash.
    pub fn uses_powershell(self) -> bool {
        matches!(self, Platform::Windows)
    }
}

/// Check if running in a CI environment.
///
/// Used to pick the non-interactive UI in `main()` so spinners do not
/// litter CI logs. Checks common CI environment variables: `CI`,
/// `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_windows_uses_powershell() {
        assert!(Platform::Windows.uses_powershell());
        assert!(!Platform::Linux.uses_powershell());
        assert!(!Platform::MacOS.uses_powershell());
    }

    #[test]
    fn current_matches_target() {
        let platform = Platform::current();
        if cfg!(target_os = "windows") {
            assert_eq!(platform, Platform::Windows);
        } else {
            assert_ne!(platform, Platform::Windows);
        }
    }

    #[test]
    fn is_ci_detects_environment() {
        // Just ensure function doesn't panic
        let _ = is_ci();
    }
}
