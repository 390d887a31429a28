//! Integration tests for the predeploy binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn predeploy() -> Command {
    let mut cmd = Command::new(cargo_bin("predeploy"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".predeploy");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = predeploy();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ready to deploy to Google Cloud"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = predeploy();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = predeploy();
    cmd.arg("invalid-command");
    cmd.assert().failure().code(2);
    Ok(())
}

#[test]
fn cli_list_shows_checks() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = predeploy();
    cmd.current_dir(temp.path());
    cmd.arg("list");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. Required tools"))
        .stdout(predicate::str::contains("gcp_project"))
        .stdout(predicate::str::contains("kubectl_conn"))
        .stdout(predicate::str::contains("advisory"));
    Ok(())
}

#[test]
fn cli_config_json_shows_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = predeploy();
    cmd.current_dir(temp.path());
    cmd.args(["config", "--json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"project_env\": \"GCP_PROJECT_ID\""))
        .stdout(predicate::str::contains("cli-proxy-cluster"));
    Ok(())
}

#[test]
fn cli_config_shows_local_override() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings:\n  timeout_secs: 7\n");
    fs::write(
        temp.path().join(".predeploy/config.local.yml"),
        "settings:\n  timeout_secs: 12\n",
    )?;
    let mut cmd = predeploy();
    cmd.current_dir(temp.path());
    cmd.arg("config");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.local.yml"))
        .stdout(predicate::str::contains("timeout_secs: 12"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = predeploy();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("predeploy"));
    Ok(())
}

#[test]
fn cli_invalid_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        "settings:\n  timeout_secs: 0\ntools:\n  - { command: '', description: Nothing }\n",
    );
    let mut cmd = predeploy();
    cmd.current_dir(temp.path());
    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("zero-timeout"))
        .stdout(predicate::str::contains("empty-tool-command"))
        .stdout(predicate::str::contains("Critical checks").not());
    Ok(())
}

#[test]
fn cli_oversized_timeout_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings:\n  timeout_secs: 18446744073709551615\n");
    let mut cmd = predeploy();
    cmd.current_dir(temp.path());
    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("timeout-too-large"))
        .stdout(predicate::str::contains("Critical checks").not());

    let mut cmd = predeploy();
    cmd.current_dir(temp.path());
    cmd.args(["check", "--timeout", "18446744073709551615"]);
    cmd.assert().code(2);
    Ok(())
}

#[test]
fn cli_missing_explicit_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = predeploy();
    cmd.current_dir(temp.path());
    cmd.args(["--config", "nowhere.yml", "check"]);
    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_missing_project_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = predeploy();
    cmd.args(["--project"])
        .arg(temp.path().join("does-not-exist"))
        .arg("check");
    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("Project directory does not exist"));
    Ok(())
}

#[test]
fn cli_debug_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = predeploy();
    cmd.current_dir(temp.path());
    cmd.args(["--debug", "list"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("predeploy starting"));
    Ok(())
}

/// End-to-end runs against stub executables on a scratch PATH.
#[cfg(unix)]
mod stubbed {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    const GCLOUD: &str = r#"#!/bin/sh
case "$1 $2" in
  "auth list") echo "Credentialed Accounts"; echo "ACTIVE  ACCOUNT"; echo "*       dev@example.com" ;;
  "config get-value") echo "${STUB_ACTIVE_PROJECT:-my-project}" ;;
  *) echo "Google Cloud SDK 456.0.0" ;;
esac
"#;

    const KUBECTL: &str = r#"#!/bin/sh
if [ "$1" = "cluster-info" ]; then
  if [ -n "$STUB_HANG" ]; then
    while :; do :; done
  fi
  echo "Kubernetes control plane is running"
else
  echo "Client Version: v1.29.1"
fi
"#;

    const DOCKER: &str = "#!/bin/sh\necho \"Docker version 24.0.7, build afdd53b\"\n";

    const GIT: &str = "#!/bin/sh\necho \"git version 2.43.0\"\n";

    fn write_stub(dir: &Path, name: &str, script: &str) {
        let path = dir.join(name);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn stub_bin(tools: &[(&str, &str)]) -> TempDir {
        let bin = TempDir::new().unwrap();
        for (name, script) in tools {
            write_stub(bin.path(), name, script);
        }
        bin
    }

    fn all_tools() -> TempDir {
        stub_bin(&[
            ("gcloud", GCLOUD),
            ("kubectl", KUBECTL),
            ("docker", DOCKER),
            ("git", GIT),
        ])
    }

    fn ready_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        for name in [
            "config.yaml",
            "k8s-deployment.yaml",
            "cloudbuild.yaml",
            "deploy.sh",
            "deploy.ps1",
        ] {
            fs::write(temp.path().join(name), "").unwrap();
        }
        temp
    }

    fn stubbed(bin: &TempDir, project: &TempDir) -> Command {
        let mut cmd = predeploy();
        cmd.current_dir(project.path())
            .env("PATH", bin.path())
            .env_remove("GCP_PROJECT_ID")
            .env_remove("GCP_REGION")
            .env_remove("GCP_ZONE")
            .env_remove("GKE_CLUSTER_NAME");
        cmd
    }

    #[test]
    fn nothing_installed_fails() -> Result<(), Box<dyn std::error::Error>> {
        let bin = stub_bin(&[]);
        let project = TempDir::new()?;
        let mut cmd = stubbed(&bin, &project);
        cmd.assert()
            .code(1)
            .stdout(predicate::str::contains(
                "Google Cloud SDK is not installed or not accessible",
            ))
            .stdout(predicate::str::contains("Run: gcloud auth login"))
            .stdout(predicate::str::contains("Critical checks: 0/9 passed"))
            .stdout(predicate::str::contains("Need help? See:"))
            .stdout(predicate::str::contains("gcloud-setup.md"));
        Ok(())
    }

    #[test]
    fn ready_environment_passes() -> Result<(), Box<dyn std::error::Error>> {
        let bin = all_tools();
        let project = ready_project();
        let mut cmd = stubbed(&bin, &project);
        cmd.env("GCP_PROJECT_ID", "my-project");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Docker is installed (24.0.7)"))
            .stdout(predicate::str::contains("GCP project is set: my-project"))
            .stdout(predicate::str::contains("GCP_PROJECT_ID: my-project"))
            .stdout(predicate::str::contains("GCP_REGION is not set"))
            .stdout(predicate::str::contains("Critical checks: 9/9 passed"))
            .stdout(predicate::str::contains("All checks passed! Ready to deploy"))
            .stdout(predicate::str::contains("Bash: ./deploy.sh full"));
        Ok(())
    }

    #[test]
    fn project_mismatch_warns_but_passes() -> Result<(), Box<dyn std::error::Error>> {
        let bin = all_tools();
        let project = ready_project();
        let mut cmd = stubbed(&bin, &project);
        cmd.env("GCP_PROJECT_ID", "my-project")
            .env("STUB_ACTIVE_PROJECT", "someone-elses");
        cmd.assert().success().stdout(predicate::str::contains(
            "Current project: someone-elses, target project: my-project",
        ));
        Ok(())
    }

    #[test]
    fn example_config_only_suggests_copy() -> Result<(), Box<dyn std::error::Error>> {
        let bin = all_tools();
        let project = ready_project();
        fs::remove_file(project.path().join("config.yaml"))?;
        fs::write(project.path().join("config.example.yaml"), "")?;
        let mut cmd = stubbed(&bin, &project);
        cmd.env("GCP_PROJECT_ID", "my-project");
        cmd.assert()
            .code(1)
            .stdout(predicate::str::contains(
                "config.example.yaml exists, but config.yaml is missing",
            ))
            .stdout(predicate::str::contains(
                "Run: cp config.example.yaml config.yaml",
            ))
            .stdout(predicate::str::contains("(1 failed)"));
        Ok(())
    }

    #[test]
    fn hung_daemon_probe_is_killed() -> Result<(), Box<dyn std::error::Error>> {
        let bin = all_tools();
        let project = ready_project();
        let mut cmd = stubbed(&bin, &project);
        cmd.env("GCP_PROJECT_ID", "my-project")
            .env("STUB_HANG", "1")
            .args(["check", "--timeout", "1"]);
        cmd.timeout(std::time::Duration::from_secs(30));
        cmd.assert().success().stdout(predicate::str::contains(
            "kubectl is not connected to a cluster",
        ));
        Ok(())
    }

    #[test]
    fn quiet_hides_passing_lines() -> Result<(), Box<dyn std::error::Error>> {
        let bin = all_tools();
        let project = ready_project();
        let mut cmd = stubbed(&bin, &project);
        cmd.env("GCP_PROJECT_ID", "my-project").arg("--quiet");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("is installed").not())
            .stdout(predicate::str::contains("GCP_REGION is not set"))
            .stdout(predicate::str::contains("Critical checks: 9/9 passed"));
        Ok(())
    }

    #[test]
    fn verbose_shows_failing_command_output() -> Result<(), Box<dyn std::error::Error>> {
        let bin = stub_bin(&[
            ("gcloud", GCLOUD),
            ("kubectl", KUBECTL),
            (
                "docker",
                "#!/bin/sh\nif [ \"$1\" = ps ]; then echo 'permission denied on docker.sock' >&2; exit 1; fi\necho 'Docker version 24.0.7'\n",
            ),
            ("git", GIT),
        ]);
        let project = ready_project();
        let mut cmd = stubbed(&bin, &project);
        cmd.env("GCP_PROJECT_ID", "my-project").arg("--verbose");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains(
                "Docker daemon is not running or permission was denied",
            ))
            .stdout(predicate::str::contains("permission denied on docker.sock"));
        Ok(())
    }
}
