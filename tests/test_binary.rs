//! Test running the `python-autoinstall` binary against stub package
//! managers on a private PATH

#![cfg(unix)]

use anyhow::bail;
use fs_err as fs;
use std::env;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::{io, str};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_python-autoinstall");

/// Returns the stdout lines of the successful process
fn handle_output(output: io::Result<Output>) -> anyhow::Result<Vec<String>> {
    match output {
        Ok(output) => {
            if !output.status.success() {
                bail!(
                    "Command failed: {}\n---stdout:\n{}\n---stderr:\n{}",
                    output.status,
                    String::from_utf8_lossy(&output.stdout),
                    String::from_utf8_lossy(&output.stderr)
                );
            }
            let stdout = str::from_utf8(&output.stdout)?;
            Ok(stdout.lines().map(ToString::to_string).collect())
        }
        Err(err) => Err(err.into()),
    }
}

struct StubbedJob {
    /// Keeps the tempdir alive for the duration of the test
    _dir: TempDir,
    project_dir: PathBuf,
    tools_dir: PathBuf,
    github_env: PathBuf,
}

impl StubbedJob {
    fn new(markers: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        let project_dir = dir.path().join("project");
        let tools_dir = dir.path().join("tools");
        fs::create_dir(&project_dir).unwrap();
        fs::create_dir(&tools_dir).unwrap();
        for marker in markers {
            fs::write(project_dir.join(marker), "").unwrap();
        }
        let github_env = dir.path().join("github_env");
        fs::write(&github_env, "").unwrap();
        Self {
            _dir: dir,
            project_dir,
            tools_dir,
            github_env,
        }
    }

    fn add_tool(&self, name: &str, body: &str) {
        let path = self.tools_dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn command(&self) -> Command {
        let path = format!(
            "{}:{}",
            self.tools_dir.display(),
            env::var("PATH").unwrap_or_default()
        );
        let mut command = Command::new(BIN);
        command
            .arg("/opt/codeql")
            .current_dir(&self.project_dir)
            .env("PATH", path)
            .env("GITHUB_ENV", &self.github_env)
            .env("RUNNER_WORKSPACE", self._dir.path());
        command
    }
}

#[test]
fn test_no_markers_sets_nothing() {
    let job = StubbedJob::new(&[]);
    let output = handle_output(job.command().output()).unwrap();
    // contains to ignore log formatting
    assert!(output
        .iter()
        .any(|line| line.contains("Was not able to install packages automatically")));
    assert_eq!(fs::read_to_string(&job.github_env).unwrap(), "");
}

#[test]
fn test_poetry_lock_selects_poetry() {
    let job = StubbedJob::new(&["poetry.lock", "requirements.txt", "setup.py"]);
    job.add_tool(
        "poetry",
        r#"case "$1" in
install) exit 0 ;;
run) echo /ws/virtualenvs/proj/bin/python ;;
esac"#,
    );
    handle_output(job.command().output()).unwrap();
    assert_eq!(
        fs::read_to_string(&job.github_env).unwrap(),
        "CODEQL_PYTHON=/ws/virtualenvs/proj/bin/python\n"
    );
}

#[test]
fn test_pipfile_lock_selects_locked_pipenv() {
    let job = StubbedJob::new(&["Pipfile", "Pipfile.lock"]);
    let args_log = job.tools_dir.join("install_args");
    job.add_tool(
        "pipenv",
        &format!(
            r#"case "$1" in
install) shift; echo "$@" > {} ;;
run) echo /ws/virtualenvs/proj/bin/python ;;
esac"#,
            args_log.display()
        ),
    );
    handle_output(job.command().output()).unwrap();
    assert_eq!(
        fs::read_to_string(&args_log).unwrap(),
        "--keep-outdated --ignore-pipfile\n"
    );
    assert_eq!(
        fs::read_to_string(&job.github_env).unwrap(),
        "CODEQL_PYTHON=/ws/virtualenvs/proj/bin/python\n"
    );
}

#[test]
fn test_failing_install_is_fatal() {
    let job = StubbedJob::new(&["poetry.lock"]);
    job.add_tool("poetry", "echo 'SolverProblemError' >&2; exit 1");
    let output = job.command().output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("package installation with poetry failed"));
    assert!(stderr.contains("SolverProblemError"));
    assert_eq!(fs::read_to_string(&job.github_env).unwrap(), "");
}

#[test]
fn test_requirements_txt_asks_version_detector() {
    let job = StubbedJob::new(&["requirements.txt"]);
    job.add_tool("extractor-version", "echo 'probing repo files' >&2; exit 1");
    let output = job
        .command()
        .args(["--version-detector", "extractor-version"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to detect the Python version for this project"));
}

#[test]
fn test_missing_base_dir_argument() {
    let output = Command::new(BIN).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CODEQL_BASE_DIR"));
}

#[test]
fn test_missing_tool_is_reported() {
    let job = StubbedJob::new(&["poetry.lock"]);
    // empty tools dir, poetry is nowhere on the stub PATH
    let output = job
        .command()
        .env("PATH", job.tools_dir.as_os_str())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Couldn't find poetry on PATH"));
}
