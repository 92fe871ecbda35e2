//! Installing the dependencies of a pipenv-managed project

use crate::ci::CiEnv;
use crate::interpreter::interpreter_from_output;
use crate::process::{check_call, check_output};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::Command;

/// `pipenv install`, locked when a `Pipfile.lock` is present, then asks
/// pipenv where its interpreter lives
pub fn install(project_dir: &Path, has_lockfile: bool, env: &CiEnv) -> anyhow::Result<PathBuf> {
    let pipenv = which::which("pipenv").context("Couldn't find pipenv on PATH")?;
    install_with(&pipenv, project_dir, has_lockfile, env)
}

pub(crate) fn install_with(
    pipenv: &Path,
    project_dir: &Path,
    has_lockfile: bool,
    env: &CiEnv,
) -> anyhow::Result<PathBuf> {
    let lock_args: &[&str] = if has_lockfile {
        &["--keep-outdated", "--ignore-pipfile"]
    } else {
        &["--skip-lock"]
    };
    check_call(command(pipenv, project_dir, env)?.arg("install").args(lock_args))
        .context("package installation with pipenv failed")?;

    let output = check_output(command(pipenv, project_dir, env)?.args(["run", "which", "python"]))
        .context("Failed to query pipenv for the interpreter path")?;
    interpreter_from_output(&output)
}

fn command(pipenv: &Path, project_dir: &Path, env: &CiEnv) -> anyhow::Result<Command> {
    let mut command = Command::new(pipenv);
    command.current_dir(project_dir);
    // The default venv location gets wiped between windows job steps
    if cfg!(windows) {
        command.env("WORKON_HOME", env.virtualenvs_dir()?);
    }
    Ok(command)
}
