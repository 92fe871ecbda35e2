//! Installing the dependencies of a poetry-managed project

use crate::ci::CiEnv;
use crate::interpreter::interpreter_from_output;
use crate::process::{check_call, check_output};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::Command;

/// `poetry install --no-root`, then asks poetry where its interpreter lives
pub fn install(project_dir: &Path, env: &CiEnv) -> anyhow::Result<PathBuf> {
    let poetry = which::which("poetry").context("Couldn't find poetry on PATH")?;
    install_with(&poetry, project_dir, env)
}

pub(crate) fn install_with(
    poetry: &Path,
    project_dir: &Path,
    env: &CiEnv,
) -> anyhow::Result<PathBuf> {
    check_call(command(poetry, project_dir, env)?.args(["install", "--no-root"]))
        .context("package installation with poetry failed")?;

    // `poetry run` chats on stdout when the global interpreter doesn't match
    // the venv's, so the path is only the last line of the output
    let output = check_output(command(poetry, project_dir, env)?.args(["run", "which", "python"]))
        .context("Failed to query poetry for the interpreter path")?;
    interpreter_from_output(&output)
}

fn command(poetry: &Path, project_dir: &Path, env: &CiEnv) -> anyhow::Result<Command> {
    let mut command = Command::new(poetry);
    command.current_dir(project_dir);
    // The default venv location gets wiped between windows job steps
    if cfg!(windows) {
        command.env("POETRY_VIRTUALENVS_PATH", env.virtualenvs_dir()?);
    }
    Ok(command)
}
