//! The plain pip strategies: a fresh virtualenv in the durable workspace,
//! then either `pip install -r requirements.txt` or an editable install of
//! the project itself

use crate::ci::CiEnv;
use crate::extractor::PythonVersion;
use crate::interpreter::venv_bin_dir;
use crate::process::check_call;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

pub fn install_requirements_txt(
    project_dir: &Path,
    version: PythonVersion,
    env: &CiEnv,
) -> anyhow::Result<PathBuf> {
    let venv = create_venv(version, env)?;
    pip_install(
        &venv,
        project_dir,
        &["install", "-r", "requirements.txt"],
        "package installation with `pip install -r requirements.txt` failed",
    )
}

pub fn install_setup_py(
    project_dir: &Path,
    version: PythonVersion,
    env: &CiEnv,
) -> anyhow::Result<PathBuf> {
    let venv = create_venv(version, env)?;
    // An editable install over `python setup.py develop`, invoking setup.py
    // directly mishandles prereleases and leaves packages pip can't uninstall
    pip_install(
        &venv,
        project_dir,
        &["install", "-e", "."],
        "package installation with `pip install -e .` failed",
    )
}

/// Creates the venv in the durable workspace with the virtualenv package,
/// which unlike `python -m venv` ships current pip/setuptools/wheel
fn create_venv(version: PythonVersion, env: &CiEnv) -> anyhow::Result<PathBuf> {
    let venv = env.autoinstall_venv_dir()?;
    info!("Creating venv in {}", venv.display());
    let mut command = if cfg!(windows) {
        let mut py = Command::new("py");
        py.arg(format!("-{}", version.major()));
        py
    } else {
        Command::new(format!("python{}", version.major()))
    };
    command.args(["-m", "virtualenv"]).arg(&venv);
    check_call(&mut command).context("Failed to create a virtualenv")?;
    Ok(venv)
}

fn pip_install(
    venv: &Path,
    project_dir: &Path,
    args: &[&str],
    diagnostic: &'static str,
) -> anyhow::Result<PathBuf> {
    let bin_dir = venv_bin_dir(venv);
    check_call(
        Command::new(bin_dir.join("pip"))
            .current_dir(project_dir)
            .args(args),
    )
    .context(diagnostic)?;
    Ok(bin_dir.join("python"))
}
