//! The CI side of the boundary: environment variables we read and the
//! environment file we append to

use anyhow::Context;
use fs_err as fs;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// The environment variable later pipeline steps read the interpreter from
pub const CODEQL_PYTHON: &str = "CODEQL_PYTHON";

/// What the runner told us about the job, captured once at startup so the
/// core stays free of global state
#[derive(Debug, Clone, Default)]
pub struct CiEnv {
    /// `RUNNER_WORKSPACE`, a directory that survives between job steps
    pub runner_workspace: Option<PathBuf>,
    /// `GITHUB_ENV`, the file that carries environment variables to later steps
    pub github_env: Option<PathBuf>,
}

impl CiEnv {
    pub fn from_env() -> Self {
        Self {
            runner_workspace: env::var_os("RUNNER_WORKSPACE").map(PathBuf::from),
            github_env: env::var_os("GITHUB_ENV").map(PathBuf::from),
        }
    }

    fn runner_workspace(&self) -> anyhow::Result<&Path> {
        self.runner_workspace
            .as_deref()
            .context("RUNNER_WORKSPACE is not set")
    }

    /// Where poetry and pipenv venvs are relocated to on windows, the default
    /// location gets wiped between steps
    pub fn virtualenvs_dir(&self) -> anyhow::Result<PathBuf> {
        Ok(self.runner_workspace()?.join("virtualenvs"))
    }

    /// The venv for the plain pip strategies
    pub fn autoinstall_venv_dir(&self) -> anyhow::Result<PathBuf> {
        Ok(self
            .runner_workspace()?
            .join("codeql-action-python-autoinstall"))
    }
}

/// Appends `CODEQL_PYTHON=<interpreter>` to the CI environment file
pub fn export_codeql_python(env_file: &Path, interpreter: &Path) -> anyhow::Result<()> {
    info!("Setting {}={}", CODEQL_PYTHON, interpreter.display());
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(env_file)
        .context("Failed to open the CI environment file")?;
    writeln!(file, "{}={}", CODEQL_PYTHON, interpreter.display())
        .context("Failed to write to the CI environment file")?;
    Ok(())
}
