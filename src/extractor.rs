//! The version-detection collaborator: an external program that guesses which
//! Python major version the repository targets, given the CodeQL base
//! directory. Only the plain pip strategies need it, poetry and pipenv bring
//! their own interpreter.

use crate::process::check_output;
use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PythonVersion {
    Two,
    Three,
}

impl PythonVersion {
    pub fn major(self) -> u8 {
        match self {
            PythonVersion::Two => 2,
            PythonVersion::Three => 3,
        }
    }

    pub fn from_major(major: &str) -> anyhow::Result<Self> {
        match major.trim() {
            "2" => Ok(PythonVersion::Two),
            "3" => Ok(PythonVersion::Three),
            other => bail!("Expected Python major version 2 or 3, got {:?}", other),
        }
    }
}

pub trait VersionDetector {
    fn detect(&self, codeql_base_dir: &Path) -> anyhow::Result<PythonVersion>;
}

/// Runs the detection program with the CodeQL base directory as argument and
/// reads the major version from its last stdout line
pub struct ExternalVersionDetector {
    program: PathBuf,
}

impl ExternalVersionDetector {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl VersionDetector for ExternalVersionDetector {
    fn detect(&self, codeql_base_dir: &Path) -> anyhow::Result<PythonVersion> {
        let output = check_output(Command::new(&self.program).arg(codeql_base_dir))
            .context("Failed to detect the Python version for this project")?;
        let major = output
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .with_context(|| {
                format!(
                    "{} didn't report a Python version",
                    self.program.display()
                )
            })?;
        PythonVersion::from_major(major)
    }
}
