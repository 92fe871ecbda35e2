//! The installer selector: one marker file decides, one strategy runs

use crate::ci::CiEnv;
use crate::extractor::VersionDetector;
use crate::markers::ProjectMarker;
use crate::{pip, pipenv, poetry};
use std::path::{Path, PathBuf};
use tracing::info;

/// Picks the installation strategy from the project's marker files, runs it
/// and returns the interpreter of the environment it set up.
///
/// `Ok(None)` means no marker was recognized; the caller continues without an
/// auto-selected interpreter. Every install failure is fatal, there are no
/// retries and no fallback to the next strategy.
pub fn select_and_install(
    project_dir: &Path,
    codeql_base_dir: &Path,
    detector: &dyn VersionDetector,
    env: &CiEnv,
) -> anyhow::Result<Option<PathBuf>> {
    let marker = match ProjectMarker::detect(project_dir) {
        Some(marker) => marker,
        None => {
            info!("Was not able to install packages automatically");
            return Ok(None);
        }
    };

    let interpreter = match marker {
        ProjectMarker::PoetryLock => {
            info!("Found poetry.lock, will install packages with poetry");
            poetry::install(project_dir, env)?
        }
        ProjectMarker::PipfileLock => {
            info!("Found Pipfile.lock, will install packages with pipenv");
            pipenv::install(project_dir, true, env)?
        }
        ProjectMarker::Pipfile => {
            info!("Found Pipfile, will install packages with pipenv");
            pipenv::install(project_dir, false, env)?
        }
        ProjectMarker::RequirementsTxt => {
            info!("Found requirements.txt, will install packages with pip");
            let version = detector.detect(codeql_base_dir)?;
            pip::install_requirements_txt(project_dir, version, env)?
        }
        ProjectMarker::SetupPy => {
            info!("Found setup.py, will install the package with pip in editable mode");
            let version = detector.detect(codeql_base_dir)?;
            pip::install_setup_py(project_dir, version, env)?
        }
    };
    Ok(Some(interpreter))
}
