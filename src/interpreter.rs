//! Turning tool-reported interpreter locations into usable paths

use anyhow::Context;
use std::path::{Path, PathBuf};

/// Strips the msys-style drive prefix (`/d/foo/bar`) that poetry and pipenv
/// report on windows. Everything lives on the same drive as the runner
/// workspace, so dropping the two prefix characters is enough.
#[cfg_attr(not(windows), allow(dead_code))]
pub fn strip_msys_drive_prefix(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() > 2
        && bytes[0] == b'/'
        && bytes[1].is_ascii_alphabetic()
        && bytes[2] == b'/'
    {
        &path[2..]
    } else {
        path
    }
}

/// Extracts the interpreter path from `<tool> run which python` output.
///
/// Poetry puts warnings about mismatched global interpreters on stdout before
/// the path, so only the last non-empty line counts.
pub fn interpreter_from_output(output: &str) -> anyhow::Result<PathBuf> {
    let line = output
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .context("The tool didn't report an interpreter path")?;
    #[cfg(windows)]
    let line = strip_msys_drive_prefix(line);
    Ok(PathBuf::from(line))
}

/// `bin/` on unix, `Scripts/` on windows
pub fn venv_bin_dir(venv: &Path) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts")
    } else {
        venv.join("bin")
    }
}
