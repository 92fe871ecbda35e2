pub use crate::ci::{export_codeql_python, CiEnv, CODEQL_PYTHON};
pub use crate::extractor::{ExternalVersionDetector, PythonVersion, VersionDetector};
pub use crate::install::select_and_install;
pub use crate::markers::ProjectMarker;
pub use crate::process::ProcessError;

mod ci;
mod extractor;
mod install;
mod interpreter;
mod markers;
mod pip;
mod pipenv;
mod poetry;
mod process;
