//! Detecting which dependency manager a project uses from its marker files

use std::fmt;
use std::path::Path;

/// A file whose presence in the project root signals the dependency manager.
///
/// Declaration order is the selection priority. Projects carrying several
/// markers at once (say `setup.py` next to `requirements.txt`) get no warning,
/// the first match simply wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectMarker {
    PoetryLock,
    PipfileLock,
    Pipfile,
    RequirementsTxt,
    SetupPy,
}

impl ProjectMarker {
    const PRIORITY: [ProjectMarker; 5] = [
        ProjectMarker::PoetryLock,
        ProjectMarker::PipfileLock,
        ProjectMarker::Pipfile,
        ProjectMarker::RequirementsTxt,
        ProjectMarker::SetupPy,
    ];

    pub fn filename(&self) -> &'static str {
        match self {
            ProjectMarker::PoetryLock => "poetry.lock",
            ProjectMarker::PipfileLock => "Pipfile.lock",
            ProjectMarker::Pipfile => "Pipfile",
            ProjectMarker::RequirementsTxt => "requirements.txt",
            ProjectMarker::SetupPy => "setup.py",
        }
    }

    /// Returns the highest-priority marker present in `project_dir`, if any
    pub fn detect(project_dir: &Path) -> Option<ProjectMarker> {
        Self::PRIORITY
            .into_iter()
            .find(|marker| project_dir.join(marker.filename()).is_file())
    }
}

impl fmt::Display for ProjectMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filename())
    }
}
