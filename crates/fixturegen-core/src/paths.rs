//! Output path resolution.
//!
//! Fixtures land either under the visualization project's root (found by
//! walking up to its `package.json`) or under the working directory.

use std::path::{Path, PathBuf};

use crate::error::FixtureError;

/// File that marks the root of the consuming project.
pub const PROJECT_MARKER: &str = "package.json";

/// String-art coordinates, relative to the project root.
pub const STRING_ART_PATH: &str = "public/dummy_string_art.json";

/// Layer brightness document, relative to the chosen base.
pub const LAYERS_PATH: &str = "data/layers.txt";

/// Flat dump, relative to the working directory.
pub const FLAT_DUMP_PATH: &str = "layers.txt";

/// Base directory a relative fixture path is joined onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputBase {
    ProjectRoot,
    WorkingDir,
}

impl std::str::FromStr for OutputBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(OutputBase::ProjectRoot),
            "cwd" => Ok(OutputBase::WorkingDir),
            other => Err(format!(
                "Unknown output base '{}'. Expected 'project' or 'cwd'",
                other
            )),
        }
    }
}

/// Walk up from `start` until a directory containing [`PROJECT_MARKER`] is found.
pub fn find_project_root_from(start: &Path) -> Result<PathBuf, FixtureError> {
    let mut dir = start.to_path_buf();

    loop {
        if dir.join(PROJECT_MARKER).is_file() {
            return Ok(dir);
        }
        if !dir.pop() {
            break;
        }
    }

    Err(FixtureError::ProjectRootNotFound {
        marker: PROJECT_MARKER,
        start: start.to_path_buf(),
    })
}

/// Join `relative` onto the directory selected by `base`.
pub fn resolve(base: OutputBase, project_root: &Path, cwd: &Path, relative: &str) -> PathBuf {
    match base {
        OutputBase::ProjectRoot => project_root.join(relative),
        OutputBase::WorkingDir => cwd.join(relative),
    }
}
