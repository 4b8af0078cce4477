//! Resolution of where a fixture file lands.

use anyhow::{Context, Result};
use fixturegen_core::paths::{self, OutputBase};
use std::path::{Path, PathBuf};

/// Output location flags shared by every command.
#[derive(Debug, Clone, Default)]
pub struct TargetOptions {
    /// Explicit project root (skips marker discovery).
    pub project_root: Option<PathBuf>,
    /// Explicit output file (skips all resolution).
    pub out: Option<PathBuf>,
}

/// A resolved output path, plus a warning when resolution had to fall back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: PathBuf,
    pub warning: Option<String>,
}

impl TargetOptions {
    /// Resolve `relative` against the current working directory.
    pub fn resolve(&self, base: OutputBase, relative: &str) -> Result<ResolvedTarget> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Ok(self.resolve_in(&cwd, base, relative))
    }

    /// Resolve `relative` as if the working directory were `cwd`.
    pub fn resolve_in(&self, cwd: &Path, base: OutputBase, relative: &str) -> ResolvedTarget {
        if let Some(out) = &self.out {
            return ResolvedTarget {
                path: cwd.join(out),
                warning: None,
            };
        }

        let mut warning = None;
        let project_root = match (base, &self.project_root) {
            (OutputBase::WorkingDir, _) => cwd.to_path_buf(),
            (OutputBase::ProjectRoot, Some(root)) => cwd.join(root),
            (OutputBase::ProjectRoot, None) => match paths::find_project_root_from(cwd) {
                Ok(root) => root,
                Err(e) => {
                    warning = Some(format!(
                        "{} [{}]; writing relative to the current directory",
                        e,
                        e.code()
                    ));
                    cwd.to_path_buf()
                }
            },
        };

        ResolvedTarget {
            path: paths::resolve(base, &project_root, cwd, relative),
            warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixturegen_core::paths::{LAYERS_PATH, PROJECT_MARKER, STRING_ART_PATH};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_out_overrides_everything() {
        let opts = TargetOptions {
            project_root: Some(PathBuf::from("/repo")),
            out: Some(PathBuf::from("custom.json")),
        };
        let resolved = opts.resolve_in(Path::new("/work"), OutputBase::ProjectRoot, STRING_ART_PATH);
        assert_eq!(resolved.path, PathBuf::from("/work/custom.json"));
        assert_eq!(resolved.warning, None);
    }

    #[test]
    fn test_explicit_project_root() {
        let opts = TargetOptions {
            project_root: Some(PathBuf::from("/repo")),
            out: None,
        };
        let resolved = opts.resolve_in(Path::new("/work"), OutputBase::ProjectRoot, LAYERS_PATH);
        assert_eq!(resolved.path, PathBuf::from("/repo/data/layers.txt"));
    }

    #[test]
    fn test_working_dir_ignores_project_root() {
        let opts = TargetOptions {
            project_root: Some(PathBuf::from("/repo")),
            out: None,
        };
        let resolved = opts.resolve_in(Path::new("/work"), OutputBase::WorkingDir, LAYERS_PATH);
        assert_eq!(resolved.path, PathBuf::from("/work/data/layers.txt"));
    }

    #[test]
    fn test_discovers_marker() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_MARKER), "{}").unwrap();
        let nested = dir.path().join("src").join("app");
        std::fs::create_dir_all(&nested).unwrap();

        let resolved =
            TargetOptions::default().resolve_in(&nested, OutputBase::ProjectRoot, STRING_ART_PATH);
        assert_eq!(resolved.path, dir.path().join(STRING_ART_PATH));
        assert_eq!(resolved.warning, None);
    }

    #[test]
    fn test_missing_marker_falls_back_to_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().join("outside");
        std::fs::create_dir_all(&cwd).unwrap();

        // A package.json above the temp root would be found first; the
        // fallback cannot be observed on such a machine.
        if paths::find_project_root_from(&cwd).is_ok() {
            return;
        }

        let resolved =
            TargetOptions::default().resolve_in(&cwd, OutputBase::ProjectRoot, STRING_ART_PATH);
        assert_eq!(resolved.path, cwd.join("public").join("dummy_string_art.json"));
        let warning = resolved.warning.expect("fallback should warn");
        assert!(warning.contains(PROJECT_MARKER));
        assert!(warning.contains("FIXTURE_004"));
    }
}
