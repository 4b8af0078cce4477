//! Error types for fixture generation and emission.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from generating or writing fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Could not find '{marker}' in the ancestry of {}", .start.display())]
    ProjectRootNotFound { marker: &'static str, start: PathBuf },
}

impl FixtureError {
    /// Wraps an IO error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            FixtureError::Io { .. } => "FIXTURE_001",
            FixtureError::Json(_) => "FIXTURE_002",
            FixtureError::InvalidParameter(_) => "FIXTURE_003",
            FixtureError::ProjectRootNotFound { .. } => "FIXTURE_004",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            FixtureError::io("a", std::io::Error::other("x")),
            FixtureError::InvalidParameter("num_points".to_string()),
            FixtureError::ProjectRootNotFound {
                marker: "package.json",
                start: PathBuf::from("/tmp"),
            },
        ];
        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes, ["FIXTURE_001", "FIXTURE_003", "FIXTURE_004"]);
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = FixtureError::io("data/layers.txt", std::io::Error::other("denied"));
        let msg = err.to_string();
        assert!(msg.contains("data/layers.txt"));
        assert!(msg.contains("denied"));
    }
}
