//! Fixture file emission.
//!
//! Every write truncates the target, so re-running a generator replaces the
//! previous fixture in full.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FixtureError;

/// Formatting and filesystem options for [`write_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonStyle {
    /// Spaces per indentation level.
    pub indent: usize,
    pub create_parent_dirs: bool,
}

impl JsonStyle {
    /// 2-space indent, parents created.
    pub fn coordinates() -> Self {
        Self {
            indent: 2,
            create_parent_dirs: true,
        }
    }

    /// 4-space indent, parents created.
    pub fn layers() -> Self {
        Self {
            indent: 4,
            create_parent_dirs: true,
        }
    }
}

/// A file that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
    /// BLAKE3 hex digest of the written content.
    pub blake3: String,
}

impl WrittenFile {
    fn new(path: &Path, content: &[u8]) -> Self {
        Self {
            path: path.to_path_buf(),
            bytes: content.len(),
            blake3: blake3::hash(content).to_hex().to_string(),
        }
    }
}

/// Serialize `value` as indented JSON.
pub fn to_json_string<T: Serialize>(value: &T, indent: usize) -> Result<String, FixtureError> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serialize `value` as indented JSON and write it to `path`.
pub fn write_json<T: Serialize>(
    path: &Path,
    value: &T,
    style: JsonStyle,
) -> Result<WrittenFile, FixtureError> {
    let content = to_json_string(value, style.indent)?;

    if style.create_parent_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| FixtureError::io(parent, e))?;
        }
    }

    fs::write(path, content.as_bytes()).map_err(|e| FixtureError::io(path, e))?;
    Ok(WrittenFile::new(path, content.as_bytes()))
}

/// Write `text` to `path` without creating any directories.
pub fn write_text(path: &Path, text: &str) -> Result<WrittenFile, FixtureError> {
    fs::write(path, text.as_bytes()).map_err(|e| FixtureError::io(path, e))?;
    Ok(WrittenFile::new(path, text.as_bytes()))
}
