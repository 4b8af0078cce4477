//! JSON output types for the `--json` flag.
//!
//! Each command prints exactly one [`GenerateSummary`] to stdout so scripts
//! can tell where fixtures landed without parsing colored text.

use fixturegen_core::{FixtureError, WrittenFile};
use serde::{Deserialize, Serialize};

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "FIXTURE_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&FixtureError> for JsonError {
    fn from(err: &FixtureError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

/// A fixture file that was written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub bytes: usize,
    pub blake3: String,
}

impl From<&WrittenFile> for GeneratedFile {
    fn from(file: &WrittenFile) -> Self {
        Self {
            path: file.path.display().to_string(),
            bytes: file.bytes,
            blake3: file.blake3.clone(),
        }
    }
}

/// Summary printed by every command in `--json` mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateSummary {
    pub success: bool,
    /// Subcommand that produced this summary (e.g., "string-art")
    pub command: String,
    /// Parameters the fixtures were generated with
    pub params: serde_json::Value,
    pub outputs: Vec<GeneratedFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl GenerateSummary {
    pub fn new(command: &str, params: serde_json::Value) -> Self {
        Self {
            success: true,
            command: command.to_string(),
            params,
            outputs: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Record one generator's outcome.
    pub fn record(&mut self, result: &Result<WrittenFile, FixtureError>) {
        match result {
            Ok(file) => self.outputs.push(file.into()),
            Err(err) => {
                self.success = false;
                self.errors.push(err.into());
            }
        }
    }

    /// Pretty-printed JSON, falling back to a minimal object if serialization fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("{{\"success\":false,\"error\":\"{}\"}}", e))
    }
}
