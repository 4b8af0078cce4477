//! String-art command implementation
//!
//! Writes circle chord coordinates to `<project>/public/dummy_string_art.json`.

use anyhow::{Context, Result};
use fixturegen_core::paths::STRING_ART_PATH;
use fixturegen_core::{
    generate_string_art, write_json, FixtureError, JsonStyle, OutputBase, StringArtParams,
    WrittenFile,
};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::GenerateSummary;
use super::reporting;
use crate::target::TargetOptions;

pub const COMMAND: &str = "string-art";

/// Run the string-art command
///
/// Write failures are reported, not propagated. Invalid parameters are
/// returned as `Err`.
///
/// # Returns
/// Exit code: 0 whether or not the write succeeded
pub fn run(params: &StringArtParams, target: &TargetOptions, json: bool) -> Result<ExitCode> {
    let resolved = target.resolve(OutputBase::ProjectRoot, STRING_ART_PATH)?;
    let params_value = serde_json::to_value(params).context("Failed to serialize parameters")?;
    let mut summary = GenerateSummary::new(COMMAND, params_value);
    summary.warnings.extend(resolved.warning.clone());

    if !json {
        reporting::print_header(
            "Generating string art:",
            &format!("{} points, stride {}", params.num_points, params.stride),
        );
        reporting::print_target_warning(&resolved);
    }

    let doc = generate_string_art(params).context("Invalid string-art parameters")?;
    let result = write_json(&resolved.path, &doc, JsonStyle::coordinates());
    if !json {
        reporting::print_outcome(&result);
    }
    summary.record(&result);

    Ok(reporting::finish_reported(&summary, json))
}

/// Generate the coordinate document and write it to `path`.
pub fn write(params: &StringArtParams, path: &Path) -> Result<WrittenFile, FixtureError> {
    let doc = generate_string_art(params)?;
    write_json(path, &doc, JsonStyle::coordinates())
}
