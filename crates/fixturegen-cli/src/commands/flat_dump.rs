//! Flat-dump command implementation
//!
//! Writes stacked brightness matrices as a printed list literal to
//! `layers.txt` in the working directory. Unlike the JSON commands, a write
//! failure is not caught here and aborts the run.

use anyhow::{Context, Result};
use fixturegen_core::paths::FLAT_DUMP_PATH;
use fixturegen_core::{
    generate_flat_dump, write_text, FixtureError, FlatDumpParams, OutputBase, WrittenFile,
};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::GenerateSummary;
use super::reporting;
use crate::target::TargetOptions;

pub const COMMAND: &str = "flat-dump";

/// Run the flat-dump command
///
/// # Returns
/// Exit code: 0 success. Write errors are returned as `Err`.
pub fn run(params: &FlatDumpParams, target: &TargetOptions, json: bool) -> Result<ExitCode> {
    let resolved = target.resolve(OutputBase::WorkingDir, FLAT_DUMP_PATH)?;

    if !json {
        reporting::print_header(
            "Generating flat dump:",
            &format!(
                "{} matrices of {}x{}",
                params.count, params.width, params.height
            ),
        );
    }

    let file = write(params, &resolved.path)
        .with_context(|| format!("Failed to write flat dump: {}", resolved.path.display()))?;

    if json {
        let params_value =
            serde_json::to_value(params).context("Failed to serialize parameters")?;
        let mut summary = GenerateSummary::new(COMMAND, params_value);
        summary.record(&Ok(file));
        return Ok(reporting::finish(&summary, true));
    }

    reporting::print_success(&file);
    Ok(ExitCode::SUCCESS)
}

/// Generate the matrices and write their literal form to `path`.
pub fn write(params: &FlatDumpParams, path: &Path) -> Result<WrittenFile, FixtureError> {
    let dump = generate_flat_dump(params);
    write_text(path, &dump.to_literal())
}
