//! Layers command implementation
//!
//! Writes one brightness matrix per network layer to `data/layers.txt`,
//! under either the project root or the working directory.

use anyhow::{Context, Result};
use fixturegen_core::paths::LAYERS_PATH;
use fixturegen_core::{
    build_layer_document, write_json, FixtureError, JsonStyle, LayerParams, OutputBase,
    WrittenFile, LAYER_NAMES,
};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::GenerateSummary;
use super::reporting;
use crate::target::TargetOptions;

pub const COMMAND: &str = "layers";

/// Run the layers command
///
/// # Arguments
/// * `params` - Matrix size and optional seed
/// * `base` - Whether `data/layers.txt` is placed under the project root or the cwd
/// * `target` - Output location overrides
/// * `json` - Print a machine-readable summary instead of colored text
///
/// # Returns
/// Exit code: 0 whether or not the write succeeded
pub fn run(
    params: &LayerParams,
    base: OutputBase,
    target: &TargetOptions,
    json: bool,
) -> Result<ExitCode> {
    let resolved = target.resolve(base, LAYERS_PATH)?;
    let params_value = serde_json::to_value(params).context("Failed to serialize parameters")?;
    let mut summary = GenerateSummary::new(COMMAND, params_value);
    summary.warnings.extend(resolved.warning.clone());

    if !json {
        reporting::print_header(
            "Generating layers:",
            &format!(
                "{} layers of {}x{}",
                LAYER_NAMES.len(),
                params.width,
                params.height
            ),
        );
        reporting::print_target_warning(&resolved);
    }

    let result = write(params, &resolved.path);
    if !json {
        reporting::print_outcome(&result);
    }
    summary.record(&result);

    Ok(reporting::finish_reported(&summary, json))
}

/// Build the layer document for [`LAYER_NAMES`] and write it to `path`.
pub fn write(params: &LayerParams, path: &Path) -> Result<WrittenFile, FixtureError> {
    let doc = build_layer_document(&LAYER_NAMES, params);
    write_json(path, &doc, JsonStyle::layers())
}
