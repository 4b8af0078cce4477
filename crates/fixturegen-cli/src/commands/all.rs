//! All command implementation
//!
//! Regenerates every fixture in one pass: string art, layers (project
//! root) and the flat dump (working directory).

use anyhow::{Context, Result};
use fixturegen_core::paths::{FLAT_DUMP_PATH, LAYERS_PATH, STRING_ART_PATH};
use fixturegen_core::{FlatDumpParams, LayerParams, OutputBase, StringArtParams};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::json_output::GenerateSummary;
use super::{flat_dump, layers, reporting, string_art};
use crate::target::TargetOptions;

pub const COMMAND: &str = "all";

/// Run every generator with default parameters.
///
/// Continues past individual failures and exits 1 if any generator failed.
pub fn run(project_root: Option<PathBuf>, seed: Option<u64>, json: bool) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(run_in(&cwd, project_root, seed, json))
}

/// Same as [`run`], resolving relative paths against `cwd`.
pub fn run_in(cwd: &Path, project_root: Option<PathBuf>, seed: Option<u64>, json: bool) -> ExitCode {
    let target = TargetOptions {
        project_root,
        out: None,
    };

    let string_params = StringArtParams::default();
    let layer_params = LayerParams {
        seed,
        ..Default::default()
    };
    let dump_params = FlatDumpParams {
        seed,
        ..Default::default()
    };

    let mut summary = GenerateSummary::new(
        COMMAND,
        serde_json::json!({
            "string_art": string_params,
            "layers": layer_params,
            "flat_dump": dump_params,
        }),
    );

    if !json {
        reporting::print_header("Generating all fixtures", "");
    }

    let string_target = target.resolve_in(cwd, OutputBase::ProjectRoot, STRING_ART_PATH);
    if !json {
        reporting::print_target_warning(&string_target);
    }
    summary.warnings.extend(string_target.warning.clone());
    let result = string_art::write(&string_params, &string_target.path);
    if !json {
        reporting::print_outcome(&result);
    }
    summary.record(&result);

    // Marker discovery already warned above
    let layers_target = target.resolve_in(cwd, OutputBase::ProjectRoot, LAYERS_PATH);
    let result = layers::write(&layer_params, &layers_target.path);
    if !json {
        reporting::print_outcome(&result);
    }
    summary.record(&result);

    let dump_target = target.resolve_in(cwd, OutputBase::WorkingDir, FLAT_DUMP_PATH);
    let result = flat_dump::write(&dump_params, &dump_target.path);
    if !json {
        reporting::print_outcome(&result);
    }
    summary.record(&result);

    if !json {
        println!("{} of 3 fixtures written", summary.outputs.len());
    }

    reporting::finish(&summary, json)
}
