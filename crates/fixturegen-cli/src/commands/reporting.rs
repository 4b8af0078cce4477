use colored::Colorize;
use fixturegen_core::{FixtureError, WrittenFile};
use std::process::ExitCode;

use super::json_output::GenerateSummary;
use crate::target::ResolvedTarget;

/// Print the cyan header that opens a command's human output.
pub(crate) fn print_header(title: &str, detail: &str) {
    println!("{} {}", title.cyan().bold(), detail);
}

pub(crate) fn print_target_warning(target: &ResolvedTarget) {
    if let Some(warning) = &target.warning {
        println!("  {} {}", "!".yellow(), warning);
    }
}

/// Print a single generator outcome.
pub(crate) fn print_outcome(result: &Result<WrittenFile, FixtureError>) {
    match result {
        Ok(file) => print_success(file),
        Err(err) => print_failure(err),
    }
}

pub(crate) fn print_success(file: &WrittenFile) {
    println!(
        "{} Wrote {} ({} bytes, blake3 {})",
        "SUCCESS".green().bold(),
        file.path.display(),
        file.bytes,
        &file.blake3[..16.min(file.blake3.len())]
    );
}

pub(crate) fn print_failure(err: &FixtureError) {
    eprintln!("{} [{}] {}", "FAILED".red().bold(), err.code(), err);
    if let FixtureError::Io { .. } = err {
        eprintln!(
            "  {}",
            "Check that the output path exists and is writable.".dimmed()
        );
    }
}

/// Print the summary in `--json` mode.
///
/// Write failures were already reported, so the run still exits 0.
pub(crate) fn finish_reported(summary: &GenerateSummary, json: bool) -> ExitCode {
    if json {
        println!("{}", summary.to_json());
    }
    ExitCode::SUCCESS
}

/// Print the summary in `--json` mode and map success to an exit code.
pub(crate) fn finish(summary: &GenerateSummary, json: bool) -> ExitCode {
    if json {
        println!("{}", summary.to_json());
    }
    if summary.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
