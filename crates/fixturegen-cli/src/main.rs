//! fixturegen - synthetic fixture generator for the visualization app
//!
//! Each subcommand regenerates one fixture file, overwriting any previous
//! version in full.

use clap::{Parser, Subcommand};
use fixturegen_core::{FlatDumpParams, LayerParams, OutputBase, StringArtParams};
use std::path::PathBuf;
use std::process::ExitCode;

use fixturegen_cli::commands;
use fixturegen_cli::target::TargetOptions;

/// fixturegen - Synthetic test fixture generation
#[derive(Parser)]
#[command(name = "fixturegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate string-art coordinates (public/dummy_string_art.json)
    StringArt {
        /// Number of points around the circle
        #[arg(long, default_value = "500")]
        num_points: u32,

        /// Circle radius in pixels
        #[arg(long, default_value = "200")]
        radius: f64,

        /// Circle center x coordinate
        #[arg(long, default_value = "250", allow_hyphen_values = true)]
        center_x: f64,

        /// Circle center y coordinate
        #[arg(long, default_value = "250", allow_hyphen_values = true)]
        center_y: f64,

        /// Index multiplier used to pick the next point
        #[arg(long, default_value = "137")]
        stride: u32,

        /// Project root (default: nearest ancestor containing package.json)
        #[arg(long)]
        project_root: Option<PathBuf>,

        /// Output file path (overrides project-relative resolution)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Output machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate per-layer brightness matrices (data/layers.txt)
    Layers {
        /// Base directory for data/layers.txt (project or cwd)
        #[arg(long, default_value = "project", value_parser = ["project", "cwd"])]
        relative_to: String,

        /// Matrix width
        #[arg(long, default_value = "28")]
        width: usize,

        /// Matrix height
        #[arg(long, default_value = "28")]
        height: usize,

        /// Seed for reproducible output (default: random)
        #[arg(long)]
        seed: Option<u64>,

        /// Project root (default: nearest ancestor containing package.json)
        #[arg(long)]
        project_root: Option<PathBuf>,

        /// Output file path (overrides base directory resolution)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Output machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write stacked brightness matrices as a list literal (layers.txt)
    FlatDump {
        /// Number of matrices
        #[arg(long, default_value = "5")]
        count: usize,

        /// Matrix width
        #[arg(long, default_value = "256")]
        width: usize,

        /// Matrix height
        #[arg(long, default_value = "256")]
        height: usize,

        /// Seed for reproducible output (default: random)
        #[arg(long)]
        seed: Option<u64>,

        /// Output file path (default: ./layers.txt)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Output machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Regenerate every fixture with default parameters
    All {
        /// Project root (default: nearest ancestor containing package.json)
        #[arg(long)]
        project_root: Option<PathBuf>,

        /// Seed for reproducible brightness data (default: random)
        #[arg(long)]
        seed: Option<u64>,

        /// Output machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::StringArt {
            num_points,
            radius,
            center_x,
            center_y,
            stride,
            project_root,
            out,
            json,
        } => {
            let params = StringArtParams {
                num_points,
                radius,
                center_x,
                center_y,
                stride,
            };
            let target = TargetOptions { project_root, out };
            commands::string_art::run(&params, &target, json)
        }
        Commands::Layers {
            relative_to,
            width,
            height,
            seed,
            project_root,
            out,
            json,
        } => {
            let base = relative_to
                .parse::<OutputBase>()
                .expect("clap should have validated relative_to");
            let params = LayerParams {
                width,
                height,
                seed,
            };
            let target = TargetOptions { project_root, out };
            commands::layers::run(&params, base, &target, json)
        }
        Commands::FlatDump {
            count,
            width,
            height,
            seed,
            out,
            json,
        } => {
            let params = FlatDumpParams {
                count,
                width,
                height,
                seed,
            };
            let target = TargetOptions {
                project_root: None,
                out,
            };
            commands::flat_dump::run(&params, &target, json)
        }
        Commands::All {
            project_root,
            seed,
            json,
        } => commands::all::run(project_root, seed, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
