//! Synthetic fixture generation for the layer and string-art visualizations.
//!
//! This crate computes the procedural data behind each fixture and writes it
//! to disk. It has no knowledge of command lines or console output; see
//! `fixturegen-cli` for that.
//!
//! # Fixtures
//!
//! - **String art**: points on a circle joined by a fixed-stride jump,
//!   written as `{"coordinates": [[x, y], ...]}`
//! - **Layers**: one random 28x28 brightness matrix per named network layer,
//!   written as `{"layers": [{"conv1": [[...]]}, ...]}`
//! - **Flat dump**: a stack of 256x256 brightness matrices written as a
//!   printed list literal
//!
//! # Example
//!
//! ```no_run
//! use fixturegen_core::{generate_string_art, write_json, JsonStyle, StringArtParams};
//! use std::path::Path;
//!
//! let doc = generate_string_art(&StringArtParams::default()).unwrap();
//! write_json(Path::new("public/dummy_string_art.json"), &doc, JsonStyle::coordinates()).unwrap();
//! ```
//!
//! # Randomness
//!
//! Brightness values are drawn from PCG32. Runs are unseeded by default;
//! passing a seed makes the output byte-identical across runs.

pub mod brightness;
pub mod error;
pub mod flat_dump;
pub mod layers;
pub mod output;
pub mod paths;
pub mod rng;
pub mod string_art;

// Re-export main types for convenience
pub use brightness::BrightnessMatrix;
pub use error::FixtureError;
pub use flat_dump::{generate_flat_dump, FlatDump, FlatDumpParams};
pub use layers::{build_layer_document, LayerDocument, LayerParams, LayerRecord, LAYER_NAMES};
pub use output::{write_json, write_text, JsonStyle, WrittenFile};
pub use paths::OutputBase;
pub use rng::FixtureRng;
pub use string_art::{generate_string_art, Point, StringArtDocument, StringArtParams};
