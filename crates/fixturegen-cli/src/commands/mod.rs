//! CLI command implementations

pub mod all;
pub mod flat_dump;
pub mod json_output;
pub mod layers;
pub mod string_art;

mod reporting;
