//! fixturegen CLI library.
//!
//! Argument-independent command implementations and output path resolution
//! for the `fixturegen` binary.

pub mod commands;
pub mod target;
