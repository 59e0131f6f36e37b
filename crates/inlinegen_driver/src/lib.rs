//! Generation passes, snapshots, and the CLI for inlinegen.
//!
//! This crate provides:
//! - [`Snapshot`] - The host's view of one compilation, saved as `MessagePack`
//! - [`GeneratorConfig`] - Pass settings
//! - [`Generator`] - Runs a pass: validate, compose, check usage

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod generator;
pub mod snapshot;

pub use config::{ConfigFingerprint, GeneratorConfig};
pub use generator::{GenerationOutput, Generator, PassStats};
pub use snapshot::Snapshot;
