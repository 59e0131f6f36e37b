//! inlinegen - Ahead-of-time generator for C# inline collections
//!
//! This crate re-exports all layers of the inlinegen system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: inlinegen_driver     — Passes, snapshots, caching, CLI
//! Layer 2: inlinegen_compose    — Fragment catalog, member table, re-nesting
//!          inlinegen_usage      — Collection-expression size checks
//! Layer 1: inlinegen_model      — Raw declarations, validation, descriptors
//! Layer 0: inlinegen_foundation — Capabilities, diagnostics, errors
//! ```

pub use inlinegen_compose as compose;
pub use inlinegen_driver as driver;
pub use inlinegen_foundation as foundation;
pub use inlinegen_model as model;
pub use inlinegen_usage as usage;
