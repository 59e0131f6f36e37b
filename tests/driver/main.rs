//! Integration tests for Layer 3: Generation passes
//!
//! Tests for whole passes over snapshots, including persistence,
//! incremental reuse, and cancellation.

mod passes;
mod snapshots;
