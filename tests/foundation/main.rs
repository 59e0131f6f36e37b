//! Integration tests for Layer 0: Foundation
//!
//! Tests for capabilities, closure, diagnostics, and errors.

mod capabilities;
mod diagnostics;
mod errors;
