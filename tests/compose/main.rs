//! Integration tests for Layer 2: Composition
//!
//! Tests for complete units: nesting, interface lists, member variants,
//! delegated interfaces, and factory types.

mod delegation;
mod members;
