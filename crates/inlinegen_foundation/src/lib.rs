//! Capabilities, closure rules, diagnostics, and errors for inlinegen.
//!
//! This crate provides:
//! - [`Capability`] and [`CapabilitySet`] - The optional behaviors a declaration can request
//! - [`close`] - Transitive closure of the capability implication graph
//! - [`Diagnostic`] - User-facing problems with stable codes
//! - [`Error`] - Integration errors (malformed input, cancellation)
//! - [`CancellationToken`] - Cooperative cancellation between units of work

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cancel;
pub mod capability;
pub mod diagnostic;
pub mod error;
pub mod location;

pub use cancel::CancellationToken;
pub use capability::{Capability, CapabilitySet, Closure, close, close_with_report};
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use location::Location;
