//! Precondition validation.
//!
//! Every rule is evaluated; one failing rule never hides another. The
//! resulting list gates composition: a declaration with any diagnostic is
//! never assembled.

use inlinegen_foundation::{Capability, Closure, Diagnostic, DiagnosticCode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::RawDeclaration;

/// What to do when the delegate capability is requested but there is no
/// interface for the helper type to implement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DelegatePolicy {
    /// Drop the capability and generate as if it was never requested.
    #[default]
    Downgrade,
    /// Report [`DiagnosticCode::DelegateWithoutInterfaces`].
    Diagnose,
}

/// Checks raw declarations against the generator's preconditions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Validator {
    delegate_policy: DelegatePolicy,
}

impl Validator {
    /// Creates a validator with the given delegate policy.
    #[must_use]
    pub const fn new(delegate_policy: DelegatePolicy) -> Self {
        Self { delegate_policy }
    }

    /// The configured delegate policy.
    #[must_use]
    pub const fn delegate_policy(&self) -> DelegatePolicy {
        self.delegate_policy
    }

    /// Validates a declaration. `closure` is the closure of its requested
    /// capabilities.
    #[must_use]
    pub fn validate(&self, decl: &RawDeclaration, closure: &Closure) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let innermost = decl.innermost();

        if decl.capabilities.contains(Capability::CollectionBuilder)
            && decl.frames.iter().any(|f| !f.is_public_or_internal())
        {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::BuilderInaccessible,
                decl.location.clone(),
            ));
        }

        if decl.length <= 0 {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::InvalidLength,
                decl.location.clone(),
            ));
        }

        if innermost.is_file_local() {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::FileLocalForbidden,
                innermost.location.clone(),
            ));
        }

        for (index, frame) in decl.frames.iter().enumerate() {
            if !frame.is_partial() {
                diagnostics.push(
                    Diagnostic::new(DiagnosticCode::NotPartial, frame.location.clone())
                        .with_arg(decl.qualified_name_at(index)),
                );
            }
        }

        if innermost.is_readonly() {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::ReadOnlyForbidden,
                decl.location.clone(),
            ));
        }

        match decl.element_field() {
            None => diagnostics.push(Diagnostic::new(
                DiagnosticCode::WrongFieldCount,
                decl.location.clone(),
            )),
            Some(field) if field.has_disallowed_modifiers() => diagnostics.push(Diagnostic::new(
                DiagnosticCode::BadFieldModifiers,
                field.location.clone(),
            )),
            Some(_) => {}
        }

        if closure.dropped_delegate && self.delegate_policy == DelegatePolicy::Diagnose {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::DelegateWithoutInterfaces,
                decl.location.clone(),
            ));
        }

        diagnostics
    }
}
