//! Declaration descriptors.
//!
//! A [`Descriptor`] is derived deterministically from a [`RawDeclaration`]:
//! the requested capabilities are closed, the declaration is validated, and
//! either the derived names are computed ([`ValidDescriptor`]) or only the
//! identity and diagnostics survive ([`RejectedDeclaration`]).

use std::collections::{HashMap, HashSet};

use inlinegen_foundation::{Capability, CapabilitySet, Diagnostic, close_with_report};
use tracing::debug;

use crate::types::{ContainerFrame, DeclarationId, ElementField, RawDeclaration};
use crate::validate::Validator;

/// Suffix of every generated factory type.
pub const FACTORY_SUFFIX: &str = "CollectionBuilder";

/// The outcome of validating one declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Descriptor {
    /// Passed validation; ready to compose.
    Valid(ValidDescriptor),
    /// Failed validation; carries only identity and diagnostics.
    Rejected(RejectedDeclaration),
}

impl Descriptor {
    /// Closes, validates, and derives names for a declaration.
    ///
    /// The caller must have checked the declaration's input contract
    /// ([`RawDeclaration::check_contract`]).
    #[must_use]
    pub fn build(decl: &RawDeclaration, validator: &Validator) -> Self {
        debug_assert!(decl.check_contract().is_ok(), "input contract violated");

        let closure = close_with_report(decl.capabilities);
        let diagnostics = validator.validate(decl, &closure);

        if !diagnostics.is_empty() {
            debug!(
                declaration = %decl.id,
                diagnostics = diagnostics.len(),
                "declaration rejected"
            );
            return Self::Rejected(RejectedDeclaration {
                id: decl.id.clone(),
                diagnostics,
            });
        }

        let Some(field) = decl.element_field() else {
            unreachable!("validator accepted a declaration without exactly one field")
        };
        #[allow(clippy::cast_sign_loss)]
        let length = decl.length as u32;

        debug!(
            declaration = %decl.id,
            capabilities = %closure.set,
            dropped_delegate = closure.dropped_delegate,
            "declaration accepted"
        );

        Self::Valid(ValidDescriptor {
            declaration: decl.clone(),
            capabilities: closure.set,
            dropped_delegate: closure.dropped_delegate,
            length,
            element: field.clone(),
            qualified_name: decl.qualified_name(),
            factory: decl
                .capabilities
                .contains(Capability::CollectionBuilder)
                .then(|| FactoryNames::derive(&decl.frames, &field.ty)),
        })
    }

    /// Identity of the declaration.
    #[must_use]
    pub fn id(&self) -> &DeclarationId {
        match self {
            Self::Valid(valid) => &valid.declaration.id,
            Self::Rejected(rejected) => &rejected.id,
        }
    }

    /// Diagnostics; empty for a valid descriptor.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Valid(_) => &[],
            Self::Rejected(rejected) => &rejected.diagnostics,
        }
    }

    /// Returns the valid descriptor, if validation passed.
    #[must_use]
    pub fn as_valid(&self) -> Option<&ValidDescriptor> {
        match self {
            Self::Valid(valid) => Some(valid),
            Self::Rejected(_) => None,
        }
    }

    /// Returns true if validation passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// A declaration that failed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedDeclaration {
    /// Identity of the declaration.
    pub id: DeclarationId,
    /// Every precondition the declaration violates. Never empty.
    pub diagnostics: Vec<Diagnostic>,
}

/// A declaration that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidDescriptor {
    declaration: RawDeclaration,
    capabilities: CapabilitySet,
    dropped_delegate: bool,
    length: u32,
    element: ElementField,
    qualified_name: String,
    factory: Option<FactoryNames>,
}

impl ValidDescriptor {
    /// Identity of the declaration.
    #[must_use]
    pub fn id(&self) -> &DeclarationId {
        &self.declaration.id
    }

    /// The raw declaration this descriptor was derived from.
    #[must_use]
    pub fn declaration(&self) -> &RawDeclaration {
        &self.declaration
    }

    /// The closed capability set.
    #[must_use]
    pub fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    /// True if the delegate capability was requested but dropped by the gate.
    #[must_use]
    pub fn dropped_delegate(&self) -> bool {
        self.dropped_delegate
    }

    /// Declared length. Always positive.
    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The element field.
    #[must_use]
    pub fn element(&self) -> &ElementField {
        &self.element
    }

    /// Containing namespace.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.declaration.namespace.as_deref()
    }

    /// All frames, outermost first.
    #[must_use]
    pub fn frames(&self) -> &[ContainerFrame] {
        &self.declaration.frames
    }

    /// The struct's own frame.
    #[must_use]
    pub fn innermost(&self) -> &ContainerFrame {
        self.declaration.innermost()
    }

    /// Qualified display name through every frame, e.g. `Outer<T>.Buffer`.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Factory-type names, present iff the collection builder is active.
    #[must_use]
    pub fn factory(&self) -> Option<&FactoryNames> {
        self.factory.as_ref()
    }
}

/// Derived names of the companion factory type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoryNames {
    /// Type name, e.g. `Outer_1_Buffer_CollectionBuilder`.
    pub name: String,
    /// One parameter per frame type parameter, outermost first. A parameter
    /// that repeats an enclosing frame's name is renamed, e.g. `T1`.
    pub type_parameters: Vec<String>,
    /// The collection type spelled with [`type_parameters`](Self::type_parameters),
    /// e.g. `Outer<T>.Buffer<T1>`.
    pub collection_type: String,
    /// The element type spelled with [`type_parameters`](Self::type_parameters).
    pub element_type: String,
}

impl FactoryNames {
    /// Derives the factory names from a frame chain and the element type.
    #[must_use]
    pub fn derive(frames: &[ContainerFrame], element_type: &str) -> Self {
        let declared: HashSet<&str> = frames
            .iter()
            .flat_map(|f| f.type_parameters.iter().map(String::as_str))
            .collect();

        let mut parts = Vec::with_capacity(frames.len() + 1);
        let mut type_parameters: Vec<String> = Vec::new();
        let mut segments = Vec::with_capacity(frames.len());
        // Innermost declaration of each name wins inside the struct.
        let mut in_scope: HashMap<&str, String> = HashMap::new();

        for frame in frames {
            if frame.arity() == 0 {
                parts.push(frame.name.clone());
                segments.push(frame.name.clone());
                continue;
            }
            parts.push(format!("{}_{}", frame.name, frame.arity()));

            let mut own = Vec::with_capacity(frame.arity());
            for parameter in &frame.type_parameters {
                let spelled = if type_parameters.contains(parameter) {
                    fresh_name(parameter, &declared, &type_parameters)
                } else {
                    parameter.clone()
                };
                in_scope.insert(parameter.as_str(), spelled.clone());
                type_parameters.push(spelled.clone());
                own.push(spelled);
            }
            segments.push(format!("{}<{}>", frame.name, own.join(", ")));
        }
        parts.push(FACTORY_SUFFIX.to_string());

        Self {
            name: parts.join("_"),
            type_parameters,
            collection_type: segments.join("."),
            element_type: rename_identifiers(element_type, &in_scope),
        }
    }

    /// The type-parameter list as source text, e.g. `<T, U>`; empty if none.
    #[must_use]
    pub fn type_parameter_list(&self) -> String {
        if self.type_parameters.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.type_parameters.join(", "))
        }
    }
}

fn fresh_name(base: &str, declared: &HashSet<&str>, taken: &[String]) -> String {
    (1..)
        .map(|n| format!("{base}{n}"))
        .find(|candidate| {
            !declared.contains(candidate.as_str()) && !taken.iter().any(|t| t == candidate)
        })
        .unwrap_or_else(|| unreachable!("unbounded candidate range"))
}

/// Replaces whole identifiers of `text` found in `names`.
fn rename_identifiers(text: &str, names: &HashMap<&str, String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut ident = String::new();
    let flush = |ident: &mut String, out: &mut String| {
        if !ident.is_empty() {
            out.push_str(names.get(ident.as_str()).map_or(ident.as_str(), String::as_str));
            ident.clear();
        }
    };
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == '@' {
            ident.push(ch);
        } else {
            flush(&mut ident, &mut out);
            out.push(ch);
        }
    }
    flush(&mut ident, &mut out);
    out
}
