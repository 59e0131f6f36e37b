//! Raw declaration value types.
//!
//! These are the immutable snapshots the ingestion adapter produces from the
//! host compiler's symbol model. The core never looks past them.

use std::fmt;
use std::str::FromStr;

use inlinegen_foundation::{CapabilitySet, Error, Location, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Identity
// =============================================================================

/// Stable identity of a declared type (its metadata name, e.g.
/// `Demo.Outer`1+Buffer`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DeclarationId(String);

impl DeclarationId {
    /// Creates an identity.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeclarationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DeclarationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// Container Frames
// =============================================================================

/// A type-declaration modifier keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Modifier {
    /// `public`
    Public,
    /// `internal`
    Internal,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `file`
    File,
    /// `static`
    Static,
    /// `sealed`
    Sealed,
    /// `abstract`
    Abstract,
    /// `unsafe`
    Unsafe,
    /// `new`
    New,
    /// `readonly`
    Readonly,
    /// `ref`
    Ref,
    /// `partial`
    Partial,
}

impl Modifier {
    /// The source keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::File => "file",
            Self::Static => "static",
            Self::Sealed => "sealed",
            Self::Abstract => "abstract",
            Self::Unsafe => "unsafe",
            Self::New => "new",
            Self::Readonly => "readonly",
            Self::Ref => "ref",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Modifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "public" => Self::Public,
            "internal" => Self::Internal,
            "protected" => Self::Protected,
            "private" => Self::Private,
            "file" => Self::File,
            "static" => Self::Static,
            "sealed" => Self::Sealed,
            "abstract" => Self::Abstract,
            "unsafe" => Self::Unsafe,
            "new" => Self::New,
            "readonly" => Self::Readonly,
            "ref" => Self::Ref,
            "partial" => Self::Partial,
            other => return Err(Error::malformed(format!("unknown modifier `{other}`"))),
        })
    }
}

/// The declaration kind of a container frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeclarationKind {
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `struct`
    Struct,
    /// `record class` (also written plain `record`)
    RecordClass,
    /// `record struct`
    RecordStruct,
}

impl DeclarationKind {
    /// The keyword(s) that introduce a declaration of this kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Struct => "struct",
            Self::RecordClass => "record class",
            Self::RecordStruct => "record struct",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One level of enclosing type. The innermost frame is the inline
/// collection struct itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerFrame {
    /// Simple name, without type parameters.
    pub name: String,
    /// The frame's own generic type parameters.
    pub type_parameters: Vec<String>,
    /// Declaration kind.
    pub kind: DeclarationKind,
    /// Modifiers in source order.
    pub modifiers: Vec<Modifier>,
    /// Location of the type declaration.
    pub location: Location,
}

impl ContainerFrame {
    /// Creates a frame with no modifiers or type parameters.
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            kind,
            modifiers: Vec::new(),
            location: Location::none(),
        }
    }

    /// Builder method to set modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers = modifiers.into_iter().collect();
        self
    }

    /// Builder method to set generic type parameters.
    #[must_use]
    pub fn with_type_parameters<S: Into<String>>(
        mut self,
        parameters: impl IntoIterator<Item = S>,
    ) -> Self {
        self.type_parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Number of generic type parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.type_parameters.len()
    }

    /// Name with its type-parameter list, e.g. `Outer<TKey, TValue>`.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.type_parameters.is_empty() {
            self.name.clone()
        } else {
            format!("{}<{}>", self.name, self.type_parameters.join(", "))
        }
    }

    /// Modifiers as source text, e.g. `public partial`.
    #[must_use]
    pub fn modifier_text(&self) -> String {
        self.modifiers
            .iter()
            .map(|m| m.keyword())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns true if the frame carries the given modifier.
    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Returns true if the declaration is `partial`.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.has_modifier(Modifier::Partial)
    }

    /// Returns true if the declaration is `readonly`.
    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.has_modifier(Modifier::Readonly)
    }

    /// Returns true if the leading accessibility modifier is `public` or
    /// `internal`. A frame with no explicit accessibility does not qualify.
    #[must_use]
    pub fn is_public_or_internal(&self) -> bool {
        matches!(
            self.modifiers.first(),
            Some(Modifier::Public | Modifier::Internal)
        )
    }

    /// Returns true if the declaration is file-local.
    #[must_use]
    pub fn is_file_local(&self) -> bool {
        self.modifiers.first() == Some(&Modifier::File)
    }
}

// =============================================================================
// Element Field
// =============================================================================

/// An instance field declared on the collection struct.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementField {
    /// Field name.
    pub name: String,
    /// Element type as display text, e.g. `int` or `global::Demo.Point`.
    pub ty: String,
    /// `required`
    pub required: bool,
    /// `readonly`
    pub readonly: bool,
    /// `volatile`
    pub volatile: bool,
    /// `fixed` size buffer.
    pub fixed_buffer: bool,
    /// Location of the field declaration.
    pub location: Location,
}

impl ElementField {
    /// Creates a field with no modifiers.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: false,
            readonly: false,
            volatile: false,
            fixed_buffer: false,
            location: Location::none(),
        }
    }

    /// Builder method to set the location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Returns true if any modifier that an inline array element forbids is set.
    #[must_use]
    pub fn has_disallowed_modifiers(&self) -> bool {
        self.required || self.readonly || self.volatile || self.fixed_buffer
    }
}

// =============================================================================
// Raw Declaration
// =============================================================================

/// Everything the host reports about one annotated struct.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawDeclaration {
    /// Stable identity.
    pub id: DeclarationId,
    /// Containing namespace; `None` for the global namespace.
    pub namespace: Option<String>,
    /// Container frames, outermost first. The last frame is the struct itself.
    pub frames: Vec<ContainerFrame>,
    /// Instance fields declared on the struct.
    pub fields: Vec<ElementField>,
    /// Requested length; the host reports `-1` when none was given.
    pub length: i32,
    /// Requested capabilities, before closure.
    pub capabilities: CapabilitySet,
    /// Location of the declaration.
    pub location: Location,
}

impl RawDeclaration {
    /// Creates a declaration from its identity and innermost frame.
    pub fn new(id: impl Into<DeclarationId>, frame: ContainerFrame) -> Self {
        Self {
            id: id.into(),
            namespace: None,
            frames: vec![frame],
            fields: Vec::new(),
            length: -1,
            capabilities: CapabilitySet::empty(),
            location: Location::none(),
        }
    }

    /// Builder method to set the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Builder method to add an enclosing frame outside all existing ones.
    #[must_use]
    pub fn within(mut self, frame: ContainerFrame) -> Self {
        self.frames.insert(0, frame);
        self
    }

    /// Builder method to add an instance field.
    #[must_use]
    pub fn with_field(mut self, field: ElementField) -> Self {
        self.fields.push(field);
        self
    }

    /// Builder method to set the length.
    #[must_use]
    pub fn with_length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    /// Builder method to set the requested capabilities.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: impl Into<CapabilitySet>) -> Self {
        self.capabilities = capabilities.into();
        self
    }

    /// Builder method to set the requested capabilities from raw attribute bits.
    #[must_use]
    pub fn with_capability_bits(mut self, bits: i32) -> Self {
        self.capabilities = CapabilitySet::from_bits(bits);
        self
    }

    /// Builder method to set the location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// The collection struct's own frame.
    ///
    /// # Panics
    ///
    /// Panics if the frame chain is empty, which [`check_contract`](Self::check_contract) rejects.
    #[must_use]
    pub fn innermost(&self) -> &ContainerFrame {
        self.frames
            .last()
            .expect("declaration has at least its own frame")
    }

    /// Frames enclosing the struct, outermost first.
    #[must_use]
    pub fn containers(&self) -> &[ContainerFrame] {
        &self.frames[..self.frames.len().saturating_sub(1)]
    }

    /// The single element field, if exactly one instance field exists.
    #[must_use]
    pub fn element_field(&self) -> Option<&ElementField> {
        match self.fields.as_slice() {
            [field] => Some(field),
            _ => None,
        }
    }

    /// Qualified display name of the frame at `index`, e.g. `Outer<T>.Inner`.
    #[must_use]
    pub fn qualified_name_at(&self, index: usize) -> String {
        self.frames[..=index]
            .iter()
            .map(ContainerFrame::display_name)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Qualified display name of the struct, e.g. `Outer<T>.Buffer`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        self.qualified_name_at(self.frames.len().saturating_sub(1))
    }

    /// Verifies the guarantees the host collaborator owes us.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInput`](inlinegen_foundation::ErrorKind::MalformedInput)
    /// if the identity is empty, the frame chain is empty, or a frame has no name.
    pub fn check_contract(&self) -> Result<()> {
        if self.id.as_str().is_empty() {
            return Err(Error::malformed("declaration identity is empty"));
        }
        if self.frames.is_empty() {
            return Err(Error::malformed(format!(
                "declaration {} has no container frames",
                self.id
            )));
        }
        if let Some(frame) = self.frames.iter().find(|f| f.name.is_empty()) {
            return Err(Error::malformed(format!(
                "declaration {} has an unnamed {} frame",
                self.id, frame.kind
            )));
        }
        Ok(())
    }
}
