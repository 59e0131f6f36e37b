//! Diagnostics reported to the user.
//!
//! The [`DiagnosticCode`] catalog is the stable contract surface; message
//! text is informational and may change.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// Does not block anything.
    Warning,
    /// Blocks generation for the declaration, or fails the build at a usage site.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Stable diagnostic codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticCode {
    /// The collection builder cannot see the collection or a containing type.
    BuilderInaccessible,
    /// Declared length is zero, negative, or missing.
    InvalidLength,
    /// The collection struct is declared `file`.
    FileLocalForbidden,
    /// A containing type (or the struct itself) is not `partial`.
    NotPartial,
    /// The collection struct is declared `readonly`.
    ReadOnlyForbidden,
    /// The struct does not declare exactly one instance field.
    WrongFieldCount,
    /// The element field is `required`, `readonly`, `volatile`, or a fixed buffer.
    BadFieldModifiers,
    /// A collection expression has more elements than the collection holds.
    CollectionTooLarge,
    /// A collection expression with spreads may exceed the collection length.
    CollectionMaybeTooLarge,
    /// Delegated interfaces were requested without any interface to delegate.
    DelegateWithoutInterfaces,
}

impl DiagnosticCode {
    /// Every code in catalog order.
    pub const ALL: [DiagnosticCode; 10] = [
        Self::BuilderInaccessible,
        Self::InvalidLength,
        Self::FileLocalForbidden,
        Self::NotPartial,
        Self::ReadOnlyForbidden,
        Self::WrongFieldCount,
        Self::BadFieldModifiers,
        Self::CollectionTooLarge,
        Self::CollectionMaybeTooLarge,
        Self::DelegateWithoutInterfaces,
    ];

    /// The stable identifier, e.g. `INL1003`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::BuilderInaccessible => "INL1000",
            Self::InvalidLength => "INL1001",
            Self::FileLocalForbidden => "INL1002",
            Self::NotPartial => "INL1003",
            Self::ReadOnlyForbidden => "INL1004",
            Self::WrongFieldCount => "INL1005",
            Self::BadFieldModifiers => "INL1006",
            Self::CollectionTooLarge => "INL1007",
            Self::CollectionMaybeTooLarge => "INL1008",
            Self::DelegateWithoutInterfaces => "INL1009",
        }
    }

    /// Severity the code is reported with.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::CollectionMaybeTooLarge => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Short title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BuilderInaccessible => "Inline collection inaccessible to collection builder",
            Self::InvalidLength => "Inline collection must have positive, non-zero length",
            Self::FileLocalForbidden => "Inline collection must not be a file-local type",
            Self::NotPartial => "Inline collection struct and all containing types must be partial",
            Self::ReadOnlyForbidden => "Inline collection struct must not be readonly",
            Self::WrongFieldCount => {
                "Inline collection struct must declare one and only one instance field"
            }
            Self::BadFieldModifiers => "Inline collection element field has invalid modifiers",
            Self::CollectionTooLarge => {
                "Collection expression is larger than target inline collection"
            }
            Self::CollectionMaybeTooLarge => {
                "Collection expression may be larger than target inline collection"
            }
            Self::DelegateWithoutInterfaces => {
                "Delegated interfaces require at least one interface option"
            }
        }
    }

    /// Message format; `{0}`, `{1}`, ... are positional arguments.
    #[must_use]
    pub const fn message_format(self) -> &'static str {
        match self {
            Self::BuilderInaccessible => {
                "Collection builder requires inline collection struct and all containing types to be `public` or `internal`"
            }
            Self::InvalidLength => "Include a positive, non-zero length in InlineCollection attribute",
            Self::FileLocalForbidden => "Remove the `file` modifier from the inline collection struct",
            Self::NotPartial => {
                "Include `partial` modifier on type `{0}` definition which contains an inline collection"
            }
            Self::ReadOnlyForbidden => "Remove the `readonly` modifier from the inline collection struct",
            Self::WrongFieldCount => "Inline collection struct must declare one and only one instance field",
            Self::BadFieldModifiers => {
                "Inline collection element field must not be `required`, `readonly`, `volatile`, or a fixed-size buffer"
            }
            Self::CollectionTooLarge => {
                "Collection expression is larger than target inline collection of length {0}"
            }
            Self::CollectionMaybeTooLarge => {
                "Collection expression may be larger than target inline collection of length {0} when all elements are expanded"
            }
            Self::DelegateWithoutInterfaces => {
                "DelegatedInterfaces has no effect unless an interface option is also included"
            }
        }
    }

    /// Looks a code up by identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A reported problem.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// Stable code.
    pub code: DiagnosticCode,
    /// Severity.
    pub severity: Severity,
    /// Where the problem is.
    pub location: Location,
    /// Positional message arguments.
    pub args: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with the code's default severity and no arguments.
    #[must_use]
    pub fn new(code: DiagnosticCode, location: Location) -> Self {
        Self {
            code,
            severity: code.severity(),
            location,
            args: Vec::new(),
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl ToString) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// Returns true if this diagnostic is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Renders the message with its positional arguments substituted.
    #[must_use]
    pub fn message(&self) -> String {
        let mut message = self.code.message_format().to_string();
        for (i, arg) in self.args.iter().enumerate() {
            message = message.replace(&format!("{{{i}}}"), arg);
        }
        message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity,
            self.code,
            self.location,
            self.message()
        )
    }
}
