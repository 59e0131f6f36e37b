//! Source location tracking.
//!
//! The host collaborator attaches a [`Location`] to every declaration, frame,
//! field and construction site so diagnostics can point back at source.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position within a named source file.
///
/// Line and column are 1-based; zero means the host did not supply them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Path of the source file, if known.
    pub path: Option<String>,
    /// Line of the reported position.
    pub line: u32,
    /// Column of the reported position.
    pub column: u32,
}

impl Location {
    /// A location with no source information.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A location at `line:column` in `path`.
    #[must_use]
    pub fn at(path: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            path: Some(path.into()),
            line,
            column,
        }
    }

    /// Returns true if no source information is attached.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.path.is_none() && self.line == 0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{path}:{}:{}", self.line, self.column),
            None if self.line > 0 => write!(f, "{}:{}", self.line, self.column),
            None => f.write_str("<unknown>"),
        }
    }
}
