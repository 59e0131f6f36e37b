//! Error types for inlinegen.
//!
//! User-facing problems in a declaration are reported as
//! [`Diagnostic`](crate::Diagnostic)s, never as errors. An [`Error`] means the
//! integration itself is broken (the host handed us a malformed snapshot),
//! the pass was cancelled, or I/O around the core failed.

use std::fmt;

use thiserror::Error;

/// The main error type for inlinegen operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed-input error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedInput(message.into()))
    }

    /// Creates a cancellation error.
    #[must_use]
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled)
    }

    /// Creates a template error.
    #[must_use]
    pub fn template(fragment: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self::new(ErrorKind::Template {
            fragment: fragment.into(),
            placeholder: placeholder.into(),
        })
    }

    /// Returns true if this error reports cancellation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The host violated the input contract.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The pass was cancelled before it completed.
    #[error("operation cancelled")]
    Cancelled,

    /// A fragment referenced a placeholder the composer does not bind.
    #[error("fragment {fragment} references unknown placeholder {{{{{placeholder}}}}}")]
    Template {
        /// The fragment being rendered.
        fragment: String,
        /// The unbound placeholder name.
        placeholder: String,
    },

    /// Snapshot (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Identity of the declaration being processed.
    pub declaration: Option<String>,
    /// Pipeline phase (e.g. "ingest", "compose").
    pub phase: Option<&'static str>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the declaration identity.
    #[must_use]
    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }

    /// Sets the pipeline phase.
    #[must_use]
    pub fn with_phase(mut self, phase: &'static str) -> Self {
        self.phase = Some(phase);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(phase) = self.phase {
            write!(f, "during {phase}")?;
        }
        if let Some(declaration) = &self.declaration {
            if self.phase.is_some() {
                f.write_str(" ")?;
            }
            write!(f, "of {declaration}")?;
        }
        Ok(())
    }
}
