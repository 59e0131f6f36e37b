//! Member layout inside a type body.

/// Member groups in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    /// Length constant and property.
    Length,
    /// Conversion operators.
    Conversions,
    /// Constructors.
    Constructors,
    /// Methods and nested types they depend on.
    Methods,
    /// Interface implementations.
    Interfaces,
    /// Nested helper types.
    Nested,
}

/// Accumulates members, inserting blank lines between them.
///
/// A blank line separates two members unless both are single statements
/// (ending in `;`) in the same group. Fragments are trimmed, so the body
/// never starts or ends with a blank line and never contains two in a row
/// between members.
#[derive(Debug, Default)]
pub struct BodyWriter {
    out: String,
    last_group: Option<Group>,
    last_was_block: bool,
}

impl BodyWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one member. Empty fragments are ignored.
    pub fn push(&mut self, group: Group, fragment: &str) {
        let fragment = fragment.trim_matches(|c| c == '\n' || c == '\r').trim_end();
        if fragment.trim().is_empty() {
            return;
        }
        let is_block = fragment.ends_with('}');

        if let Some(last_group) = self.last_group {
            self.out.push('\n');
            if self.last_was_block || is_block || last_group != group {
                self.out.push('\n');
            }
        }

        self.out.push_str(fragment);
        self.last_group = Some(group);
        self.last_was_block = is_block;
    }

    /// Returns true if nothing has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_group.is_none()
    }

    /// Finishes the body, stripping trailing whitespace from every line.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
