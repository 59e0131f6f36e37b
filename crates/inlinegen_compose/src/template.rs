//! `{{placeholder}}` substitution.

use inlinegen_foundation::{Error, Result};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Named values substituted into a fragment.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    entries: Vec<(&'static str, String)>,
}

impl Bindings {
    /// Creates an empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, replacing any earlier value.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`Bindings::set`].
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Looks a binding up.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Renders `template`, replacing every `{{name}}` with its binding.
///
/// # Errors
///
/// Returns a template error naming `fragment` if a placeholder is unbound.
pub fn render(fragment: &str, template: &str, bindings: &Bindings) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else {
            // An unterminated opener is literal text.
            out.push_str(&rest[start..]);
            return Ok(out);
        };
        let name = &after[..end];
        let value = bindings
            .get(name)
            .ok_or_else(|| Error::template(fragment, name))?;
        out.push_str(value);
        rest = &after[end + CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Lists the placeholder names in a template, in order of appearance.
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else {
            break;
        };
        names.push(&after[..end]);
        rest = &after[end + CLOSE.len()..];
    }
    names
}
