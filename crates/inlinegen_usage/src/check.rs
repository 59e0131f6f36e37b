//! Construction-site checks.
//!
//! A [`UsageChecker`] holds the declared length of every valid declaration in
//! a pass and flags collection expressions that cannot, or may not, fit.

use std::fmt;

use inlinegen_foundation::{Diagnostic, DiagnosticCode};
use inlinegen_model::{DeclarationId, ValidDescriptor};
use tracing::trace;

use crate::site::ConstructionSite;

/// Declared lengths of the valid declarations in a pass.
///
/// Persistent: [`LengthMap::insert`] returns a new map sharing structure with
/// the old one.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LengthMap(im::HashMap<DeclarationId, u32>);

impl LengthMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Declared length of `id`, if it is a valid inline collection.
    #[must_use]
    pub fn get(&self, id: &DeclarationId) -> Option<u32> {
        self.0.get(id).copied()
    }

    /// Returns a new map with `id` mapped to `length`.
    #[must_use]
    pub fn insert(&self, id: DeclarationId, length: u32) -> Self {
        Self(self.0.update(id, length))
    }
}

impl fmt::Debug for LengthMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl FromIterator<(DeclarationId, u32)> for LengthMap {
    fn from_iter<I: IntoIterator<Item = (DeclarationId, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a ValidDescriptor> for LengthMap {
    fn from_iter<I: IntoIterator<Item = &'a ValidDescriptor>>(iter: I) -> Self {
        iter.into_iter()
            .map(|d| (d.id().clone(), d.length()))
            .collect()
    }
}

/// Checks construction sites against declared lengths.
#[derive(Clone, Debug)]
pub struct UsageChecker {
    lengths: LengthMap,
}

impl UsageChecker {
    /// Creates a checker over the given lengths.
    #[must_use]
    pub fn new(lengths: LengthMap) -> Self {
        Self { lengths }
    }

    /// The lengths this checker consults.
    #[must_use]
    pub fn lengths(&self) -> &LengthMap {
        &self.lengths
    }

    /// Checks one site. Returns at most one diagnostic.
    #[must_use]
    pub fn check(&self, site: &ConstructionSite) -> Option<Diagnostic> {
        let length = self.lengths.get(&site.target)?;

        let code = if site.known_elements > length as usize {
            DiagnosticCode::CollectionTooLarge
        } else if site.has_spread {
            DiagnosticCode::CollectionMaybeTooLarge
        } else {
            return None;
        };

        trace!(
            target_type = %site.target,
            known = site.known_elements,
            spread = site.has_spread,
            length,
            code = %code,
            "construction site flagged"
        );
        Some(Diagnostic::new(code, site.location.clone()).with_arg(length))
    }

    /// Checks every site, in order.
    pub fn check_all<'a>(
        &'a self,
        sites: impl IntoIterator<Item = &'a ConstructionSite> + 'a,
    ) -> impl Iterator<Item = Diagnostic> + 'a {
        sites.into_iter().filter_map(|site| self.check(site))
    }
}
