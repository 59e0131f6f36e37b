//! Collection-expression sites reported by the host.

use inlinegen_foundation::Location;
use inlinegen_model::DeclarationId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A collection expression whose target type may be an inline collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstructionSite {
    /// Identity of the target type.
    pub target: DeclarationId,
    /// Elements that are definitely present (everything but spreads).
    pub known_elements: usize,
    /// True if at least one element is a spread (`..items`).
    pub has_spread: bool,
    /// Location of the expression.
    pub location: Location,
}

impl ConstructionSite {
    /// Creates a site with no spreads and no location.
    pub fn new(target: impl Into<DeclarationId>, known_elements: usize) -> Self {
        Self {
            target: target.into(),
            known_elements,
            has_spread: false,
            location: Location::none(),
        }
    }

    /// Builder method to mark the site as containing a spread.
    #[must_use]
    pub fn with_spread(mut self) -> Self {
        self.has_spread = true;
        self
    }

    /// Builder method to set the location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}
