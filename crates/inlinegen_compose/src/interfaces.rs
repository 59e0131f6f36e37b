//! Base-interface lists.
//!
//! A family is listed only if no other requested family already implies it:
//! `IList<T>` alone lists `IList<T>`, not `ICollection<T>` or `IEnumerable`.

use inlinegen_foundation::{Capability, CapabilitySet};

use crate::plan::CompositionPlan;

/// Name of the marker interface in the support unit.
pub const MARKER_INTERFACE: &str = "IInlineCollection";

/// Interface families in listing order. The marker is listed between
/// `IEnumerable<T>` and `IList`.
const ORDER: [Capability; 10] = [
    Capability::ICollection,
    Capability::ICollectionT,
    Capability::IEnumerable,
    Capability::IEnumerableT,
    Capability::IList,
    Capability::IListT,
    Capability::IReadOnlyCollectionT,
    Capability::IReadOnlyListT,
    Capability::IStructuralComparable,
    Capability::IStructuralEquatable,
];

const MARKER_POSITION: usize = 4;

/// Source-level name of an interface family for the given element type.
///
/// # Panics
///
/// Panics if `family` is not an interface family.
#[must_use]
pub fn interface_name(family: Capability, element: &str) -> String {
    match family {
        Capability::ICollection => "ICollection".to_string(),
        Capability::ICollectionT => format!("ICollection<{element}>"),
        Capability::IEnumerable => "IEnumerable".to_string(),
        Capability::IEnumerableT => format!("IEnumerable<{element}>"),
        Capability::IList => "IList".to_string(),
        Capability::IListT => format!("IList<{element}>"),
        Capability::IReadOnlyCollectionT => format!("IReadOnlyCollection<{element}>"),
        Capability::IReadOnlyListT => format!("IReadOnlyList<{element}>"),
        Capability::IStructuralComparable => "IStructuralComparable".to_string(),
        Capability::IStructuralEquatable => "IStructuralEquatable".to_string(),
        other => panic!("{other:?} is not an interface family"),
    }
}

/// Families to list: present, and not implied by another present family.
#[must_use]
pub fn minimal_families(capabilities: CapabilitySet) -> Vec<Capability> {
    ORDER
        .into_iter()
        .filter(|&family| capabilities.contains(family))
        .filter(|&family| {
            !ORDER.into_iter().any(|other| {
                other != family
                    && capabilities.contains(other)
                    && other.implied().contains(family)
            })
        })
        .collect()
}

/// The interface lists for the struct and, in delegated mode, its helper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceLists {
    /// Listed on the collection struct. Always includes the marker.
    pub primary: Vec<String>,
    /// Listed on the helper class; empty unless delegated.
    pub helper: Vec<String>,
}

impl InterfaceLists {
    /// Computes both lists for a plan.
    #[must_use]
    pub fn compose(plan: &CompositionPlan, element: &str) -> Self {
        let marker = format!("{MARKER_INTERFACE}<{element}>");
        let families = minimal_families(plan.capabilities);

        if plan.is_delegated() {
            return Self {
                primary: vec![marker],
                helper: families
                    .into_iter()
                    .map(|f| interface_name(f, element))
                    .collect(),
            };
        }

        let mut primary = Vec::with_capacity(families.len() + 1);
        let mut marker = Some(marker);
        for family in families {
            if order_index(family) >= MARKER_POSITION {
                if let Some(marker) = marker.take() {
                    primary.push(marker);
                }
            }
            primary.push(interface_name(family, element));
        }
        primary.extend(marker);

        Self {
            primary,
            helper: Vec::new(),
        }
    }
}

fn order_index(family: Capability) -> usize {
    ORDER
        .iter()
        .position(|&f| f == family)
        .unwrap_or(ORDER.len())
}
