//! The capability model.
//!
//! A [`Capability`] is one unit of optional generated behavior. A declaration
//! requests a raw bit set; before anything is emitted the request is closed
//! over the implication graph so that, for example, requesting `IList<T>`
//! also yields `ICollection<T>`, `IEnumerable<T>` and `IEnumerable`.
//!
//! Raw bit positions match the attribute enum the host hands us, so a raw
//! integer round-trips through [`CapabilitySet::from_bits`] unchanged.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named unit of optional generated behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Capability {
    /// Explicit conversion operators to and from `T[]`.
    ArrayConversionOperators = 0,
    /// Public `AsSpan()` / `AsReadOnlySpan()` methods.
    AsSpanMethods = 1,
    /// `Clear()` method.
    ClearMethod = 2,
    /// Collection-expression support through a companion factory type.
    CollectionBuilder = 3,
    /// `Contains(T)` method.
    ContainsMethod = 4,
    /// `CopyTo(Span<T>)` method.
    CopyToMethod = 5,
    /// `Fill(T)` method.
    FillMethod = 6,
    /// Public `GetEnumerator()` method.
    GetEnumeratorMethod = 7,
    /// `System.Collections.ICollection`.
    ICollection = 8,
    /// `ICollection<T>`.
    ICollectionT = 9,
    /// `System.Collections.IEnumerable`.
    IEnumerable = 10,
    /// `IEnumerable<T>`.
    IEnumerableT = 11,
    /// `System.Collections.IList`.
    IList = 12,
    /// `IList<T>`.
    IListT = 13,
    /// `IndexOf(T)` method.
    IndexOfMethod = 14,
    /// `IReadOnlyCollection<T>`.
    IReadOnlyCollectionT = 15,
    /// `IReadOnlyList<T>`.
    IReadOnlyListT = 16,
    /// `System.Collections.IStructuralComparable`.
    IStructuralComparable = 17,
    /// `System.Collections.IStructuralEquatable`.
    IStructuralEquatable = 18,
    /// `Length` property.
    LengthProperty = 19,
    /// Constructor taking a `ReadOnlySpan<T>`.
    ReadOnlySpanConstructor = 20,
    /// A `ref struct Enumerator` returned by `GetEnumerator()`.
    RefStructEnumerator = 21,
    /// `ToArray()` method.
    ToArrayMethod = 22,
    /// `TryCopyTo(Span<T>)` method.
    TryCopyToMethod = 23,
    /// Implement the structural interfaces on a nested helper type instead
    /// of on the collection struct itself.
    DelegatedInterfaces = 24,
}

/// Direct implications. Anything not listed implies nothing.
const IMPLICATIONS: &[(Capability, &[Capability])] = &[
    (Capability::ICollection, &[Capability::IEnumerable]),
    (Capability::ICollectionT, &[Capability::IEnumerableT]),
    (Capability::IEnumerableT, &[Capability::IEnumerable]),
    (Capability::IList, &[Capability::ICollection]),
    (Capability::IListT, &[Capability::ICollectionT]),
    (Capability::IReadOnlyCollectionT, &[Capability::IEnumerableT]),
    (Capability::IReadOnlyListT, &[Capability::IReadOnlyCollectionT]),
    (Capability::RefStructEnumerator, &[Capability::GetEnumeratorMethod]),
];

impl Capability {
    /// Number of capabilities.
    pub const COUNT: usize = 25;

    /// Every capability, in canonical (bit) order.
    pub const ALL: [Capability; Self::COUNT] = [
        Self::ArrayConversionOperators,
        Self::AsSpanMethods,
        Self::ClearMethod,
        Self::CollectionBuilder,
        Self::ContainsMethod,
        Self::CopyToMethod,
        Self::FillMethod,
        Self::GetEnumeratorMethod,
        Self::ICollection,
        Self::ICollectionT,
        Self::IEnumerable,
        Self::IEnumerableT,
        Self::IList,
        Self::IListT,
        Self::IndexOfMethod,
        Self::IReadOnlyCollectionT,
        Self::IReadOnlyListT,
        Self::IStructuralComparable,
        Self::IStructuralEquatable,
        Self::LengthProperty,
        Self::ReadOnlySpanConstructor,
        Self::RefStructEnumerator,
        Self::ToArrayMethod,
        Self::TryCopyToMethod,
        Self::DelegatedInterfaces,
    ];

    /// The structural-interface families.
    pub const INTERFACE_FAMILIES: [Capability; 10] = [
        Self::ICollection,
        Self::ICollectionT,
        Self::IEnumerable,
        Self::IEnumerableT,
        Self::IList,
        Self::IListT,
        Self::IReadOnlyCollectionT,
        Self::IReadOnlyListT,
        Self::IStructuralComparable,
        Self::IStructuralEquatable,
    ];

    /// Returns the bit mask of this capability.
    #[must_use]
    pub const fn bit(self) -> u32 {
        1 << (self as u8)
    }

    /// Returns the capability's name as it appears in the attribute enum.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArrayConversionOperators => "ArrayConversionOperators",
            Self::AsSpanMethods => "AsSpanReadOnlySpanMethods",
            Self::ClearMethod => "ClearMethod",
            Self::CollectionBuilder => "CollectionBuilder",
            Self::ContainsMethod => "ContainsMethod",
            Self::CopyToMethod => "CopyToMethod",
            Self::FillMethod => "FillMethod",
            Self::GetEnumeratorMethod => "GetEnumeratorMethod",
            Self::ICollection => "ICollection",
            Self::ICollectionT => "ICollectionT",
            Self::IEnumerable => "IEnumerable",
            Self::IEnumerableT => "IEnumerableT",
            Self::IList => "IList",
            Self::IListT => "IListT",
            Self::IndexOfMethod => "IndexOfMethod",
            Self::IReadOnlyCollectionT => "IReadOnlyCollectionT",
            Self::IReadOnlyListT => "IReadOnlyListT",
            Self::IStructuralComparable => "IStructuralComparable",
            Self::IStructuralEquatable => "IStructuralEquatable",
            Self::LengthProperty => "LengthProperty",
            Self::ReadOnlySpanConstructor => "ReadOnlySpanConstructor",
            Self::RefStructEnumerator => "RefStructEnumerator",
            Self::ToArrayMethod => "ToArrayMethod",
            Self::TryCopyToMethod => "TryCopyToMethod",
            Self::DelegatedInterfaces => "DelegatedInterfaces",
        }
    }

    /// Looks a capability up by its attribute-enum name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Returns true if this capability is a structural-interface family.
    #[must_use]
    pub fn is_interface_family(self) -> bool {
        Self::INTERFACE_FAMILIES.contains(&self)
    }

    /// Capabilities this one directly implies.
    #[must_use]
    pub fn directly_implies(self) -> &'static [Capability] {
        IMPLICATIONS
            .iter()
            .find(|(from, _)| *from == self)
            .map_or(&[], |(_, to)| to)
    }

    /// Everything this capability implies, transitively, excluding itself.
    #[must_use]
    pub fn implied(self) -> CapabilitySet {
        let mut set = close_implications(CapabilitySet::single(self));
        set.remove(self);
        set
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of capabilities with bit-flag semantics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CapabilitySet(u32);

impl CapabilitySet {
    const MASK: u32 = (1 << Capability::COUNT) - 1;

    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every capability.
    #[must_use]
    pub const fn everything() -> Self {
        Self(Self::MASK)
    }

    /// A set holding exactly one capability.
    #[must_use]
    pub const fn single(capability: Capability) -> Self {
        Self(capability.bit())
    }

    /// Builds a set from raw attribute bits. Unknown bits are ignored.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits as u32 & Self::MASK)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of capabilities in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the capability is in the set.
    #[must_use]
    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Adds a capability. Returns true if it was not already present.
    pub fn insert(&mut self, capability: Capability) -> bool {
        let added = !self.contains(capability);
        self.0 |= capability.bit();
        added
    }

    /// Removes a capability. Returns true if it was present.
    pub fn remove(&mut self, capability: Capability) -> bool {
        let present = self.contains(capability);
        self.0 &= !capability.bit();
        present
    }

    /// Builder-style insert.
    #[must_use]
    pub const fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.bit())
    }

    /// Set union.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Set intersection.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns true if every capability in `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns true if any structural-interface family is present.
    #[must_use]
    pub fn has_interface_family(self) -> bool {
        Capability::INTERFACE_FAMILIES
            .iter()
            .any(|c| self.contains(*c))
    }

    /// Iterates the set in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl From<Capability> for CapabilitySet {
    fn from(capability: Capability) -> Self {
        Self::single(capability)
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapabilitySet({self})")
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        for (i, capability) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(capability.name())?;
        }
        Ok(())
    }
}

// =============================================================================
// Closure
// =============================================================================

/// Result of closing a requested capability set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Closure {
    /// The closed set.
    pub set: CapabilitySet,
    /// True if the delegate capability was requested but removed because no
    /// structural-interface family was present.
    pub dropped_delegate: bool,
}

/// Applies the implication table until nothing new is added.
fn close_implications(requested: CapabilitySet) -> CapabilitySet {
    let mut closed = requested;
    // Each productive round adds at least one capability.
    for _ in 0..=Capability::COUNT {
        let mut next = closed;
        for capability in closed.iter() {
            for implied in capability.directly_implies() {
                next.insert(*implied);
            }
        }
        if next == closed {
            return closed;
        }
        closed = next;
    }
    unreachable!("implication closure did not reach a fixed point")
}

/// Closes a requested set and reports what the delegate gate removed.
#[must_use]
pub fn close_with_report(requested: CapabilitySet) -> Closure {
    let mut set = close_implications(requested);
    let dropped_delegate =
        set.contains(Capability::DelegatedInterfaces) && !set.has_interface_family();
    if dropped_delegate {
        set.remove(Capability::DelegatedInterfaces);
    }
    Closure {
        set,
        dropped_delegate,
    }
}

/// Computes the closed capability set.
///
/// Idempotent (`close(close(x)) == close(x)`) and monotonic
/// (`x ⊆ y ⟹ close(x) ⊆ close(y)`).
#[must_use]
pub fn close(requested: CapabilitySet) -> CapabilitySet {
    close_with_report(requested).set
}
