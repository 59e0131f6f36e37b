//! The member table.
//!
//! One row per member slot, in canonical emission order. Each row names its
//! group, where it lands, and a selector that picks a fragment (or nothing)
//! from the resolved plan.

use inlinegen_foundation::Capability;

use crate::body::Group;
use crate::fragment::FragmentKey;
use crate::plan::{
    Binding, CompositionPlan, EnumeratorVariant, GenericEnumeration, NonGenericEnumeration,
};

/// Which type body a row is emitted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Always the collection struct.
    Struct,
    /// The struct in direct mode, the helper class in delegated mode.
    Interfaces,
}

/// One member slot.
#[derive(Clone, Copy)]
pub struct MemberRow {
    /// Emission group.
    pub group: Group,
    /// Target body.
    pub placement: Placement,
    /// Picks the fragment for this slot, if any.
    pub select: fn(&CompositionPlan) -> Option<FragmentKey>,
}

const fn row(
    group: Group,
    placement: Placement,
    select: fn(&CompositionPlan) -> Option<FragmentKey>,
) -> MemberRow {
    MemberRow {
        group,
        placement,
        select,
    }
}

fn when(plan: &CompositionPlan, capability: Capability, key: FragmentKey) -> Option<FragmentKey> {
    plan.has(capability).then_some(key)
}

/// Every member slot, in emission order.
pub static MEMBER_TABLE: &[MemberRow] = &[
    // Length
    row(Group::Length, Placement::Struct, |_| {
        Some(FragmentKey::LengthConstant)
    }),
    row(Group::Length, Placement::Struct, |p| {
        when(p, Capability::LengthProperty, FragmentKey::LengthProperty)
    }),
    // Conversions
    row(Group::Conversions, Placement::Struct, |p| {
        when(
            p,
            Capability::ArrayConversionOperators,
            FragmentKey::ArrayConversionOperators,
        )
    }),
    // Constructors
    row(Group::Constructors, Placement::Struct, |_| {
        Some(FragmentKey::DefaultConstructor)
    }),
    row(Group::Constructors, Placement::Struct, |p| {
        when(
            p,
            Capability::ReadOnlySpanConstructor,
            FragmentKey::ReadOnlySpanConstructor,
        )
    }),
    // Methods
    row(Group::Methods, Placement::Struct, |p| {
        when(p, Capability::AsSpanMethods, FragmentKey::AsSpanMethods)
    }),
    row(Group::Methods, Placement::Struct, |p| {
        when(p, Capability::ClearMethod, FragmentKey::ClearMethod)
    }),
    row(Group::Methods, Placement::Struct, |p| {
        when(p, Capability::ContainsMethod, FragmentKey::ContainsMethod)
    }),
    row(Group::Methods, Placement::Struct, |p| {
        when(p, Capability::CopyToMethod, FragmentKey::CopyToMethod)
    }),
    row(Group::Methods, Placement::Struct, |p| {
        when(p, Capability::FillMethod, FragmentKey::FillMethod)
    }),
    row(Group::Methods, Placement::Struct, |p| match p.enumerator {
        EnumeratorVariant::None => None,
        EnumeratorVariant::Interface => Some(FragmentKey::GetEnumeratorInterface),
        EnumeratorVariant::RefStruct => Some(FragmentKey::GetEnumeratorRefStruct),
    }),
    row(Group::Methods, Placement::Struct, |p| {
        (p.enumerator == EnumeratorVariant::RefStruct)
            .then_some(FragmentKey::RefStructEnumeratorType)
    }),
    row(Group::Methods, Placement::Struct, |p| {
        when(p, Capability::IndexOfMethod, FragmentKey::IndexOfMethod)
    }),
    row(Group::Methods, Placement::Struct, |p| {
        when(p, Capability::ToArrayMethod, FragmentKey::ToArrayMethod)
    }),
    row(Group::Methods, Placement::Struct, |p| {
        when(p, Capability::TryCopyToMethod, FragmentKey::TryCopyToMethod)
    }),
    row(Group::Methods, Placement::Struct, |p| {
        p.is_delegated().then_some(FragmentKey::InterfaceViewAccessor)
    }),
    // Interfaces
    row(Group::Interfaces, Placement::Interfaces, |p| {
        when(p, Capability::ICollection, FragmentKey::ICollection)
    }),
    row(Group::Interfaces, Placement::Interfaces, |p| {
        when(p, Capability::ICollectionT, FragmentKey::ICollectionT)
    }),
    row(Group::Interfaces, Placement::Interfaces, |p| {
        (p.has(Capability::ICollectionT) && p.contains == Binding::Explicit)
            .then_some(FragmentKey::ICollectionTContains)
    }),
    row(Group::Interfaces, Placement::Interfaces, |p| {
        p.enumerable.map(|e| match e {
            NonGenericEnumeration::Method => FragmentKey::IEnumerableViaMethod,
            NonGenericEnumeration::Generic => FragmentKey::IEnumerableViaGeneric,
            NonGenericEnumeration::Body => FragmentKey::IEnumerableBody,
            NonGenericEnumeration::Unsupported => FragmentKey::IEnumerableUnsupported,
        })
    }),
    row(Group::Interfaces, Placement::Interfaces, |p| {
        p.enumerable_t.and_then(|e| match e {
            GenericEnumeration::Method => None,
            GenericEnumeration::Body => Some(FragmentKey::IEnumerableTBody),
            GenericEnumeration::Unsupported => Some(FragmentKey::IEnumerableTUnsupported),
        })
    }),
    row(Group::Interfaces, Placement::Interfaces, |p| {
        when(p, Capability::IList, FragmentKey::IList)
    }),
    row(Group::Interfaces, Placement::Interfaces, |p| {
        when(p, Capability::IListT, FragmentKey::IListT)
    }),
    row(Group::Interfaces, Placement::Interfaces, |p| {
        (p.has(Capability::IListT) && p.index_of == Binding::Explicit)
            .then_some(FragmentKey::IListTIndexOf)
    }),
    row(Group::Interfaces, Placement::Interfaces, |p| {
        when(
            p,
            Capability::IReadOnlyCollectionT,
            FragmentKey::IReadOnlyCollectionT,
        )
    }),
    row(Group::Interfaces, Placement::Interfaces, |p| {
        when(p, Capability::IReadOnlyListT, FragmentKey::IReadOnlyListT)
    }),
    row(Group::Interfaces, Placement::Interfaces, |p| {
        when(
            p,
            Capability::IStructuralComparable,
            FragmentKey::IStructuralComparable,
        )
    }),
    row(Group::Interfaces, Placement::Interfaces, |p| {
        when(
            p,
            Capability::IStructuralEquatable,
            FragmentKey::IStructuralEquatable,
        )
    }),
];

/// Selected members in emission order.
#[must_use]
pub fn select(plan: &CompositionPlan) -> Vec<(MemberRow, FragmentKey)> {
    MEMBER_TABLE
        .iter()
        .filter_map(|row| (row.select)(plan).map(|key| (*row, key)))
        .collect()
}
