//! Integration tests for the capability model

use inlinegen_foundation::{Capability, CapabilitySet, close, close_with_report};

// =============================================================================
// Raw Values
// =============================================================================

#[test]
fn bits_match_attribute_values() {
    assert_eq!(Capability::ArrayConversionOperators.bit(), 1);
    assert_eq!(Capability::CollectionBuilder.bit(), 1 << 3);
    assert_eq!(Capability::IListT.bit(), 1 << 13);
    assert_eq!(Capability::DelegatedInterfaces.bit(), 1 << 24);
}

#[test]
fn everything_selects_every_capability() {
    let set = CapabilitySet::from_bits(i32::MAX);
    assert_eq!(set, CapabilitySet::everything());
    assert_eq!(set.len(), Capability::COUNT);
}

#[test]
fn unknown_bits_are_ignored() {
    let set = CapabilitySet::from_bits((1 << 30) | (1 << 2));
    assert_eq!(set, CapabilitySet::single(Capability::ClearMethod));
}

#[test]
fn names_round_trip() {
    for capability in Capability::ALL {
        assert_eq!(Capability::from_name(capability.name()), Some(capability));
    }
}

// =============================================================================
// Closure
// =============================================================================

#[test]
fn list_t_closes_to_collection_and_enumerables() {
    let closed = close(CapabilitySet::single(Capability::IListT));
    for c in [
        Capability::IListT,
        Capability::ICollectionT,
        Capability::IEnumerableT,
        Capability::IEnumerable,
    ] {
        assert!(closed.contains(c), "{c}");
    }
    assert!(!closed.contains(Capability::ICollection));
    assert_eq!(closed.len(), 4);
}

#[test]
fn read_only_list_closes_through_read_only_collection() {
    let closed = close(CapabilitySet::single(Capability::IReadOnlyListT));
    assert!(closed.contains(Capability::IReadOnlyCollectionT));
    assert!(closed.contains(Capability::IEnumerableT));
    assert!(closed.contains(Capability::IEnumerable));
}

#[test]
fn ref_struct_enumerator_adds_get_enumerator() {
    let closed = close(CapabilitySet::single(Capability::RefStructEnumerator));
    assert!(closed.contains(Capability::GetEnumeratorMethod));
}

#[test]
fn delegate_alone_is_dropped() {
    let closure = close_with_report(
        CapabilitySet::empty()
            .with(Capability::DelegatedInterfaces)
            .with(Capability::ToArrayMethod),
    );
    assert!(closure.dropped_delegate);
    assert_eq!(closure.set, CapabilitySet::single(Capability::ToArrayMethod));
}

#[test]
fn delegate_with_interface_survives() {
    let closure = close_with_report(
        CapabilitySet::empty()
            .with(Capability::DelegatedInterfaces)
            .with(Capability::IStructuralEquatable),
    );
    assert!(!closure.dropped_delegate);
    assert!(closure.set.contains(Capability::DelegatedInterfaces));
}

#[test]
fn closure_is_idempotent_for_everything() {
    let once = close(CapabilitySet::everything());
    assert_eq!(close(once), once);
}
