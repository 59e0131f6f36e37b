//! Integration tests for descriptors

use inlinegen_foundation::{Capability, CapabilitySet};
use inlinegen_model::{
    ContainerFrame, DeclarationKind, Descriptor, ElementField, Modifier, RawDeclaration, Validator,
};

fn decl() -> RawDeclaration {
    RawDeclaration::new(
        "Lib.Pool`2+Slots",
        ContainerFrame::new("Slots", DeclarationKind::Struct)
            .with_modifiers([Modifier::Public, Modifier::Partial]),
    )
    .within(
        ContainerFrame::new("Pool", DeclarationKind::Class)
            .with_modifiers([Modifier::Public, Modifier::Partial])
            .with_type_parameters(["TKey", "TValue"]),
    )
    .with_namespace("Lib")
    .with_field(ElementField::new("slot0", "TValue"))
    .with_length(32)
}

#[test]
fn valid_descriptor_is_closed() {
    let d = Descriptor::build(
        &decl().with_capabilities(Capability::IReadOnlyListT),
        &Validator::default(),
    );
    let valid = d.as_valid().unwrap();
    assert_eq!(
        valid.capabilities(),
        CapabilitySet::empty()
            .with(Capability::IReadOnlyListT)
            .with(Capability::IReadOnlyCollectionT)
            .with(Capability::IEnumerableT)
            .with(Capability::IEnumerable)
    );
    assert_eq!(valid.length(), 32);
    assert_eq!(valid.namespace(), Some("Lib"));
    assert_eq!(valid.innermost().name, "Slots");
}

#[test]
fn factory_names_follow_frames() {
    let d = Descriptor::build(
        &decl().with_capabilities(Capability::CollectionBuilder),
        &Validator::default(),
    );
    let factory = d.as_valid().unwrap().factory().unwrap();
    assert_eq!(factory.name, "Pool_2_Slots_CollectionBuilder");
    assert_eq!(factory.type_parameter_list(), "<TKey, TValue>");
}

#[test]
fn rejected_descriptor_keeps_identity() {
    let mut raw = decl();
    raw.frames[0].modifiers = vec![Modifier::Public];
    let d = Descriptor::build(&raw, &Validator::default());
    assert!(!d.is_valid());
    assert_eq!(d.id().as_str(), "Lib.Pool`2+Slots");
    assert_eq!(d.diagnostics()[0].args, vec!["Pool<TKey, TValue>".to_string()]);
}
