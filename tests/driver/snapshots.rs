//! Integration tests for snapshot persistence

use inlinegen_driver::Snapshot;
use inlinegen_foundation::{CapabilitySet, ErrorKind, Location};
use inlinegen_model::{ContainerFrame, DeclarationKind, ElementField, Modifier, RawDeclaration};
use inlinegen_usage::ConstructionSite;

fn snapshot() -> Snapshot {
    Snapshot::new()
        .with_declaration(
            RawDeclaration::new(
                "Demo.Outer`1+Buffer",
                ContainerFrame::new("Buffer", DeclarationKind::Struct)
                    .with_modifiers([Modifier::Public, Modifier::Partial])
                    .with_location(Location::at("Buffer.cs", 8, 5)),
            )
            .within(
                ContainerFrame::new("Outer", DeclarationKind::Class)
                    .with_modifiers([Modifier::Public, Modifier::Partial])
                    .with_type_parameters(["T"]),
            )
            .with_namespace("Demo")
            .with_field(ElementField::new("element0", "T"))
            .with_length(16)
            .with_capabilities(CapabilitySet::from_bits(i32::MAX)),
        )
        .with_site(ConstructionSite::new("Demo.Outer`1+Buffer", 17).with_location(Location::at("Use.cs", 3, 9)))
}

#[test]
fn bytes_round_trip() {
    let original = snapshot();
    let bytes = original.to_bytes().unwrap();
    assert_eq!(Snapshot::from_bytes(&bytes).unwrap(), original);
}

#[test]
fn file_round_trip() {
    let path = std::env::temp_dir().join(format!("inlinegen-it-{}.snapshot", std::process::id()));
    let original = snapshot();
    original.save_to_file(&path).unwrap();
    let loaded = Snapshot::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn garbage_bytes_are_a_serialization_error() {
    let err = Snapshot::from_bytes(&[0xC1, 0x00, 0xFF]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Serialization(_)), "{err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Snapshot::load_from_file("/nonexistent/inlinegen/missing.snapshot").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)), "{err}");
}

#[test]
fn duplicate_identity_breaks_the_contract() {
    let decl = snapshot().declarations[0].clone();
    let doubled = snapshot().with_declaration(decl);
    let err = doubled.check_contract().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedInput(_)));
}
