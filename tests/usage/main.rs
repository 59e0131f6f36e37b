//! Integration tests for Layer 2: Usage checks
//!
//! Construction sites are checked against lengths taken from validated
//! descriptors, the way a generation pass builds them.

use inlinegen_foundation::{DiagnosticCode, Location, Severity};
use inlinegen_model::{
    ContainerFrame, DeclarationKind, Descriptor, ElementField, Modifier, RawDeclaration,
    ValidDescriptor, Validator,
};
use inlinegen_usage::{ConstructionSite, LengthMap, UsageChecker};

fn valid(id: &str, name: &str, length: i32) -> ValidDescriptor {
    let decl = RawDeclaration::new(
        id,
        ContainerFrame::new(name, DeclarationKind::Struct)
            .with_modifiers([Modifier::Public, Modifier::Partial]),
    )
    .with_field(ElementField::new("element0", "int"))
    .with_length(length);
    Descriptor::build(&decl, &Validator::default())
        .as_valid()
        .cloned()
        .unwrap()
}

fn checker() -> UsageChecker {
    let descriptors = [valid("Demo.Five", "Five", 5), valid("Demo.Two", "Two", 2)];
    UsageChecker::new(descriptors.iter().collect::<LengthMap>())
}

#[test]
fn three_known_elements_fit() {
    assert!(checker().check(&ConstructionSite::new("Demo.Five", 3)).is_none());
}

#[test]
fn exact_length_fits() {
    assert!(checker().check(&ConstructionSite::new("Demo.Five", 5)).is_none());
}

#[test]
fn six_known_elements_is_an_error_citing_the_length() {
    let site = ConstructionSite::new("Demo.Five", 6).with_location(Location::at("Use.cs", 12, 20));
    let diag = checker().check(&site).unwrap();
    assert_eq!(diag.code, DiagnosticCode::CollectionTooLarge);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.args, vec!["5".to_string()]);
    assert_eq!(diag.location, Location::at("Use.cs", 12, 20));
    assert_eq!(
        diag.to_string(),
        "error[INL1007] Use.cs:12:20: Collection expression is larger than target inline collection of length 5"
    );
}

#[test]
fn spread_is_a_warning() {
    let diag = checker()
        .check(&ConstructionSite::new("Demo.Five", 2).with_spread())
        .unwrap();
    assert_eq!(diag.code, DiagnosticCode::CollectionMaybeTooLarge);
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.args, vec!["5".to_string()]);
}

#[test]
fn too_large_beats_spread() {
    let diag = checker()
        .check(&ConstructionSite::new("Demo.Two", 3).with_spread())
        .unwrap();
    assert_eq!(diag.code, DiagnosticCode::CollectionTooLarge);
    assert_eq!(diag.args, vec!["2".to_string()]);
}

#[test]
fn unrelated_target_is_ignored() {
    let checker = checker();
    assert!(checker.check(&ConstructionSite::new("System.Int32[]", 100)).is_none());
    assert!(checker.check(&ConstructionSite::new("Demo.Other", 9).with_spread()).is_none());
}

#[test]
fn check_all_keeps_site_order() {
    let sites = [
        ConstructionSite::new("Demo.Two", 1).with_spread(),
        ConstructionSite::new("Demo.Five", 1),
        ConstructionSite::new("Demo.Five", 7),
    ];
    let checker = checker();
    let codes: Vec<_> = checker.check_all(&sites).map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::CollectionMaybeTooLarge,
            DiagnosticCode::CollectionTooLarge,
        ]
    );
}

#[test]
fn rejected_declarations_have_no_length() {
    let decl = RawDeclaration::new(
        "Demo.Broken",
        ContainerFrame::new("Broken", DeclarationKind::Struct).with_modifiers([Modifier::Public]),
    )
    .with_field(ElementField::new("element0", "int"))
    .with_length(4);
    let descriptor = Descriptor::build(&decl, &Validator::default());
    let lengths: LengthMap = descriptor.as_valid().into_iter().collect();
    assert!(lengths.is_empty());
    let checker = UsageChecker::new(lengths);
    assert!(checker.check(&ConstructionSite::new("Demo.Broken", 10)).is_none());
}
