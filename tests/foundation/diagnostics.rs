//! Integration tests for diagnostics

use inlinegen_foundation::{Diagnostic, DiagnosticCode, Location, Severity};

#[test]
fn codes_are_stable() {
    let ids: Vec<&str> = DiagnosticCode::ALL.iter().map(|c| c.id()).collect();
    assert_eq!(
        ids,
        vec![
            "INL1000", "INL1001", "INL1002", "INL1003", "INL1004", "INL1005", "INL1006",
            "INL1007", "INL1008", "INL1009",
        ]
    );
}

#[test]
fn maybe_too_large_is_the_only_warning() {
    let warnings: Vec<_> = DiagnosticCode::ALL
        .into_iter()
        .filter(|c| c.severity() == Severity::Warning)
        .collect();
    assert_eq!(warnings, vec![DiagnosticCode::CollectionMaybeTooLarge]);
}

#[test]
fn display_without_location() {
    let diag = Diagnostic::new(DiagnosticCode::CollectionMaybeTooLarge, Location::none()).with_arg(5);
    let text = diag.to_string();
    assert!(text.starts_with("warning[INL1008] <unknown>: "));
    assert!(text.contains("length 5"));
}

#[test]
fn not_partial_names_the_frame() {
    let diag = Diagnostic::new(DiagnosticCode::NotPartial, Location::at("Outer.cs", 2, 1))
        .with_arg("Outer<T>.Inner");
    assert!(diag.message().contains("`Outer<T>.Inner`"));
    assert!(diag.is_error());
}
