//! Integration tests for generation passes

use inlinegen_driver::{GeneratorConfig, Generator, Snapshot};
use inlinegen_foundation::{
    CancellationToken, Capability, CapabilitySet, DiagnosticCode, ErrorKind,
};
use inlinegen_model::{
    ContainerFrame, DeclarationId, DeclarationKind, DelegatePolicy, ElementField, Modifier,
    RawDeclaration,
};
use inlinegen_usage::ConstructionSite;

fn buffer(name: &str, length: i32, caps: CapabilitySet) -> RawDeclaration {
    RawDeclaration::new(
        format!("App.{name}"),
        ContainerFrame::new(name, DeclarationKind::Struct)
            .with_modifiers([Modifier::Public, Modifier::Partial]),
    )
    .with_namespace("App")
    .with_field(ElementField::new("element0", "double"))
    .with_length(length)
    .with_capabilities(caps)
}

fn project() -> Snapshot {
    Snapshot::new()
        .with_declaration(buffer("Zeta", 5, CapabilitySet::single(Capability::IListT)))
        .with_declaration(buffer("Alpha", 3, CapabilitySet::single(Capability::CollectionBuilder)))
        .with_declaration(buffer("Broken", 0, CapabilitySet::empty()))
        .with_site(ConstructionSite::new("App.Zeta", 3))
        .with_site(ConstructionSite::new("App.Zeta", 6))
        .with_site(ConstructionSite::new("App.Alpha", 1).with_spread())
        .with_site(ConstructionSite::new("App.Broken", 50))
}

#[test]
fn full_pass() {
    let mut generator = Generator::default();
    let output = generator.run(&project(), &CancellationToken::new()).unwrap();

    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::InvalidLength,
            DiagnosticCode::CollectionTooLarge,
            DiagnosticCode::CollectionMaybeTooLarge,
        ]
    );
    assert!(output.has_errors());
    assert_eq!(output.errors().count(), 2);
    assert_eq!(output.warnings().count(), 1);

    let hints: Vec<_> = output.units.iter().map(|u| u.hint_name.as_str()).collect();
    assert_eq!(
        hints,
        vec!["App.Alpha.g.cs", "App.Zeta.g.cs", "InlineCollections.Support.g.cs"]
    );
    assert!(output.unit_for(&DeclarationId::new("App.Broken")).is_none());

    assert_eq!(output.stats.declarations, 3);
    assert_eq!(output.stats.valid, 2);
    assert_eq!(output.stats.sites, 4);
    assert_eq!(output.stats.cache_hits, 0);
}

#[test]
fn one_bad_declaration_does_not_block_the_others() {
    let output = Generator::default()
        .run(&project(), &CancellationToken::new())
        .unwrap();
    let zeta = output.unit_for(&DeclarationId::new("App.Zeta")).unwrap();
    assert!(zeta.text.contains("public partial struct Zeta : IInlineCollection<double>, IList<double>"));
    let alpha = output.unit_for(&DeclarationId::new("App.Alpha")).unwrap();
    assert!(alpha.text.contains("public static class Alpha_CollectionBuilder"));
}

#[test]
fn second_pass_reuses_unchanged_declarations() {
    let mut generator = Generator::default();
    let cancel = CancellationToken::new();
    let first = generator.run(&project(), &cancel).unwrap();
    assert_eq!(generator.cached_declarations(), 3);

    let edited = Snapshot {
        declarations: project()
            .declarations
            .into_iter()
            .map(|d| if d.id.as_str() == "App.Zeta" { d.with_length(6) } else { d })
            .collect(),
        sites: project().sites,
    };
    let second = generator.run(&edited, &cancel).unwrap();
    assert_eq!(second.stats.cache_hits, 2);
    assert_eq!(
        second.unit_for(&DeclarationId::new("App.Alpha")),
        first.unit_for(&DeclarationId::new("App.Alpha"))
    );
    let zeta = second.unit_for(&DeclarationId::new("App.Zeta")).unwrap();
    assert!(zeta.text.contains("[InlineArray(6)]"));
    // Zeta now holds six, so the six-element site is fine.
    assert!(second.diagnostics.iter().all(|d| d.code != DiagnosticCode::CollectionTooLarge));
}

#[test]
fn indent_width_reaches_generated_units() {
    let mut generator = Generator::new(GeneratorConfig::default().with_indent_width(2));
    let output = generator.run(&project(), &CancellationToken::new()).unwrap();
    let zeta = output.unit_for(&DeclarationId::new("App.Zeta")).unwrap();
    assert!(zeta.text.contains("\n  [InlineArray(5)]\n"));
}

#[test]
fn parallel_pass_matches_sequential() {
    let sequential = Generator::new(GeneratorConfig::isolated())
        .run(&project(), &CancellationToken::new())
        .unwrap();
    let parallel = Generator::new(GeneratorConfig::isolated().with_parallel(true))
        .run(&project(), &CancellationToken::new())
        .unwrap();
    assert_eq!(sequential.diagnostics, parallel.diagnostics);
    assert_eq!(sequential.units, parallel.units);
}

#[test]
fn cancelled_pass_returns_no_output() {
    let mut generator = Generator::default();
    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = generator.run(&project(), &cancel).unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(generator.cached_declarations(), 0);
}

#[test]
fn malformed_snapshot_is_an_error_not_a_diagnostic() {
    let mut bad = buffer("Bad", 4, CapabilitySet::empty());
    bad.frames.clear();
    let snapshot = Snapshot::new().with_declaration(bad);
    let err = Generator::default()
        .run(&snapshot, &CancellationToken::new())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedInput(_)));
    assert_eq!(err.context.and_then(|c| c.phase), Some("ingest"));
}

#[test]
fn strict_policy_reports_useless_delegation() {
    let snapshot = Snapshot::new().with_declaration(buffer(
        "Lonely",
        2,
        CapabilitySet::empty()
            .with(Capability::DelegatedInterfaces)
            .with(Capability::ToArrayMethod),
    ));
    let cancel = CancellationToken::new();

    let lenient = Generator::default().run(&snapshot, &cancel).unwrap();
    assert!(lenient.diagnostics.is_empty());
    assert_eq!(lenient.units.len(), 2);

    let strict = Generator::new(GeneratorConfig::default().with_delegate_policy(DelegatePolicy::Diagnose))
        .run(&snapshot, &cancel)
        .unwrap();
    assert_eq!(strict.diagnostics.len(), 1);
    assert_eq!(strict.diagnostics[0].code, DiagnosticCode::DelegateWithoutInterfaces);
    assert!(strict.units.is_empty());
}

#[test]
fn empty_snapshot_produces_nothing() {
    let output = Generator::default()
        .run(&Snapshot::new(), &CancellationToken::new())
        .unwrap();
    assert!(output.units.is_empty());
    assert!(output.diagnostics.is_empty());
}
