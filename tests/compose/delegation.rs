//! Integration tests for delegated interface implementations

use inlinegen_compose::Composer;
use inlinegen_foundation::{Capability, CapabilitySet};
use inlinegen_model::{
    ContainerFrame, DeclarationKind, Descriptor, ElementField, Modifier, RawDeclaration, Validator,
};

fn compose(caps: CapabilitySet) -> String {
    let decl = RawDeclaration::new(
        "Demo.Buffer",
        ContainerFrame::new("Buffer", DeclarationKind::Struct)
            .with_modifiers([Modifier::Internal, Modifier::Partial]),
    )
    .with_namespace("Demo")
    .with_field(ElementField::new("element0", "string"))
    .with_length(4)
    .with_capabilities(caps);
    let descriptor = Descriptor::build(&decl, &Validator::default());
    Composer::default()
        .compose(descriptor.as_valid().unwrap())
        .unwrap()
        .text
}

fn delegated_list() -> String {
    compose(
        CapabilitySet::empty()
            .with(Capability::DelegatedInterfaces)
            .with(Capability::IListT)
            .with(Capability::ContainsMethod),
    )
}

#[test]
fn struct_lists_only_the_marker() {
    let text = delegated_list();
    assert!(text.contains("    internal partial struct Buffer : IInlineCollection<string>\n"));
    assert!(text.contains("        public sealed class InterfaceView : IList<string>\n"));
}

#[test]
fn interface_members_move_to_the_view() {
    let text = delegated_list();
    let view_at = text.find("public sealed class InterfaceView").unwrap();
    let (outside, inside) = text.split_at(view_at);

    assert!(outside.contains("public readonly InterfaceView AsInterfaces() => new(this);"));
    assert!(outside.contains("public readonly bool Contains(string item)"));
    assert!(!outside.contains("IList<string>."));

    assert!(inside.contains("private Buffer collection;"));
    assert!(inside.contains("bool ICollection<string>.Contains(string item)"));
    assert!(inside.contains("int IList<string>.IndexOf(string item)"));
    assert!(inside.contains("MemoryMarshal.CreateSpan(ref collection.element0, InlineLength)"));
    assert!(inside.contains("IEnumerator IEnumerable.GetEnumerator() => ((IEnumerable<string>)this).GetEnumerator();"));
    assert!(!inside.contains("readonly int ICollection<string>.Count"));
}

#[test]
fn enumerator_method_is_not_reused_by_the_view() {
    let text = compose(
        CapabilitySet::empty()
            .with(Capability::DelegatedInterfaces)
            .with(Capability::IEnumerableT)
            .with(Capability::RefStructEnumerator),
    );
    let view_at = text.find("public sealed class InterfaceView").unwrap();
    let inside = &text[view_at..];
    assert!(inside.contains("IEnumerator<string> IEnumerable<string>.GetEnumerator()\n"));
    assert!(inside.contains("var copy = collection;"));
    assert!(!inside.contains("RefStructEnumeratorNotBoxable"));
    assert!(text[..view_at].contains("public ref struct Enumerator"));
}

#[test]
fn delegate_without_interfaces_is_downgraded() {
    let text = compose(
        CapabilitySet::empty()
            .with(Capability::DelegatedInterfaces)
            .with(Capability::FillMethod),
    );
    assert!(!text.contains("InterfaceView"));
    assert!(text.contains("public void Fill(string value)"));
}
