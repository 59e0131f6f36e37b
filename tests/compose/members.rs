//! Integration tests for member selection and interface lists

use inlinegen_compose::Composer;
use inlinegen_foundation::{Capability, CapabilitySet};
use inlinegen_model::{
    ContainerFrame, DeclarationKind, Descriptor, ElementField, Modifier, RawDeclaration, Validator,
};

fn compose(caps: CapabilitySet) -> String {
    let decl = RawDeclaration::new(
        "Demo.Buffer",
        ContainerFrame::new("Buffer", DeclarationKind::Struct)
            .with_modifiers([Modifier::Public, Modifier::Partial]),
    )
    .with_namespace("Demo")
    .with_field(ElementField::new("element0", "int"))
    .with_length(5)
    .with_capabilities(caps);
    let descriptor = Descriptor::build(&decl, &Validator::default());
    Composer::default()
        .compose(descriptor.as_valid().unwrap())
        .unwrap()
        .text
}

fn everything_direct() -> CapabilitySet {
    let mut set = CapabilitySet::everything();
    set.remove(Capability::DelegatedInterfaces);
    set
}

fn declaration_line(text: &str) -> &str {
    text.lines()
        .find(|l| l.contains("partial struct Buffer"))
        .unwrap()
        .trim()
}

#[test]
fn list_t_lists_only_itself() {
    let text = compose(CapabilitySet::single(Capability::IListT));
    assert_eq!(
        declaration_line(&text),
        "public partial struct Buffer : IInlineCollection<int>, IList<int>"
    );
    // Implied interfaces are still implemented.
    assert!(text.contains("int ICollection<int>.Count => InlineLength;"));
    assert!(text.contains("IEnumerator<int> IEnumerable<int>.GetEnumerator()"));
    assert!(text.contains("IEnumerator IEnumerable.GetEnumerator() => ((IEnumerable<int>)this).GetEnumerator();"));
    assert!(text.contains("readonly int IList<int>.IndexOf(int item)"));
    assert!(text.contains("readonly bool ICollection<int>.Contains(int item)"));
}

#[test]
fn public_methods_satisfy_interfaces() {
    let text = compose(
        CapabilitySet::empty()
            .with(Capability::IListT)
            .with(Capability::ContainsMethod)
            .with(Capability::IndexOfMethod)
            .with(Capability::GetEnumeratorMethod),
    );
    assert!(text.contains("public readonly bool Contains(int item)"));
    assert!(text.contains("public readonly int IndexOf(int item)"));
    assert!(text.contains("public IEnumerator<int> GetEnumerator()"));
    assert!(!text.contains("ICollection<int>.Contains"));
    assert!(!text.contains("IList<int>.IndexOf"));
    assert!(!text.contains("IEnumerable<int>.GetEnumerator"));
    assert!(text.contains("IEnumerator IEnumerable.GetEnumerator() => GetEnumerator();"));
}

#[test]
fn ref_struct_enumerator_blocks_boxed_enumeration() {
    let text = compose(
        CapabilitySet::empty()
            .with(Capability::RefStructEnumerator)
            .with(Capability::IEnumerableT),
    );
    assert!(text.contains("public Enumerator GetEnumerator()"));
    assert!(text.contains("public ref struct Enumerator"));
    assert!(text.contains(
        "readonly IEnumerator<int> IEnumerable<int>.GetEnumerator() =>\n            throw new NotSupportedException(InlineCollectionMessages.RefStructEnumeratorNotBoxable);"
    ));
}

#[test]
fn members_follow_group_order() {
    let text = compose(everything_direct());
    let order = [
        "private const int InlineLength",
        "public readonly int Length",
        "public static explicit operator int[]",
        "public Buffer()",
        "public Buffer(ReadOnlySpan<int> items)",
        "public Span<int> AsSpan()",
        "public void Clear()",
        "public readonly bool Contains(int item)",
        "public readonly void CopyTo(Span<int> destination)",
        "public void Fill(int value)",
        "public Enumerator GetEnumerator()",
        "public ref struct Enumerator",
        "public readonly int IndexOf(int item)",
        "public readonly int[] ToArray()",
        "public readonly bool TryCopyTo(Span<int> destination)",
        "int ICollection.Count",
        "int ICollection<int>.Count",
        "IEnumerator IEnumerable.GetEnumerator()",
        "IEnumerator<int> IEnumerable<int>.GetEnumerator()",
        "bool IList.IsFixedSize",
        "int IList<int>.this[int index]",
        "int IReadOnlyCollection<int>.Count",
        "int IReadOnlyList<int>.this[int index]",
        "int IStructuralComparable.CompareTo",
        "bool IStructuralEquatable.Equals",
    ];
    let mut last = 0;
    for member in order {
        let at = text[last..]
            .find(member)
            .unwrap_or_else(|| panic!("{member} missing or out of order"));
        last += at;
    }
}

#[test]
fn everything_lists_minimal_cover() {
    let text = compose(everything_direct());
    assert_eq!(
        declaration_line(&text),
        "public partial struct Buffer : IInlineCollection<int>, IList, IList<int>, \
         IReadOnlyList<int>, IStructuralComparable, IStructuralEquatable"
    );
}
