//! The fragment catalog.
//!
//! Every piece of generated source text comes from a named fragment. The
//! built-in catalog ships with the crate; hosts may substitute their own
//! through [`FragmentSource`].

use std::fmt;

/// Identifies one fragment in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FragmentKey {
    /// `private const int InlineLength = N;`
    LengthConstant,
    /// Public `Length` property.
    LengthProperty,
    /// Explicit conversions to and from arrays.
    ArrayConversionOperators,
    /// Parameterless constructor.
    DefaultConstructor,
    /// Constructor copying from a read-only span.
    ReadOnlySpanConstructor,
    /// `AsSpan` and `AsReadOnlySpan`.
    AsSpanMethods,
    /// `Clear()`.
    ClearMethod,
    /// Public `Contains`.
    ContainsMethod,
    /// `CopyTo(Span<T>)`.
    CopyToMethod,
    /// `Fill(T)`.
    FillMethod,
    /// Public `GetEnumerator` returning `IEnumerator<T>`.
    GetEnumeratorInterface,
    /// Public `GetEnumerator` returning the ref struct enumerator.
    GetEnumeratorRefStruct,
    /// The nested ref struct `Enumerator` type.
    RefStructEnumeratorType,
    /// Public `IndexOf`.
    IndexOfMethod,
    /// `ToArray()`.
    ToArrayMethod,
    /// `TryCopyTo(Span<T>)`.
    TryCopyToMethod,
    /// `AsInterfaces()` accessor for the delegated interface view.
    InterfaceViewAccessor,
    /// The nested class implementing delegated interfaces.
    InterfaceViewType,
    /// Non-generic `ICollection`.
    ICollection,
    /// `ICollection<T>` apart from `Contains`.
    ICollectionT,
    /// Explicit `ICollection<T>.Contains`.
    ICollectionTContains,
    /// `IEnumerable.GetEnumerator` forwarding to the public method.
    IEnumerableViaMethod,
    /// `IEnumerable.GetEnumerator` forwarding to `IEnumerable<T>`.
    IEnumerableViaGeneric,
    /// `IEnumerable.GetEnumerator` with its own iterator body.
    IEnumerableBody,
    /// `IEnumerable.GetEnumerator` that throws.
    IEnumerableUnsupported,
    /// `IEnumerable<T>.GetEnumerator` with its own iterator body.
    IEnumerableTBody,
    /// `IEnumerable<T>.GetEnumerator` that throws.
    IEnumerableTUnsupported,
    /// Non-generic `IList`.
    IList,
    /// `IList<T>` apart from `IndexOf`.
    IListT,
    /// Explicit `IList<T>.IndexOf`.
    IListTIndexOf,
    /// `IReadOnlyCollection<T>`.
    IReadOnlyCollectionT,
    /// `IReadOnlyList<T>`.
    IReadOnlyListT,
    /// `IStructuralComparable`.
    IStructuralComparable,
    /// `IStructuralEquatable`.
    IStructuralEquatable,
    /// The collection struct declaration around its members.
    CollectionDeclaration,
    /// The companion factory type.
    FactoryType,
    /// Auto-generated marker, nullable context, and usings.
    UnitHeader,
    /// Marker interface and exception messages shared by every unit.
    SupportUnit,
}

impl FragmentKey {
    /// Every key, in catalog order.
    pub const ALL: [FragmentKey; 38] = [
        Self::LengthConstant,
        Self::LengthProperty,
        Self::ArrayConversionOperators,
        Self::DefaultConstructor,
        Self::ReadOnlySpanConstructor,
        Self::AsSpanMethods,
        Self::ClearMethod,
        Self::ContainsMethod,
        Self::CopyToMethod,
        Self::FillMethod,
        Self::GetEnumeratorInterface,
        Self::GetEnumeratorRefStruct,
        Self::RefStructEnumeratorType,
        Self::IndexOfMethod,
        Self::ToArrayMethod,
        Self::TryCopyToMethod,
        Self::InterfaceViewAccessor,
        Self::InterfaceViewType,
        Self::ICollection,
        Self::ICollectionT,
        Self::ICollectionTContains,
        Self::IEnumerableViaMethod,
        Self::IEnumerableViaGeneric,
        Self::IEnumerableBody,
        Self::IEnumerableUnsupported,
        Self::IEnumerableTBody,
        Self::IEnumerableTUnsupported,
        Self::IList,
        Self::IListT,
        Self::IListTIndexOf,
        Self::IReadOnlyCollectionT,
        Self::IReadOnlyListT,
        Self::IStructuralComparable,
        Self::IStructuralEquatable,
        Self::CollectionDeclaration,
        Self::FactoryType,
        Self::UnitHeader,
        Self::SupportUnit,
    ];

    /// Human-readable name used in error messages.
    #[must_use]
    pub fn name(self) -> String {
        format!("{self:?}")
    }

    /// The built-in template text.
    #[must_use]
    pub const fn builtin(self) -> &'static str {
        match self {
            Self::LengthConstant => include_str!("../templates/length_constant.cs.tmpl"),
            Self::LengthProperty => include_str!("../templates/length_property.cs.tmpl"),
            Self::ArrayConversionOperators => {
                include_str!("../templates/array_conversion_operators.cs.tmpl")
            }
            Self::DefaultConstructor => include_str!("../templates/default_constructor.cs.tmpl"),
            Self::ReadOnlySpanConstructor => {
                include_str!("../templates/read_only_span_constructor.cs.tmpl")
            }
            Self::AsSpanMethods => include_str!("../templates/as_span_methods.cs.tmpl"),
            Self::ClearMethod => include_str!("../templates/clear_method.cs.tmpl"),
            Self::ContainsMethod => include_str!("../templates/contains_method.cs.tmpl"),
            Self::CopyToMethod => include_str!("../templates/copy_to_method.cs.tmpl"),
            Self::FillMethod => include_str!("../templates/fill_method.cs.tmpl"),
            Self::GetEnumeratorInterface => {
                include_str!("../templates/get_enumerator_interface.cs.tmpl")
            }
            Self::GetEnumeratorRefStruct => {
                include_str!("../templates/get_enumerator_ref_struct.cs.tmpl")
            }
            Self::RefStructEnumeratorType => {
                include_str!("../templates/ref_struct_enumerator_type.cs.tmpl")
            }
            Self::IndexOfMethod => include_str!("../templates/index_of_method.cs.tmpl"),
            Self::ToArrayMethod => include_str!("../templates/to_array_method.cs.tmpl"),
            Self::TryCopyToMethod => include_str!("../templates/try_copy_to_method.cs.tmpl"),
            Self::InterfaceViewAccessor => {
                include_str!("../templates/interface_view_accessor.cs.tmpl")
            }
            Self::InterfaceViewType => include_str!("../templates/interface_view_type.cs.tmpl"),
            Self::ICollection => include_str!("../templates/icollection.cs.tmpl"),
            Self::ICollectionT => include_str!("../templates/icollection_t.cs.tmpl"),
            Self::ICollectionTContains => {
                include_str!("../templates/icollection_t_contains.cs.tmpl")
            }
            Self::IEnumerableViaMethod => include_str!("../templates/ienumerable_via_method.cs.tmpl"),
            Self::IEnumerableViaGeneric => {
                include_str!("../templates/ienumerable_via_generic.cs.tmpl")
            }
            Self::IEnumerableBody => include_str!("../templates/ienumerable_body.cs.tmpl"),
            Self::IEnumerableUnsupported => {
                include_str!("../templates/ienumerable_unsupported.cs.tmpl")
            }
            Self::IEnumerableTBody => include_str!("../templates/ienumerable_t_body.cs.tmpl"),
            Self::IEnumerableTUnsupported => {
                include_str!("../templates/ienumerable_t_unsupported.cs.tmpl")
            }
            Self::IList => include_str!("../templates/ilist.cs.tmpl"),
            Self::IListT => include_str!("../templates/ilist_t.cs.tmpl"),
            Self::IListTIndexOf => include_str!("../templates/ilist_t_index_of.cs.tmpl"),
            Self::IReadOnlyCollectionT => {
                include_str!("../templates/iread_only_collection_t.cs.tmpl")
            }
            Self::IReadOnlyListT => include_str!("../templates/iread_only_list_t.cs.tmpl"),
            Self::IStructuralComparable => {
                include_str!("../templates/istructural_comparable.cs.tmpl")
            }
            Self::IStructuralEquatable => {
                include_str!("../templates/istructural_equatable.cs.tmpl")
            }
            Self::CollectionDeclaration => {
                include_str!("../templates/collection_declaration.cs.tmpl")
            }
            Self::FactoryType => include_str!("../templates/factory_type.cs.tmpl"),
            Self::UnitHeader => include_str!("../templates/unit_header.cs.tmpl"),
            Self::SupportUnit => include_str!("../templates/support_unit.cs.tmpl"),
        }
    }
}

impl fmt::Display for FragmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Supplies template text for each fragment key.
pub trait FragmentSource: Send + Sync {
    /// Returns the template for `key`.
    fn fragment(&self, key: FragmentKey) -> &str;
}

/// The catalog compiled into the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinFragments;

impl FragmentSource for BuiltinFragments {
    fn fragment(&self, key: FragmentKey) -> &str {
        key.builtin()
    }
}
