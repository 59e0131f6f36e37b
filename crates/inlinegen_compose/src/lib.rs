//! Source composition for inlinegen.
//!
//! This crate turns a [`ValidDescriptor`](inlinegen_model::ValidDescriptor)
//! into C# source text:
//! - [`CompositionPlan`] - Every structural decision, resolved once
//! - [`MEMBER_TABLE`] - Member slots in canonical order
//! - [`FragmentSource`] - The catalog of named source fragments
//! - [`BodyWriter`] - Member separators
//! - [`InterfaceLists`] - Minimal base-interface lists
//! - [`Composer`] - Assembles complete [`GeneratedUnit`]s

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod body;
pub mod composer;
pub mod fragment;
pub mod interfaces;
pub mod members;
pub mod nesting;
pub mod plan;
pub mod template;

pub use body::{BodyWriter, Group};
pub use composer::{
    ComposeOptions, Composer, GeneratedUnit, SUPPORT_HINT_NAME, SUPPORT_NAMESPACE, hint_name,
};
pub use fragment::{BuiltinFragments, FragmentKey, FragmentSource};
pub use interfaces::{InterfaceLists, MARKER_INTERFACE, interface_name, minimal_families};
pub use members::{MEMBER_TABLE, MemberRow, Placement};
pub use plan::{
    Binding, CompositionPlan, EnumeratorVariant, GenericEnumeration, InterfaceStrategy,
    NonGenericEnumeration,
};
pub use template::{Bindings, render};
