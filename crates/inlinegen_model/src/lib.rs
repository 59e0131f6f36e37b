//! Declaration snapshots, validation, and descriptors for inlinegen.
//!
//! The flow is: host → [`RawDeclaration`] → [`Validator`] → [`Descriptor`] → composer
//!
//! # Module Structure
//!
//! - `types` - Raw declaration value types produced by the ingestion adapter
//! - `validate` - The precondition `Validator`
//! - `descriptor` - Immutable per-declaration `Descriptor`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod descriptor;
mod types;
mod validate;

pub use descriptor::{Descriptor, FACTORY_SUFFIX, FactoryNames, RejectedDeclaration, ValidDescriptor};
pub use types::{
    ContainerFrame, DeclarationId, DeclarationKind, ElementField, Modifier, RawDeclaration,
};
pub use validate::{DelegatePolicy, Validator};
