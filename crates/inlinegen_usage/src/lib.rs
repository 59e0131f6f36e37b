//! Collection-expression size checks for inlinegen.
//!
//! Once a pass knows which declarations are valid and how long they are, each
//! [`ConstructionSite`] targeting one of them is checked against its
//! declared length.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod check;
mod site;

pub use check::{LengthMap, UsageChecker};
pub use site::ConstructionSite;
