//! Alt Variant - a closed sum type stored in place
//!
//! [`Variant<L>`] holds at most one value of one of the types in the tuple
//! `L`, inside an inline region sized and aligned for the largest of them.
//! No heap allocation happens on any operation.
//!
//! ```text
//! let mut v: Variant<(i32, String)> = Variant::from_value(42);
//! assert!(v.is::<i32, _>());
//! v.set(String::from("hi"));
//! let len = v.visit((|n: &i32| n.to_string().len(), |s: &String| s.len()))?;
//! ```
//!
//! # Layers
//!
//! - [`Storage`], the inline region plus the discriminant (`0` = empty)
//! - per-alternative operation tables ([`AltOps`], [`CloneOps`], [`EqOps`],
//!   [`DebugOps`]) indexed by position, generated for tuples of 1 to 8 types
//! - [`Variant`], the facade; every lifetime transition goes through the tables
//! - [`Handlers`] / [`Visitor`] for exhaustive dispatch on the live alternative
//!
//! # Failure model
//!
//! Naming a type outside `L` is a compile error (see [`Member`]). Runtime
//! failures are [`VariantError`]s. Assigning a different alternative tears
//! the old one down *before* the new one is built: if building fails or
//! panics, the variant is left empty, never half-initialized.

mod error;
mod ops;
mod set;
mod storage;
mod variant;
mod visitor;

#[cfg(test)]
mod test_helpers;

pub use alt_catalog::{AltDescriptor, At, Catalog, Member, Position, TypeList};
pub use error::VariantError;
pub use ops::{AltOps, AltSet, CloneOps, CloneSet, DebugOps, DebugSet, EqOps, EqSet};
pub use storage::Storage;
pub use variant::Variant;
pub use visitor::{Handlers, Visitor, VisitorBuilder, VisitorError};
