//! Alt Catalog - compile-time facts about a closed set of alternatives
//!
//! An alternative set is written as a tuple of `'static` types, e.g.
//! `(i32, String, Vec<u8>)`. This crate describes such a set before any
//! value of it exists:
//! - [`Position`], the stable 1-based slot of each alternative
//! - [`AltDescriptor`], the size, alignment and identity of one alternative
//! - [`Catalog`], the descriptor table with `max_size` / `max_align`
//! - [`TypeList`], implemented for tuples of 1 to 8 types
//! - [`Member`] for build-time membership; naming a type outside the set is a
//!   compile error, not a runtime fault
//!
//! # Duplicates
//!
//! A type may appear more than once in a set. All lookups resolve to its
//! first occurrence; later occurrences are *shadowed* and never become
//! active. Picking a shadowed slot through [`Member`] requires an explicit
//! [`At`] marker, which still resolves to the first occurrence.

mod catalog;
mod list;
mod position;

pub use catalog::{AltDescriptor, Catalog};
pub use list::{At, Member, TypeList};
pub use position::Position;
