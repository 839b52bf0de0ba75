//! Tuples as alternative sets.
//!
//! [`TypeList`] is implemented for tuples of 1 to 8 `'static` types.
//! [`Member`] is implemented for each element of each such tuple, indexed
//! by an [`At`] marker so duplicate element types stay coherent.

use crate::{AltDescriptor, Catalog, Position};

/// An ordered, closed set of alternative types.
pub trait TypeList: 'static {
    /// Number of declared alternatives, duplicates included.
    const LEN: usize;
    /// One descriptor per declared alternative, in declaration order.
    const ALTERNATIVES: &'static [AltDescriptor];
    /// Catalog over [`TypeList::ALTERNATIVES`].
    const CATALOG: Catalog;
}

/// Marker selecting the 0-based `N`-th slot of a type list.
///
/// Normally inferred. Only needed when a type occurs more than once.
pub enum At<const N: usize> {}

/// Build-time proof that `Self` is one of the alternatives of `L`.
///
/// Any API bounded by `T: Member<L, I>` rejects non-member types during
/// type checking, so an out-of-set alternative can never reach run time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an alternative of `{L}`",
    label = "not declared in this alternative set",
    note = "only the types listed in the alternative tuple can be stored, queried or handled"
)]
pub trait Member<L: TypeList, I>: 'static {
    /// Slot selected by `I`.
    const DECLARED: Position;

    /// Position `Self` resolves to: its first occurrence in `L`.
    #[inline]
    fn position() -> Position {
        L::CATALOG.canonical(Self::DECLARED)
    }
}

macro_rules! member {
    ([$($All:ident),+]; $T:ident @ $idx:tt) => {
        impl<$($All: 'static),+> Member<($($All,)+), At<$idx>> for $T {
            const DECLARED: Position = Position::nth($idx);
        }
    };
}

// The full element list is squashed into one tt so it can be repeated once
// per member impl.
macro_rules! members {
    ($all:tt; $($T:ident @ $idx:tt),+) => {
        $( member!($all; $T @ $idx); )+
    };
}

macro_rules! type_list {
    ($($T:ident @ $idx:tt),+) => {
        impl<$($T: 'static),+> TypeList for ($($T,)+) {
            const LEN: usize = Self::ALTERNATIVES.len();
            const ALTERNATIVES: &'static [AltDescriptor] = &[$(AltDescriptor::of::<$T>($idx)),+];
            const CATALOG: Catalog = Catalog::new(Self::ALTERNATIVES);
        }

        members!([$($T),+]; $($T @ $idx),+);
    };
}

type_list!(A0 @ 0);
type_list!(A0 @ 0, A1 @ 1);
type_list!(A0 @ 0, A1 @ 1, A2 @ 2);
type_list!(A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3);
type_list!(A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4);
type_list!(A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4, A5 @ 5);
type_list!(A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4, A5 @ 5, A6 @ 6);
type_list!(A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4, A5 @ 5, A6 @ 6, A7 @ 7);
