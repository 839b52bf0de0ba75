//! Tuple implementations of [`AltSet`] and friends.
//!
//! One macro arm per arity generates the layout union, the operation
//! tables and the [`Handlers`] impl for a tuple of closures of the same
//! arity.

#![allow(unsafe_code)]

use std::fmt;
use std::mem::ManuallyDrop;

use alt_catalog::Position;

use crate::ops::Sealed;
use crate::{AltOps, AltSet, CloneOps, CloneSet, DebugOps, DebugSet, EqOps, EqSet, Handlers, Storage};

macro_rules! alt_set {
    ($Layout:ident { $($T:ident / $F:ident @ $idx:tt),+ }) => {
        #[doc(hidden)]
        #[allow(non_snake_case, dead_code)]
        pub union $Layout<$($T),+> {
            $($T: ManuallyDrop<$T>,)+
        }

        impl<$($T: 'static),+> Sealed for ($($T,)+) {}

        impl<$($T: 'static),+> AltSet for ($($T,)+) {
            type Layout = $Layout<$($T),+>;
            const OPS: &'static [AltOps] = &[$(AltOps::of::<$T>($idx)),+];
        }

        impl<$($T: Clone + 'static),+> CloneSet for ($($T,)+) {
            const CLONE: &'static [CloneOps] = &[$(CloneOps::of::<$T>()),+];
        }

        impl<$($T: PartialEq + 'static),+> EqSet for ($($T,)+) {
            const EQ: &'static [EqOps] = &[$(EqOps::of::<$T>()),+];
        }

        impl<$($T: fmt::Debug + 'static),+> DebugSet for ($($T,)+) {
            const DEBUG: &'static [DebugOps] = &[$(DebugOps::of::<$T>()),+];
        }

        impl<R, $($T: 'static,)+ $($F: FnOnce(&$T) -> R),+> Handlers<($($T,)+), R> for ($($F,)+) {
            unsafe fn dispatch(self, storage: &Storage<($($T,)+)>, position: Position) -> R {
                match position.index() {
                    // SAFETY: the caller guarantees `position` is live.
                    $($idx => (self.$idx)(unsafe { storage.as_alt::<$T>() }),)+
                    _ => unreachable!("position {position} is outside the alternative set"),
                }
            }
        }
    };
}

alt_set!(Layout1 { A0 / F0 @ 0 });
alt_set!(Layout2 { A0 / F0 @ 0, A1 / F1 @ 1 });
alt_set!(Layout3 { A0 / F0 @ 0, A1 / F1 @ 1, A2 / F2 @ 2 });
alt_set!(Layout4 { A0 / F0 @ 0, A1 / F1 @ 1, A2 / F2 @ 2, A3 / F3 @ 3 });
alt_set!(Layout5 { A0 / F0 @ 0, A1 / F1 @ 1, A2 / F2 @ 2, A3 / F3 @ 3, A4 / F4 @ 4 });
alt_set!(Layout6 { A0 / F0 @ 0, A1 / F1 @ 1, A2 / F2 @ 2, A3 / F3 @ 3, A4 / F4 @ 4, A5 / F5 @ 5 });
alt_set!(Layout7 {
    A0 / F0 @ 0, A1 / F1 @ 1, A2 / F2 @ 2, A3 / F3 @ 3, A4 / F4 @ 4, A5 / F5 @ 5, A6 / F6 @ 6
});
alt_set!(Layout8 {
    A0 / F0 @ 0, A1 / F1 @ 1, A2 / F2 @ 2, A3 / F3 @ 3, A4 / F4 @ 4, A5 / F5 @ 5, A6 / F6 @ 6,
    A7 / F7 @ 7
});
