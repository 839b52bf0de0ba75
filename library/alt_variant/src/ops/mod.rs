//! Per-alternative operations.
//!
//! Every alternative set carries tables of type-erased function pointers,
//! one entry per declared alternative, indexed by `position.index()`:
//! - [`AltOps`] for destruction (always present)
//! - [`CloneOps`] for copy construction and copy assignment, when every
//!   alternative is `Clone`
//! - [`EqOps`] / [`DebugOps`] for comparison and formatting
//!
//! The typed helpers below are the only code that changes which
//! alternative is live. Each clears the discriminant before running user
//! code (drop, clone, constructors), so a failure leaves the storage empty.

#![allow(unsafe_code)]

use std::fmt;

use alt_catalog::{Position, TypeList};

use crate::Storage;

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// An alternative set a [`Variant`](crate::Variant) can store.
///
/// Implemented for tuples of 1 to 8 `'static` types; sealed.
pub trait AltSet: TypeList + Sealed {
    /// Union of all alternatives; shapes [`Storage`].
    #[doc(hidden)]
    type Layout;
    /// Destruction table.
    const OPS: &'static [AltOps];
}

/// Alternative sets whose every alternative is `Clone`.
pub trait CloneSet: AltSet {
    const CLONE: &'static [CloneOps];
}

/// Alternative sets whose every alternative is `PartialEq`.
pub trait EqSet: AltSet {
    const EQ: &'static [EqOps];
}

/// Alternative sets whose every alternative is `Debug`.
pub trait DebugSet: AltSet {
    const DEBUG: &'static [DebugOps];
}

/// Lifetime entry of one alternative.
#[derive(Clone, Copy)]
pub struct AltOps {
    position: Position,
    drop_in_place: unsafe fn(*mut u8),
}

impl AltOps {
    pub const fn of<T: 'static>(index: usize) -> Self {
        AltOps {
            position: Position::nth(index),
            drop_in_place: drop_erased::<T>,
        }
    }

    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Destroy the stored value if this alternative is the live one.
    ///
    /// Returns whether a destructor ran.
    ///
    /// # Safety
    ///
    /// `self` must be the entry of `L::OPS` at `self.position().index()`.
    pub(crate) unsafe fn destroy_if_active<L: AltSet>(&self, storage: &mut Storage<L>) -> bool {
        if storage.active() != Some(self.position) {
            return false;
        }
        storage.mark_empty();
        // SAFETY: the discriminant named this alternative, and this entry was
        // generated for its type.
        unsafe { (self.drop_in_place)(storage.raw_mut()) };
        true
    }
}

/// Copy entry of one alternative.
#[derive(Clone, Copy)]
pub struct CloneOps {
    clone_into: unsafe fn(*const u8, *mut u8),
    clone_from: unsafe fn(*const u8, *mut u8),
}

impl CloneOps {
    pub const fn of<T: Clone + 'static>() -> Self {
        CloneOps {
            clone_into: clone_into_erased::<T>,
            clone_from: clone_from_erased::<T>,
        }
    }
}

/// Equality entry of one alternative.
#[derive(Clone, Copy)]
pub struct EqOps {
    eq: unsafe fn(*const u8, *const u8) -> bool,
}

impl EqOps {
    pub const fn of<T: PartialEq + 'static>() -> Self {
        EqOps { eq: eq_erased::<T> }
    }
}

/// Formatting entry of one alternative.
#[derive(Clone, Copy)]
pub struct DebugOps {
    fmt: unsafe fn(*const u8, &mut fmt::Formatter<'_>) -> fmt::Result,
}

impl DebugOps {
    pub const fn of<T: fmt::Debug + 'static>() -> Self {
        DebugOps {
            fmt: fmt_erased::<T>,
        }
    }
}

unsafe fn drop_erased<T>(ptr: *mut u8) {
    // SAFETY: callers pass a pointer to a live `T` they give up.
    unsafe { ptr.cast::<T>().drop_in_place() }
}

unsafe fn clone_into_erased<T: Clone>(src: *const u8, dst: *mut u8) {
    // SAFETY: `src` holds a live `T`; `dst` is an empty region fitting `T`.
    unsafe { dst.cast::<T>().write((*src.cast::<T>()).clone()) }
}

unsafe fn clone_from_erased<T: Clone>(src: *const u8, dst: *mut u8) {
    // SAFETY: both regions hold a live `T` and belong to distinct variants.
    unsafe { (*dst.cast::<T>()).clone_from(&*src.cast::<T>()) }
}

unsafe fn eq_erased<T: PartialEq>(lhs: *const u8, rhs: *const u8) -> bool {
    // SAFETY: both regions hold a live `T`.
    unsafe { *lhs.cast::<T>() == *rhs.cast::<T>() }
}

unsafe fn fmt_erased<T: fmt::Debug>(ptr: *const u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // SAFETY: `ptr` holds a live `T`.
    unsafe { fmt::Debug::fmt(&*ptr.cast::<T>(), f) }
}

// Typed operations

/// Construct `value` in place as the alternative at `position`.
///
/// # Safety
///
/// `storage` must be empty and `T` must be the type at `position` in `L`.
#[inline]
pub(crate) unsafe fn construct<L: AltSet, T>(storage: &mut Storage<L>, position: Position, value: T) {
    // SAFETY: forwarded from the caller.
    unsafe { storage.write(position, value) };
}

/// Destroy whatever alternative is live. Returns whether one was.
///
/// Dispatches through `L::OPS` by index, so exactly one entry is consulted.
pub(crate) fn teardown<L: AltSet>(storage: &mut Storage<L>) -> bool {
    let Some(position) = storage.active() else {
        return false;
    };
    let entry = &L::OPS[position.index()];
    // SAFETY: `entry` is the `L::OPS` entry for its own position.
    let destroyed = unsafe { entry.destroy_if_active(storage) };
    debug_assert!(destroyed, "operations table out of sync with discriminant");
    destroyed
}

/// Tear down the live alternative ahead of building the one at `incoming`.
fn teardown_for<L: AltSet>(storage: &mut Storage<L>, incoming: Position) {
    if let Some(outgoing) = storage.active() {
        tracing::trace!(
            from = ?L::CATALOG.type_name(outgoing),
            to = ?L::CATALOG.type_name(incoming),
            "tearing down alternative for reconstruction"
        );
        teardown(storage);
    }
}

/// Move-assign `value` as the alternative at `position`.
///
/// Same alternative live: plain assignment in place. Otherwise the old
/// alternative is destroyed and `value` is moved in.
///
/// # Safety
///
/// `T` must be the type at `position` in `L`.
pub(crate) unsafe fn assign_move<L: AltSet, T>(storage: &mut Storage<L>, position: Position, value: T) {
    if storage.active() == Some(position) {
        // SAFETY: the discriminant names `T`.
        unsafe { *storage.as_alt_mut::<T>() = value };
        return;
    }
    teardown_for(storage, position);
    // SAFETY: the storage is empty after teardown.
    unsafe { construct(storage, position, value) };
}

/// Copy-assign from `value` as the alternative at `position`.
///
/// Same alternative live: `Clone::clone_from` in place, no destructor or
/// constructor runs. Otherwise destructive reconstruction: the old value is
/// destroyed before `clone` runs, and a panicking `clone` leaves the
/// storage empty.
///
/// # Safety
///
/// `T` must be the type at `position` in `L`.
pub(crate) unsafe fn assign_clone<L: AltSet, T: Clone>(storage: &mut Storage<L>, position: Position, value: &T) {
    if storage.active() == Some(position) {
        // SAFETY: the discriminant names `T`.
        unsafe { storage.as_alt_mut::<T>() }.clone_from(value);
        return;
    }
    teardown_for(storage, position);
    let fresh = value.clone();
    // SAFETY: the storage is empty after teardown.
    unsafe { construct(storage, position, fresh) };
}

/// Destructive reconstruction through a fallible constructor.
///
/// The live alternative is always destroyed first. On `Err` the storage
/// stays empty and the error is handed back.
///
/// # Safety
///
/// `T` must be the type at `position` in `L`.
pub(crate) unsafe fn try_construct<L: AltSet, T, E>(
    storage: &mut Storage<L>,
    position: Position,
    make: impl FnOnce() -> Result<T, E>,
) -> Result<(), E> {
    teardown_for(storage, position);
    let value = make()?;
    // SAFETY: the storage is empty after teardown.
    unsafe { construct(storage, position, value) };
    Ok(())
}

/// Copy-construct `source`'s live alternative into the empty `target`.
pub(crate) fn clone_construct<L: CloneSet>(target: &mut Storage<L>, source: &Storage<L>) {
    let Some(position) = source.active() else {
        return;
    };
    debug_assert!(target.active().is_none(), "clone into a live alternative");
    let entry = &L::CLONE[position.index()];
    // SAFETY: `source` holds the alternative at `position`, `target` is empty,
    // and both share the layout of `L`.
    unsafe { (entry.clone_into)(source.raw(), target.raw_mut()) };
    target.mark_live(position);
}

/// Copy-assign `source` into `target` with the same policy as
/// [`assign_clone`].
pub(crate) fn clone_assign<L: CloneSet>(target: &mut Storage<L>, source: &Storage<L>) {
    match (target.active(), source.active()) {
        (Some(mine), Some(theirs)) if mine == theirs => {
            let entry = &L::CLONE[mine.index()];
            // SAFETY: both storages hold the alternative at `mine`.
            unsafe { (entry.clone_from)(source.raw(), target.raw_mut()) };
        }
        (_, Some(theirs)) => {
            teardown_for(target, theirs);
            clone_construct(target, source);
        }
        (_, None) => {
            teardown(target);
        }
    }
}

/// Compare the live alternatives of two storages.
pub(crate) fn live_eq<L: EqSet>(lhs: &Storage<L>, rhs: &Storage<L>) -> bool {
    match (lhs.active(), rhs.active()) {
        (None, None) => true,
        (Some(a), Some(b)) if a == b => {
            let entry = &L::EQ[a.index()];
            // SAFETY: both storages hold the alternative at `a`.
            unsafe { (entry.eq)(lhs.raw(), rhs.raw()) }
        }
        _ => false,
    }
}

/// `Debug` view of the live alternative of a storage.
pub(crate) struct LiveDebug<'a, L: DebugSet> {
    storage: &'a Storage<L>,
    position: Position,
}

impl<'a, L: DebugSet> LiveDebug<'a, L> {
    pub(crate) fn of(storage: &'a Storage<L>) -> Option<Self> {
        let position = storage.active()?;
        Some(LiveDebug { storage, position })
    }
}

impl<L: DebugSet> fmt::Debug for LiveDebug<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = &L::DEBUG[self.position.index()];
        // SAFETY: `position` was live when this view was taken, and the
        // shared borrow of `storage` keeps it live.
        unsafe { (entry.fmt)(self.storage.raw(), f) }
    }
}
