//! Inline backing region for one variant.
//!
//! The region is a `MaybeUninit` of the set's layout union, so its size and
//! alignment are the maxima over all alternatives. The discriminant records
//! which alternative, if any, is currently live in it.

#![allow(unsafe_code)]

use std::mem::{align_of, size_of, MaybeUninit};

use crate::{AltSet, Position};

/// Backing region plus discriminant of a [`Variant`](crate::Variant).
///
/// Owned by exactly one variant. The typed accessors are `unsafe`: the
/// region itself cannot tell which alternative occupies it.
pub struct Storage<L: AltSet> {
    region: MaybeUninit<L::Layout>,
    active: Option<Position>,
}

impl<L: AltSet> Storage<L> {
    /// Storage with no live alternative.
    pub(crate) const fn empty() -> Self {
        const {
            assert!(size_of::<L::Layout>() >= L::CATALOG.max_size());
            assert!(align_of::<L::Layout>() >= L::CATALOG.max_align());
        }
        Storage {
            region: MaybeUninit::uninit(),
            active: None,
        }
    }

    /// Position of the live alternative, `None` when empty.
    #[inline]
    pub fn active(&self) -> Option<Position> {
        self.active
    }

    /// Raw discriminant: `0` when empty, otherwise the live position.
    #[inline]
    pub fn discriminant(&self) -> u8 {
        self.active.map_or(0, Position::get)
    }

    /// Untyped pointer to the region.
    #[inline]
    pub fn raw(&self) -> *const u8 {
        self.region.as_ptr().cast()
    }

    /// Untyped mutable pointer to the region.
    #[inline]
    pub fn raw_mut(&mut self) -> *mut u8 {
        self.region.as_mut_ptr().cast()
    }

    /// View the region as a `T`.
    ///
    /// # Safety
    ///
    /// A live `T` must occupy the region, i.e. the discriminant must name an
    /// alternative of type `T`.
    #[inline]
    pub unsafe fn as_alt<T>(&self) -> &T {
        // SAFETY: the caller guarantees a live `T`; the region is aligned for
        // every alternative.
        unsafe { &*self.raw().cast::<T>() }
    }

    /// Mutable view of the region as a `T`.
    ///
    /// # Safety
    ///
    /// Same contract as [`Storage::as_alt`].
    #[inline]
    pub unsafe fn as_alt_mut<T>(&mut self) -> &mut T {
        // SAFETY: see `as_alt`.
        unsafe { &mut *self.raw_mut().cast::<T>() }
    }

    /// Move `value` into the empty region and mark `position` live.
    ///
    /// # Safety
    ///
    /// The region must hold no live alternative and `T` must be the type of
    /// the alternative at `position`.
    #[inline]
    pub(crate) unsafe fn write<T>(&mut self, position: Position, value: T) {
        debug_assert!(self.active.is_none(), "write over a live alternative");
        // SAFETY: `T` is an alternative of `L`, so it fits the layout union.
        unsafe { self.raw_mut().cast::<T>().write(value) };
        self.active = Some(position);
    }

    /// Move the live `T` out, leaving the region empty.
    ///
    /// # Safety
    ///
    /// Same contract as [`Storage::as_alt`].
    #[inline]
    pub(crate) unsafe fn read<T>(&mut self) -> T {
        self.active = None;
        // SAFETY: the caller guarantees a live `T`; clearing the
        // discriminant first transfers ownership to the caller.
        unsafe { self.raw().cast::<T>().read() }
    }

    /// Forget the live alternative without dropping it. Used once its
    /// destructor has been started by the operations table.
    #[inline]
    pub(crate) fn mark_empty(&mut self) {
        self.active = None;
    }

    #[inline]
    pub(crate) fn mark_live(&mut self, position: Position) {
        self.active = Some(position);
    }
}

#[cfg(test)]
mod tests;
