//! The variant facade.
//!
//! [`Variant<L>`] pairs a [`Storage`] with the operation tables of `L`.
//! Every method that names an alternative is bounded by `T: Member<L, I>`;
//! the index marker `I` is inferred (`v.get::<i32, _>()`) unless the type
//! occurs more than once in `L`.

#![allow(unsafe_code)]

use std::any::type_name;
use std::error::Error;
use std::fmt;
use std::marker::PhantomData;

use alt_catalog::{Catalog, Member, Position};

use crate::ops::{self, LiveDebug};
use crate::{AltSet, CloneSet, DebugSet, EqSet, Handlers, Storage, VariantError};

/// A value of exactly one alternative of `L`, or empty.
///
/// Stored inline; moving a `Variant` moves its storage with it. Not
/// synchronized: sharing one instance across threads needs an external lock.
pub struct Variant<L: AltSet> {
    storage: Storage<L>,
    _owns: PhantomData<L>,
}

impl<L: AltSet> Variant<L> {
    /// An empty variant (discriminant `0`).
    pub const fn new() -> Self {
        Variant {
            storage: Storage::empty(),
            _owns: PhantomData,
        }
    }

    /// A variant holding `value`.
    pub fn from_value<T, I>(value: T) -> Self
    where
        T: Member<L, I>,
    {
        let mut variant = Self::new();
        // SAFETY: fresh storage is empty and `T` lives at `T::position()`.
        unsafe { ops::construct(&mut variant.storage, T::position(), value) };
        variant
    }

    /// Catalog of `L`.
    pub const fn catalog() -> Catalog {
        L::CATALOG
    }

    /// Whether `T` is the live alternative.
    #[inline]
    pub fn is<T, I>(&self) -> bool
    where
        T: Member<L, I>,
    {
        self.storage.active() == Some(T::position())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.active().is_none()
    }

    /// Position of the live alternative.
    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.storage.active()
    }

    /// `0` when empty, otherwise the live position.
    #[inline]
    pub fn discriminant(&self) -> u8 {
        self.storage.discriminant()
    }

    /// Type name of the live alternative.
    pub fn type_name(&self) -> Option<&'static str> {
        self.storage
            .active()
            .and_then(|position| L::CATALOG.type_name(position))
    }

    fn expect_live<T, I>(&self) -> Result<(), VariantError>
    where
        T: Member<L, I>,
    {
        match self.storage.active() {
            Some(active) if active == T::position() => Ok(()),
            Some(active) => Err(VariantError::TypeMismatch {
                expected: type_name::<T>(),
                found: L::CATALOG.type_name(active).unwrap_or("<unknown>"),
            }),
            None => Err(VariantError::EmptyVariantAccess {
                expected: Some(type_name::<T>()),
            }),
        }
    }

    /// Borrow the live `T`.
    pub fn get<T, I>(&self) -> Result<&T, VariantError>
    where
        T: Member<L, I>,
    {
        self.expect_live::<T, I>()?;
        // SAFETY: `T` was just checked to be live.
        Ok(unsafe { self.storage.as_alt::<T>() })
    }

    /// Mutably borrow the live `T`.
    pub fn get_mut<T, I>(&mut self) -> Result<&mut T, VariantError>
    where
        T: Member<L, I>,
    {
        self.expect_live::<T, I>()?;
        // SAFETY: `T` was just checked to be live.
        Ok(unsafe { self.storage.as_alt_mut::<T>() })
    }

    /// Move-assign `value`.
    ///
    /// If `T` is already live it is assigned in place (dropping the old
    /// `T`); otherwise the live alternative is destroyed and `value` moved in.
    pub fn set<T, I>(&mut self, value: T) -> &mut T
    where
        T: Member<L, I>,
    {
        // SAFETY: `T` lives at `T::position()`.
        unsafe {
            ops::assign_move(&mut self.storage, T::position(), value);
            self.storage.as_alt_mut::<T>()
        }
    }

    /// Copy-assign from `value`.
    ///
    /// If `T` is already live this is `Clone::clone_from` in place. Otherwise
    /// the live alternative is destroyed first, then `value` is cloned in; a
    /// panicking clone leaves the variant empty.
    pub fn assign<T, I>(&mut self, value: &T) -> &mut T
    where
        T: Member<L, I> + Clone,
    {
        // SAFETY: `T` lives at `T::position()`.
        unsafe {
            ops::assign_clone(&mut self.storage, T::position(), value);
            self.storage.as_alt_mut::<T>()
        }
    }

    /// Rebuild the variant as a `T` produced by `make`.
    ///
    /// The live alternative is destroyed before `make` runs, whatever it
    /// returns. On error the variant stays empty and the error is reported
    /// as [`VariantError::ConstructionFailure`]; nothing is rolled back.
    pub fn try_emplace<T, I, E>(
        &mut self,
        make: impl FnOnce() -> Result<T, E>,
    ) -> Result<&mut T, VariantError>
    where
        T: Member<L, I>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        // SAFETY: `T` lives at `T::position()`.
        let built = unsafe { ops::try_construct(&mut self.storage, T::position(), make) };
        match built {
            // SAFETY: `try_construct` made `T` live.
            Ok(()) => Ok(unsafe { self.storage.as_alt_mut::<T>() }),
            Err(source) => {
                let alternative = type_name::<T>();
                tracing::debug!(alternative, "construction failed; variant left empty");
                Err(VariantError::ConstructionFailure {
                    alternative,
                    source: source.into(),
                })
            }
        }
    }

    /// Move the live `T` out, leaving the variant empty.
    pub fn take<T, I>(&mut self) -> Result<T, VariantError>
    where
        T: Member<L, I>,
    {
        self.expect_live::<T, I>()?;
        // SAFETY: `T` was just checked to be live.
        Ok(unsafe { self.storage.read::<T>() })
    }

    /// Destroy the live alternative, if any. Returns whether one was live.
    pub fn clear(&mut self) -> bool {
        ops::teardown(&mut self.storage)
    }

    /// Dispatch the live alternative to its handler in `handlers`.
    ///
    /// `handlers` is a tuple with one closure per alternative, in
    /// declaration order: `(|a: &A0| .., |b: &A1| ..)`.
    pub fn visit<H, R>(&self, handlers: H) -> Result<R, VariantError>
    where
        H: Handlers<L, R>,
    {
        let position = self
            .storage
            .active()
            .ok_or(VariantError::EmptyVariantAccess { expected: None })?;
        // SAFETY: `position` is the live position of `self.storage`.
        Ok(unsafe { handlers.dispatch(&self.storage, position) })
    }

    pub(crate) fn storage(&self) -> &Storage<L> {
        &self.storage
    }
}

impl<L: AltSet> Default for Variant<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: AltSet> Drop for Variant<L> {
    fn drop(&mut self) {
        ops::teardown(&mut self.storage);
    }
}

impl<L: CloneSet> Clone for Variant<L> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        ops::clone_construct(&mut copy.storage, &self.storage);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        ops::clone_assign(&mut self.storage, &source.storage);
    }
}

impl<L: EqSet> PartialEq for Variant<L> {
    fn eq(&self, other: &Self) -> bool {
        ops::live_eq(&self.storage, &other.storage)
    }
}

impl<L: DebugSet> fmt::Debug for Variant<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match LiveDebug::of(&self.storage) {
            Some(live) => f.debug_tuple("Variant").field(&live).finish(),
            None => f.write_str("Variant(<empty>)"),
        }
    }
}
