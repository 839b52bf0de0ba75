//! Exhaustive dispatch over the live alternative.
//!
//! Two ways to assemble a visit, both checked before the first dispatch:
//!
//! - A tuple of closures, one per alternative in declaration order, passed
//!   to [`Variant::visit`]. Arity and the shared result type are checked by
//!   the compiler.
//! - A [`Visitor`] assembled from handlers registered per alternative.
//!   [`VisitorBuilder::build`] rejects the visitor if some reachable
//!   alternative has no handler or has more than one.
//!
//! Closure parameters must be annotated (`|n: &i32| ..`) so they accept a
//! reference of any lifetime.

#![allow(unsafe_code)]

use std::fmt;

use alt_catalog::{AltDescriptor, Member, Position};
use smallvec::SmallVec;

use crate::{AltSet, Storage, Variant, VariantError};

/// One handler per alternative of `L`, each returning `R`.
///
/// Implemented for tuples of `FnOnce(&A_k) -> R` matching the tuple `L`.
#[diagnostic::on_unimplemented(
    message = "handlers do not match the alternatives of `{L}`",
    label = "expected one handler per alternative, in declaration order",
    note = "each handler takes `&A` for its alternative `A` and all handlers return the same type"
)]
pub trait Handlers<L: AltSet, R> {
    /// Run the handler for the alternative at `position`.
    ///
    /// # Safety
    ///
    /// `position` must be the live position of `storage`.
    #[doc(hidden)]
    unsafe fn dispatch(self, storage: &Storage<L>, position: Position) -> R;
}

/// Rejection of a [`VisitorBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisitorError {
    #[error("no handler for alternative {position} (`{alternative}`)")]
    Unhandled {
        position: Position,
        alternative: &'static str,
    },

    #[error("more than one handler for alternative {position} (`{alternative}`)")]
    Ambiguous {
        position: Position,
        alternative: &'static str,
    },
}

type Handler<'f, L, R> = Box<dyn Fn(&Storage<L>) -> R + 'f>;

/// Slots per position; sets have at most 8 alternatives.
type Slots<'f, L, R> = SmallVec<[Option<Handler<'f, L, R>>; 8]>;

/// Collects handlers for a [`Visitor`].
pub struct VisitorBuilder<'f, L: AltSet, R> {
    slots: Slots<'f, L, R>,
    duplicate: Option<Position>,
}

impl<'f, L: AltSet, R> VisitorBuilder<'f, L, R> {
    fn new() -> Self {
        VisitorBuilder {
            slots: (0..L::LEN).map(|_| None).collect(),
            duplicate: None,
        }
    }

    /// Register `handler` for alternative `T`.
    ///
    /// A second registration for the same alternative is remembered and
    /// makes [`build`](Self::build) fail.
    #[must_use]
    pub fn on<T, I>(mut self, handler: impl Fn(&T) -> R + 'f) -> Self
    where
        T: Member<L, I>,
    {
        let position = T::position();
        let erased: Handler<'f, L, R> = Box::new(move |storage: &Storage<L>| {
            // SAFETY: `Visitor::visit` only calls the handler stored at the
            // live position, and this one is stored at `T`'s position.
            handler(unsafe { storage.as_alt::<T>() })
        });
        let slot = &mut self.slots[position.index()];
        if slot.is_some() {
            self.duplicate.get_or_insert(position);
        } else {
            *slot = Some(erased);
        }
        self
    }

    /// Validate exhaustiveness and uniqueness.
    pub fn build(self) -> Result<Visitor<'f, L, R>, VisitorError> {
        if let Some(position) = self.duplicate {
            let error = VisitorError::Ambiguous {
                position,
                alternative: alternative_name::<L>(position),
            };
            tracing::debug!(%error, "visitor rejected");
            return Err(error);
        }
        let catalog = L::CATALOG;
        for alt in &catalog {
            let position = alt.position();
            if catalog.is_shadowed(position) || self.slots[position.index()].is_some() {
                continue;
            }
            let error = VisitorError::Unhandled {
                position,
                alternative: alt.type_name(),
            };
            tracing::debug!(%error, "visitor rejected");
            return Err(error);
        }
        Ok(Visitor { slots: self.slots })
    }
}

fn alternative_name<L: AltSet>(position: Position) -> &'static str {
    L::CATALOG.type_name(position).unwrap_or("<unknown>")
}

/// Validated set of handlers, one per reachable alternative of `L`.
///
/// Dispatch reads the discriminant and calls one stored handler; nothing is
/// allocated per visit.
pub struct Visitor<'f, L: AltSet, R> {
    slots: Slots<'f, L, R>,
}

impl<'f, L: AltSet, R> Visitor<'f, L, R> {
    pub fn builder() -> VisitorBuilder<'f, L, R> {
        VisitorBuilder::new()
    }

    /// Call the handler of `variant`'s live alternative.
    pub fn visit(&self, variant: &Variant<L>) -> Result<R, VariantError> {
        let storage = variant.storage();
        let position = storage
            .active()
            .ok_or(VariantError::EmptyVariantAccess { expected: None })?;
        match &self.slots[position.index()] {
            Some(handler) => Ok(handler(storage)),
            // Live positions are never shadowed, and `build` checked every
            // other position.
            None => unreachable!("validated visitor has no handler for {position}"),
        }
    }
}

impl<L: AltSet, R> fmt::Debug for Visitor<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handled: Vec<&'static str> = L::CATALOG
            .iter()
            .filter(|alt| self.slots[alt.position().index()].is_some())
            .map(AltDescriptor::type_name)
            .collect();
        f.debug_struct("Visitor").field("handled", &handled).finish()
    }
}
