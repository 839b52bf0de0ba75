//! Alternative descriptors and the catalog that aggregates them.
//!
//! Catalogs are built in const context, once per alternative set, and
//! stored as associated constants of [`TypeList`](crate::TypeList).

use std::any::TypeId;
use std::fmt;
use std::mem::{align_of, size_of};

use crate::Position;

/// Compile-time facts about one alternative.
///
/// `type_id` and `type_name` are kept as function pointers: neither is
/// callable in const context, but taking their address is.
#[derive(Clone, Copy)]
pub struct AltDescriptor {
    position: Position,
    size: usize,
    align: usize,
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
}

impl AltDescriptor {
    /// Describe `T` as the 0-based `index`-th alternative.
    pub const fn of<T: 'static>(index: usize) -> Self {
        AltDescriptor {
            position: Position::nth(index),
            size: size_of::<T>(),
            align: align_of::<T>(),
            type_id: TypeId::of::<T>,
            type_name: std::any::type_name::<T>,
        }
    }

    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub const fn align(&self) -> usize {
        self.align
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Whether this alternative stores `T`.
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }
}

impl fmt::Debug for AltDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AltDescriptor")
            .field("position", &self.position)
            .field("type_name", &self.type_name())
            .field("size", &self.size)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

/// Descriptor table of an alternative set, with its layout maxima.
#[derive(Clone, Copy)]
pub struct Catalog {
    alternatives: &'static [AltDescriptor],
    max_size: usize,
    max_align: usize,
}

impl Catalog {
    /// Build a catalog from descriptors listed in declaration order.
    ///
    /// Panics if descriptor positions are not `1..=len` in order. Evaluated
    /// in const context, that panic is a build error.
    pub const fn new(alternatives: &'static [AltDescriptor]) -> Self {
        let mut max_size = 0;
        let mut max_align = 1;
        let mut i = 0;
        while i < alternatives.len() {
            let alt = &alternatives[i];
            assert!(
                alt.position.index() == i,
                "alternative positions must follow declaration order"
            );
            if alt.size > max_size {
                max_size = alt.size;
            }
            if alt.align > max_align {
                max_align = alt.align;
            }
            i += 1;
        }
        Catalog {
            alternatives,
            max_size,
            max_align,
        }
    }

    /// Number of declared alternatives, duplicates included.
    #[inline]
    pub const fn len(&self) -> usize {
        self.alternatives.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Size of the largest alternative.
    #[inline]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Strictest alignment among alternatives (at least 1).
    #[inline]
    pub const fn max_align(&self) -> usize {
        self.max_align
    }

    /// First position holding `T`, or `None` if `T` is not an alternative.
    #[inline]
    pub fn position_of<T: 'static>(&self) -> Option<Position> {
        self.position_of_id(TypeId::of::<T>())
    }

    /// First position whose alternative has type id `id`.
    pub fn position_of_id(&self, id: TypeId) -> Option<Position> {
        self.alternatives
            .iter()
            .find(|alt| alt.type_id() == id)
            .map(AltDescriptor::position)
    }

    #[inline]
    pub fn contains<T: 'static>(&self) -> bool {
        self.position_of::<T>().is_some()
    }

    #[inline]
    pub fn descriptor(&self, position: Position) -> Option<&'static AltDescriptor> {
        self.alternatives.get(position.index())
    }

    #[inline]
    pub fn type_name(&self, position: Position) -> Option<&'static str> {
        self.descriptor(position).map(AltDescriptor::type_name)
    }

    /// First position declaring the same type as `position`.
    ///
    /// Identity unless `position` repeats an earlier alternative.
    pub fn canonical(&self, position: Position) -> Position {
        if position == Position::FIRST {
            return position;
        }
        let Some(alt) = self.descriptor(position) else {
            return position;
        };
        let id = alt.type_id();
        self.alternatives[..position.index()]
            .iter()
            .find(|earlier| earlier.type_id() == id)
            .map_or(position, AltDescriptor::position)
    }

    /// Whether an earlier position declares the same type, so `position`
    /// can never become active.
    #[inline]
    pub fn is_shadowed(&self, position: Position) -> bool {
        self.canonical(position) != position
    }

    /// Descriptors in declaration order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'static, AltDescriptor> {
        self.alternatives.iter()
    }
}

impl IntoIterator for &Catalog {
    type Item = &'static AltDescriptor;
    type IntoIter = std::slice::Iter<'static, AltDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("alternatives", &self.alternatives)
            .field("max_size", &self.max_size)
            .field("max_align", &self.max_align)
            .finish()
    }
}
