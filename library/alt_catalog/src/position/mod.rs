//! 1-based alternative positions.

use std::fmt;
use std::num::NonZeroU8;

/// Stable 1-based slot of an alternative in its set.
///
/// Non-zero so that `Option<Position>` packs into a single byte, with
/// `None` playing the role of the empty discriminant `0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Position(NonZeroU8);

impl Position {
    /// Position of the first declared alternative.
    pub const FIRST: Position = Position(NonZeroU8::MIN);

    /// Largest number of alternatives a set can address.
    pub const MAX_ALTERNATIVES: usize = u8::MAX as usize;

    /// Create a position from its raw discriminant value; `0` has no position.
    #[inline]
    pub const fn new(raw: u8) -> Option<Self> {
        match NonZeroU8::new(raw) {
            Some(raw) => Some(Position(raw)),
            None => None,
        }
    }

    /// Create the position of the 0-based `index`-th declared alternative.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= Self::MAX_ALTERNATIVES {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "index < MAX_ALTERNATIVES checked above"
        )]
        let raw = index as u8;
        Self::new(raw + 1)
    }

    /// Like [`Position::from_index`], for const tables built from literal indices.
    ///
    /// Panics (at compile time, when evaluated in a const) if `index` is out of range.
    #[inline]
    pub const fn nth(index: usize) -> Self {
        match Self::from_index(index) {
            Some(position) => position,
            None => panic!("alternative index exceeds Position::MAX_ALTERNATIVES"),
        }
    }

    /// Raw discriminant value (1..=255).
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// 0-based index into per-alternative tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.get())
    }
}
