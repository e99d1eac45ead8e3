//! Defines [`Location`] for working with source text locations.

use std::{
    fmt::Display,
    ops::{Add, AddAssign, Range, Sub, SubAssign},
};

use derive_more::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_interner::PathId;

/// Represents a location in the source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Path of the source file.
    pub filepath: PathId,

    /// Offset of the starting byte in the source text.
    pub start: ByteOffset,

    /// Offset of the ending byte in the source text.
    pub end: ByteOffset,
}

/// Offset of a byte in a source text.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ByteOffset(pub usize);

impl From<usize> for ByteOffset {
    #[inline]
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl Add for ByteOffset {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for ByteOffset {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for ByteOffset {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for ByteOffset {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Dummy location — used as a placeholder in tests.
///
/// # Note
/// Using the dummy location outside of tests is not recommended: it will
/// confuse diagnostics that try to point a human at real source text.
pub const DUMMY_LOCATION: Location = Location {
    filepath: pylon_interner::DUMMY_PATH_ID,
    start: ByteOffset(0),
    end: ByteOffset(0),
};

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}..{}", self.start, self.end))
    }
}

impl From<Location> for Range<usize> {
    fn from(location: Location) -> Self {
        location.start.0..location.end.0
    }
}

/// Orders two locations by their starting byte, then by their ending byte.
///
/// [`Location`] itself doesn't implement [`Ord`] (comparing locations across
/// different files isn't meaningful), but the tag-ambiguity diagnostic (see
/// `pylon_name_resolution`) needs a deterministic "source order" for
/// same-file candidates, so callers sort on this tuple explicitly.
#[must_use]
pub fn source_order_key(location: Location) -> (usize, usize) {
    (location.start.0, location.end.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_offset_arithmetic() {
        assert_eq!(ByteOffset(3) + ByteOffset(4), ByteOffset(7));
        assert_eq!(ByteOffset(7) - ByteOffset(4), ByteOffset(3));
    }

    #[test]
    fn source_order_key_orders_by_start_then_end() {
        let filepath = pylon_interner::DUMMY_PATH_ID;
        let earlier = Location {
            filepath,
            start: ByteOffset(0),
            end: ByteOffset(3),
        };
        let later = Location {
            filepath,
            start: ByteOffset(4),
            end: ByteOffset(6),
        };

        assert!(source_order_key(earlier) < source_order_key(later));
    }
}
