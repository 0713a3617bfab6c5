//! Read direction.
//!
//! Symmetric motions (next/previous char, line below/above) share one
//! implementation parameterized by a [`Direction`] instead of keeping two
//! mirrored copies.

use std::fmt;

/// The axis a motion reads along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the end of the document.
    Forward,
    /// Toward the start of the document.
    Backward,
}

impl Direction {
    /// True when `pos` lies strictly beyond `limit` when reading in this
    /// direction: after it going forward, before it going backward.
    #[inline]
    #[must_use]
    pub const fn is_past(self, pos: usize, limit: usize) -> bool {
        match self {
            Self::Forward => pos > limit,
            Self::Backward => pos < limit,
        }
    }

    /// Move `from` by `count` steps in this direction, saturating at
    /// `0` and at `max`.
    #[inline]
    #[must_use]
    pub fn offset(self, from: usize, count: usize, max: usize) -> usize {
        match self {
            Self::Forward => from.saturating_add(count).min(max),
            Self::Backward => from.saturating_sub(count).min(max),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Backward => f.write_str("backward"),
        }
    }
}
