//! Cursor state — a position and its remembered virtual column.
//!
//! Vertical motion has to remember where the user *wanted* to be. Moving down
//! from column 8 through a 3-column line and back onto a long line should land
//! on column 8 again, not column 2. Instead of hiding that memory in editor
//! globals, it rides inside the cursor value as `logical_offset`: the number
//! of virtual columns past the real content at `position`.
//!
//! # Invariants
//!
//! - `position` is a char offset on a grapheme cluster boundary, within
//!   `0..=len_chars()` of the document.
//! - `logical_offset` is non-zero only right after a vertical move that
//!   couldn't reach its column (short line, or a column inside a tab).
//! - A non-vertical motion that changes `position` resets it to 0; one that
//!   leaves `position` where it was keeps it. [`CursorState::moved_to`]
//!   encodes that rule.

use std::fmt;

/// Where the cursor is, plus how far past it the user's intended column lies.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CursorState {
    /// Char offset into the document.
    pub position: usize,

    /// Virtual columns beyond the real content at `position`.
    pub logical_offset: usize,
}

impl CursorState {
    /// The origin, with no remembered column.
    pub const ZERO: Self = Self {
        position: 0,
        logical_offset: 0,
    };

    /// A cursor at `position` with no remembered column.
    #[inline]
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self {
            position,
            logical_offset: 0,
        }
    }

    /// A cursor at `position` remembering `logical_offset` extra columns.
    #[inline]
    #[must_use]
    pub const fn with_logical_offset(position: usize, logical_offset: usize) -> Self {
        Self {
            position,
            logical_offset,
        }
    }

    /// The result of a non-vertical motion landing on `position`.
    ///
    /// If the cursor is already there, it comes back untouched (remembered
    /// column included). Otherwise the remembered column is dropped.
    #[inline]
    #[must_use]
    pub const fn moved_to(self, position: usize) -> Self {
        if self.position == position {
            self
        } else {
            Self::new(position)
        }
    }
}

impl fmt::Debug for CursorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.logical_offset == 0 {
            write!(f, "Cursor({})", self.position)
        } else {
            write!(f, "Cursor({}+{})", self.position, self.logical_offset)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_default() {
        assert_eq!(CursorState::ZERO, CursorState::default());
        assert_eq!(CursorState::ZERO, CursorState::new(0));
    }

    #[test]
    fn moved_to_new_position_resets_offset() {
        let c = CursorState::with_logical_offset(3, 5);
        assert_eq!(c.moved_to(4), CursorState::new(4));
    }

    #[test]
    fn moved_to_same_position_keeps_offset() {
        let c = CursorState::with_logical_offset(3, 5);
        assert_eq!(c.moved_to(3), c);
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", CursorState::new(7)), "Cursor(7)");
        assert_eq!(
            format!("{:?}", CursorState::with_logical_offset(2, 3)),
            "Cursor(2+3)"
        );
    }
}
