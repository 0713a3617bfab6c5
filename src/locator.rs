//! Locators — the motion vocabulary.
//!
//! A [`Locator`] is a motion with its parameters bound: "3 chars forward",
//! "line 42", "end of line". The input layer builds one per keystroke and
//! calls [`Locator::locate`] once to get the next cursor:
//!
//! | Locator | Vim key | Lands on |
//! |---------|---------|----------|
//! | [`CharInLine`](Locator::CharInLine) | `l` / `h` | `count` clusters along the line |
//! | [`OntoLine`](Locator::OntoLine) | `Esc` | nearest content cluster of the line |
//! | [`RelativeLineStart`](Locator::RelativeLineStart) | `+` / `-` | start of the line `count` away |
//! | [`RelativeLine`](Locator::RelativeLine) | `j` / `k` | same visual column `count` lines away |
//! | [`LineBoundary`](Locator::LineBoundary) | `$` / `0` | end or start of the line |
//! | [`NonWhitespaceOrNewline`](Locator::NonWhitespaceOrNewline) | `^` (after `0`) | first non-blank cluster |
//! | [`LineNum`](Locator::LineNum) | `{n}gg` | start of line `n` |
//! | [`LastLine`](Locator::LastLine) | `G` | start of the last line |
//!
//! The set is closed: adding a motion means adding a variant here, and the
//! compiler points at every `match` that must handle it.
//!
//! Locators hold no state between calls. The only memory carried from one
//! motion to the next is the `logical_offset` inside the [`CursorState`].

use n_text::Direction;

use crate::cursor::CursorState;
use crate::horizontal;
use crate::state::BufferState;
use crate::vertical;

/// A cursor motion with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Move `count` grapheme clusters within the current line.
    ///
    /// Without `include_end_of_line_or_file` the cursor stops on the last
    /// content cluster; with it, the cursor may reach the terminator or the
    /// end of the document.
    CharInLine {
        direction: Direction,
        count: usize,
        include_end_of_line_or_file: bool,
    },

    /// Put a cursor that sits on a terminator, or past the end of the
    /// document, back on the last content cluster of its line.
    OntoLine,

    /// The start of the line `count` lines away, clamped to the first and
    /// last lines.
    RelativeLineStart { direction: Direction, count: usize },

    /// Move `count` lines, keeping the visual column.
    RelativeLine { direction: Direction, count: usize },

    /// The end (forward) or start (backward) of the current line.
    LineBoundary {
        direction: Direction,
        include_end_of_line_or_file: bool,
    },

    /// Skip spaces and tabs forward without leaving the line.
    NonWhitespaceOrNewline,

    /// The start of a 0-indexed line, clamped to the last line.
    LineNum { line_num: usize },

    /// The start of the last line.
    LastLine,
}

impl Locator {
    // -- Construction -------------------------------------------------------

    /// See [`Locator::CharInLine`].
    #[must_use]
    pub const fn char_in_line(
        direction: Direction,
        count: usize,
        include_end_of_line_or_file: bool,
    ) -> Self {
        Self::CharInLine {
            direction,
            count,
            include_end_of_line_or_file,
        }
    }

    /// See [`Locator::OntoLine`].
    #[must_use]
    pub const fn onto_line() -> Self {
        Self::OntoLine
    }

    /// See [`Locator::RelativeLineStart`].
    #[must_use]
    pub const fn relative_line_start(direction: Direction, count: usize) -> Self {
        Self::RelativeLineStart { direction, count }
    }

    /// See [`Locator::RelativeLine`].
    #[must_use]
    pub const fn relative_line(direction: Direction, count: usize) -> Self {
        Self::RelativeLine { direction, count }
    }

    /// See [`Locator::LineBoundary`].
    #[must_use]
    pub const fn line_boundary(direction: Direction, include_end_of_line_or_file: bool) -> Self {
        Self::LineBoundary {
            direction,
            include_end_of_line_or_file,
        }
    }

    /// See [`Locator::NonWhitespaceOrNewline`].
    #[must_use]
    pub const fn non_whitespace_or_newline() -> Self {
        Self::NonWhitespaceOrNewline
    }

    /// See [`Locator::LineNum`].
    #[must_use]
    pub const fn line_num(line_num: usize) -> Self {
        Self::LineNum { line_num }
    }

    /// See [`Locator::LastLine`].
    #[must_use]
    pub const fn last_line() -> Self {
        Self::LastLine
    }

    /// True for motions that keep the visual column across lines.
    #[must_use]
    pub const fn is_vertical(&self) -> bool {
        matches!(self, Self::RelativeLine { .. })
    }

    // -- Dispatch -----------------------------------------------------------

    /// Compute the cursor this motion lands on.
    ///
    /// Total: any document and any cursor yield a position on a grapheme
    /// cluster boundary within the document. In an empty document every
    /// motion lands on 0 and keeps the remembered column.
    #[must_use]
    pub fn locate(&self, state: &BufferState<'_>) -> CursorState {
        let cursor = state.cursor();
        if state.tree().is_empty() {
            return CursorState {
                position: 0,
                ..cursor
            };
        }

        let next = match *self {
            Self::CharInLine {
                direction,
                count,
                include_end_of_line_or_file,
            } => horizontal::char_in_line(state, direction, count, include_end_of_line_or_file),
            Self::OntoLine => horizontal::onto_line(state),
            Self::RelativeLineStart { direction, count } => {
                vertical::relative_line_start(state, direction, count)
            }
            Self::RelativeLine { direction, count } => {
                vertical::relative_line(state, direction, count)
            }
            Self::LineBoundary {
                direction,
                include_end_of_line_or_file,
            } => horizontal::line_boundary(state, direction, include_end_of_line_or_file),
            Self::NonWhitespaceOrNewline => horizontal::non_whitespace_or_newline(state),
            Self::LineNum { line_num } => vertical::line_num(state, line_num),
            Self::LastLine => vertical::last_line(state),
        };

        tracing::trace!(
            locator = ?self,
            from = cursor.position,
            to = next.position,
            logical_offset = next.logical_offset,
            "locate"
        );
        next
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
