//! Text tree — the read-only document view the motion engine consults.
//!
//! A `TextTree` wraps a [`ropey::Rope`] and exposes exactly the read
//! capabilities cursor motions need: line lookup, line lengths, POSIX line
//! counting, and grapheme cluster boundaries.
//!
//! # Design choices
//!
//! - **Positions are char offsets**, not byte offsets. This is the unit the
//!   rope indexes in, so every lookup is O(log n). Grapheme clusters are
//!   layered on top with [`unicode_segmentation::GraphemeCursor`], fed chunk
//!   by chunk so a cluster spanning two rope chunks is still found.
//!
//! - **Only `\n` and `\r\n` end a line.** The rope is built without CR or
//!   Unicode line-break recognition, so a lone `\r` is ordinary content.
//!
//! - **POSIX end of file.** A document ending in `\n` does not gain an extra
//!   empty line: `"a\nb\n"` has two lines, same as `"a\nb"`.
//!
//! - **No mutation.** Editing belongs to whoever owns the document; the
//!   motion engine only reads snapshots.

use std::borrow::Cow;
use std::fmt;
use std::io::Read;

use ropey::Rope;
use unicode_segmentation::{GraphemeCursor, GraphemeIncomplete};

use crate::direction::Direction;
use crate::error::TreeError;

/// An immutable snapshot of document text.
#[derive(Clone, Default)]
pub struct TextTree {
    rope: Rope,
}

impl TextTree {
    // -- Construction -------------------------------------------------------

    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a tree from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Create a tree from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidUtf8`] if the bytes are not valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TreeError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            tracing::debug!(valid_up_to = e.valid_up_to(), "rejecting malformed text");
            TreeError::from(e)
        })?;
        Ok(Self::from_text(text))
    }

    /// Read a tree from any reader, e.g. an open file.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Io`] if reading fails, or
    /// [`TreeError::InvalidUtf8`] if the content is not valid UTF-8.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, TreeError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    // -- Text access --------------------------------------------------------

    /// Total char count. Every valid position lies in `0..=len_chars()`.
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// True when the document has no text at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    // -- Lines --------------------------------------------------------------

    /// Number of lines, applying the POSIX end-of-file rule.
    ///
    /// The empty document has one (empty) line. A trailing `\n` terminates
    /// the last line rather than starting a new one, so `"\n"` also has one
    /// line and `"ab\ncd\n"` has two.
    #[must_use]
    pub fn num_lines(&self) -> usize {
        let lines = self.rope.len_lines();
        if self.ends_with_terminator() {
            lines - 1
        } else {
            lines
        }
    }

    /// Index of the last line under the POSIX rule.
    #[inline]
    #[must_use]
    pub fn last_line(&self) -> usize {
        self.num_lines().saturating_sub(1)
    }

    /// Position of the first char of a 0-indexed line.
    ///
    /// A line past the end of the rope maps to `len_chars()`.
    #[must_use]
    pub fn line_start_position(&self, line_num: usize) -> usize {
        if line_num >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line_num)
    }

    /// The 0-indexed line containing `pos`. Positions past the end of the
    /// document are clamped first.
    ///
    /// A position just after a trailing `\n` reports `num_lines()`, one past
    /// the last POSIX line; callers navigating by line clamp it.
    #[must_use]
    pub fn line_num_for_position(&self, pos: usize) -> usize {
        self.rope.char_to_line(pos.min(self.rope.len_chars()))
    }

    /// Number of chars in a line, with or without its terminator.
    ///
    /// The terminator is `\n` or `\r\n`; the last line of a document without
    /// a trailing newline has none. Returns 0 for lines that don't exist.
    #[must_use]
    pub fn line_length(&self, line_num: usize, exclude_terminator: bool) -> usize {
        if line_num >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_num);
        let total = line.len_chars();
        if !exclude_terminator || total == 0 || line.char(total - 1) != '\n' {
            return total;
        }
        if total >= 2 && line.char(total - 2) == '\r' {
            total - 2
        } else {
            total - 1
        }
    }

    /// Position just past the last content char of a line, i.e. where its
    /// terminator (or the end of the document) begins.
    #[inline]
    #[must_use]
    pub fn line_content_end(&self, line_num: usize) -> usize {
        self.line_start_position(line_num) + self.line_length(line_num, true)
    }

    fn ends_with_terminator(&self) -> bool {
        let len = self.rope.len_chars();
        len > 0 && self.rope.char(len - 1) == '\n'
    }

    // -- Grapheme clusters --------------------------------------------------

    /// The next grapheme cluster boundary from `pos` in `direction`.
    ///
    /// Returns `pos` unchanged at the start of the document (reading
    /// backward) or at its end (reading forward). `\r\n` is one cluster.
    #[must_use]
    pub fn next_grapheme_cluster_boundary(&self, pos: usize, direction: Direction) -> usize {
        let pos = pos.min(self.rope.len_chars());
        match direction {
            Direction::Forward => self.next_boundary(pos),
            Direction::Backward => self.prev_boundary(pos),
        }
    }

    /// The text of the grapheme cluster starting at `pos`, or `None` at the
    /// end of the document.
    #[must_use]
    pub fn grapheme_cluster_at(&self, pos: usize) -> Option<Cow<'_, str>> {
        if pos >= self.rope.len_chars() {
            return None;
        }
        let end = self.next_boundary(pos);
        Some(self.rope.slice(pos..end).into())
    }

    fn next_boundary(&self, char_idx: usize) -> usize {
        let len_bytes = self.rope.len_bytes();
        let byte_idx = self.rope.char_to_byte(char_idx);
        if byte_idx >= len_bytes {
            return char_idx;
        }

        let (mut chunk, mut chunk_byte_idx, _, _) = self.rope.chunk_at_byte(byte_idx);
        let mut cursor = GraphemeCursor::new(byte_idx, len_bytes, true);
        loop {
            match cursor.next_boundary(chunk, chunk_byte_idx) {
                Ok(None) => return self.rope.len_chars(),
                Ok(Some(n)) => return self.rope.byte_to_char(n),
                Err(GraphemeIncomplete::NextChunk) => {
                    chunk_byte_idx += chunk.len();
                    if chunk_byte_idx >= len_bytes {
                        return self.rope.len_chars();
                    }
                    chunk = self.rope.chunk_at_byte(chunk_byte_idx).0;
                }
                Err(GraphemeIncomplete::PreContext(n)) => {
                    let context = self.rope.chunk_at_byte(n - 1).0;
                    cursor.provide_context(context, n - context.len());
                }
                Err(_) => return char_idx,
            }
        }
    }

    fn prev_boundary(&self, char_idx: usize) -> usize {
        if char_idx == 0 {
            return 0;
        }
        let byte_idx = self.rope.char_to_byte(char_idx);

        let (mut chunk, mut chunk_byte_idx, _, _) = self.rope.chunk_at_byte(byte_idx);
        let mut cursor = GraphemeCursor::new(byte_idx, self.rope.len_bytes(), true);
        loop {
            match cursor.prev_boundary(chunk, chunk_byte_idx) {
                Ok(None) => return 0,
                Ok(Some(n)) => return self.rope.byte_to_char(n),
                Err(GraphemeIncomplete::PrevChunk) => {
                    if chunk_byte_idx == 0 {
                        return 0;
                    }
                    let (prev, prev_byte_idx, _, _) = self.rope.chunk_at_byte(chunk_byte_idx - 1);
                    chunk = prev;
                    chunk_byte_idx = prev_byte_idx;
                }
                Err(GraphemeIncomplete::PreContext(n)) => {
                    let context = self.rope.chunk_at_byte(n - 1).0;
                    cursor.provide_context(context, n - context.len());
                }
                Err(_) => return char_idx,
            }
        }
    }
}

impl fmt::Debug for TextTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextTree")
            .field("chars", &self.rope.len_chars())
            .field("lines", &self.num_lines())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
