//! Buffer state — everything a locator is allowed to read.
//!
//! Built fresh by the caller for each motion and dropped right after. It
//! borrows the tree, so a locator cannot hold on to the document past the
//! call.

use n_text::TextTree;
use n_text::column::DEFAULT_TAB_WIDTH;

use crate::config::Config;
use crate::cursor::CursorState;

/// A read-only view of a document and the cursor moving through it.
#[derive(Debug, Clone, Copy)]
pub struct BufferState<'a> {
    tree: &'a TextTree,
    cursor: CursorState,
    tab_width: u8,
}

impl<'a> BufferState<'a> {
    /// A view of `tree` with the cursor at `cursor` and the default tab
    /// width.
    #[must_use]
    pub const fn new(tree: &'a TextTree, cursor: CursorState) -> Self {
        Self {
            tree,
            cursor,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Set the tab stop width (minimum 1).
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: u8) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    /// Apply loaded configuration.
    #[must_use]
    pub fn with_config(self, config: &Config) -> Self {
        self.with_tab_width(config.tab_width)
    }

    // -- Accessors ----------------------------------------------------------

    /// The document.
    #[inline]
    #[must_use]
    pub const fn tree(&self) -> &'a TextTree {
        self.tree
    }

    /// The cursor as the caller handed it in.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> CursorState {
        self.cursor
    }

    /// Tab stop width in columns.
    #[inline]
    #[must_use]
    pub const fn tab_width(&self) -> u8 {
        self.tab_width
    }

    /// The cursor position clamped to the document.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.cursor.position.min(self.tree.len_chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let tree = TextTree::from_text("abc");
        let state = BufferState::new(&tree, CursorState::new(1));
        assert_eq!(state.tab_width(), 4);
        assert_eq!(state.cursor(), CursorState::new(1));
        assert_eq!(state.tree().len_chars(), 3);
    }

    #[test]
    fn tab_width_minimum_one() {
        let tree = TextTree::new();
        let state = BufferState::new(&tree, CursorState::ZERO).with_tab_width(0);
        assert_eq!(state.tab_width(), 1);
    }

    #[test]
    fn with_config_sets_tab_width() {
        let tree = TextTree::new();
        let config = Config { tab_width: 8 };
        let state = BufferState::new(&tree, CursorState::ZERO).with_config(&config);
        assert_eq!(state.tab_width(), 8);
    }

    #[test]
    fn position_clamped_to_document() {
        let tree = TextTree::from_text("abc");
        let state = BufferState::new(&tree, CursorState::new(10));
        assert_eq!(state.position(), 3);
        assert_eq!(state.cursor().position, 10);
    }
}
