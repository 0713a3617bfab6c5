//! Visual columns — mapping between text positions and displayed columns.
//!
//! A position counts chars; a visual column counts terminal cells. Tabs and
//! wide characters make the two differ:
//!
//! ```text
//! text:     e  \t         f
//! position: 5  6          7
//! column:   0  1  2  3    4      (tab_width = 4)
//! ```
//!
//! A tab advances to the next multiple of the tab width, so its width
//! depends on the column it starts at. Every other grapheme cluster takes
//! its Unicode display width. Line terminators take no columns.

use unicode_width::UnicodeWidthStr;

use crate::direction::Direction;
use crate::tree::TextTree;

/// Tab stop width used when nothing else is configured.
pub const DEFAULT_TAB_WIDTH: u8 = 4;

/// Display width of one grapheme cluster that starts at visual column
/// `offset`.
#[must_use]
pub fn grapheme_cluster_width(cluster: &str, offset: usize, tab_width: u8) -> usize {
    match cluster {
        "\t" => {
            let tab_w = usize::from(tab_width.max(1));
            tab_w - offset % tab_w
        }
        "\n" | "\r\n" => 0,
        _ => cluster.width(),
    }
}

/// Visual column of `pos` on the line starting at `line_start`.
///
/// Walks the clusters between the two, expanding tabs. Stops early at a line
/// terminator, so a `pos` past the end of the line reports the column just
/// after its content.
#[must_use]
pub fn visual_col_at(tree: &TextTree, line_start: usize, pos: usize, tab_width: u8) -> usize {
    let mut col = 0;
    let mut at = line_start;
    while at < pos {
        let Some(cluster) = tree.grapheme_cluster_at(at) else {
            break;
        };
        if cluster.ends_with('\n') {
            break;
        }
        col += grapheme_cluster_width(&cluster, col, tab_width);
        at = tree.next_grapheme_cluster_boundary(at, Direction::Forward);
    }
    col
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
