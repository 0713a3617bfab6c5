//! Motions between lines.
//!
//! Line numbers follow the POSIX end-of-file rule from
//! [`TextTree::num_lines`](n_text::TextTree::num_lines): a trailing newline
//! never creates a line to navigate to. Targets past either end clamp to the
//! first or last line.

use n_text::Direction;
use n_text::column::{grapheme_cluster_width, visual_col_at};

use crate::cursor::CursorState;
use crate::state::BufferState;

/// Start of the line `count` lines away from the cursor's.
pub(crate) fn relative_line_start(
    state: &BufferState<'_>,
    direction: Direction,
    count: usize,
) -> CursorState {
    let tree = state.tree();
    let line = tree.line_num_for_position(state.position());
    let target = direction.offset(line, count, tree.last_line());
    state.cursor().moved_to(tree.line_start_position(target))
}

/// Start of an absolute 0-indexed line, clamped to the last line.
pub(crate) fn line_num(state: &BufferState<'_>, line_num: usize) -> CursorState {
    let tree = state.tree();
    let target = line_num.min(tree.last_line());
    state.cursor().moved_to(tree.line_start_position(target))
}

/// Start of the last line.
pub(crate) fn last_line(state: &BufferState<'_>) -> CursorState {
    let tree = state.tree();
    state
        .cursor()
        .moved_to(tree.line_start_position(tree.last_line()))
}

/// `j` / `k` — jump `count` lines, keeping the visual column.
///
/// The column to restore is the cursor's real column on its line plus
/// whatever it already remembered. On the target line the cursor lands:
///
/// - on the cluster that starts exactly at that column, remembering nothing;
/// - on a cluster whose span covers the column (a tab, a wide char),
///   remembering the columns left over inside it;
/// - on the last content cluster when the line is too short, remembering the
///   shortfall.
///
/// Intermediate lines play no part. Already on the first (or last) line, the
/// cursor comes back untouched.
pub(crate) fn relative_line(
    state: &BufferState<'_>,
    direction: Direction,
    count: usize,
) -> CursorState {
    let tree = state.tree();
    let tab_width = state.tab_width();
    let cursor = state.cursor();
    let pos = state.position();

    let line = tree.line_num_for_position(pos);
    let target = direction.offset(line, count, tree.last_line());
    if !direction.is_past(target, line) {
        return cursor;
    }

    let line_start = tree.line_start_position(line);
    let goal =
        visual_col_at(tree, line_start, pos, tab_width).saturating_add(cursor.logical_offset);

    let target_start = tree.line_start_position(target);
    let content_end = tree.line_content_end(target);
    let mut at = target_start;
    let mut col = 0;
    let mut last = None;

    while at < content_end {
        if col == goal {
            return CursorState::new(at);
        }
        let Some(cluster) = tree.grapheme_cluster_at(at) else {
            break;
        };
        let width = grapheme_cluster_width(&cluster, col, tab_width);
        if col.saturating_add(width) > goal {
            return CursorState::with_logical_offset(at, goal - col);
        }
        last = Some((at, col));
        col += width;
        at = tree.next_grapheme_cluster_boundary(at, Direction::Forward);
    }

    let (at, col) = last.unwrap_or((target_start, 0));
    CursorState::with_logical_offset(at, goal - col)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
