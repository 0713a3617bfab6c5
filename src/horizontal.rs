//! Motions that stay on the cursor's line.
//!
//! None of these cross a line terminator, except the insert-mode case of
//! stepping back onto the previous line's terminator (see [`char_in_line`]).
//! All of them follow the [`CursorState::moved_to`] rule for the remembered
//! column.

use n_text::{Direction, TextTree};

use crate::cursor::CursorState;
use crate::state::BufferState;

/// Start of the last content cluster of a line, or `start` for an empty
/// line. This is where normal mode's cursor sits at "end of line".
pub(crate) fn last_cluster_start(tree: &TextTree, start: usize, content_end: usize) -> usize {
    if content_end > start {
        tree.next_grapheme_cluster_boundary(content_end, Direction::Backward)
            .max(start)
    } else {
        start
    }
}

/// Move `count` clusters along the current line.
///
/// Forward stops on the last content cluster, or on the terminator (or end of
/// document) when `include_end` is set. Backward stops at column 0; with
/// `include_end`, a motion that still has steps left at column 0 takes one
/// more onto the previous line's terminator and stops there.
pub(crate) fn char_in_line(
    state: &BufferState<'_>,
    direction: Direction,
    count: usize,
    include_end: bool,
) -> CursorState {
    let tree = state.tree();
    let pos = state.position();
    let line = tree.line_num_for_position(pos);
    let start = tree.line_start_position(line);
    let content_end = tree.line_content_end(line);

    let limit = match direction {
        Direction::Forward if include_end => content_end,
        Direction::Forward => last_cluster_start(tree, start, content_end),
        Direction::Backward => start,
    };

    let mut next = pos;
    let mut remaining = count;
    while remaining > 0 && direction.is_past(limit, next) {
        let step = tree.next_grapheme_cluster_boundary(next, direction);
        if direction.is_past(step, limit) {
            break;
        }
        next = step;
        remaining -= 1;
    }

    if remaining > 0
        && include_end
        && direction == Direction::Backward
        && next == start
        && start > 0
    {
        next = tree.next_grapheme_cluster_boundary(start, Direction::Backward);
    }

    state.cursor().moved_to(next)
}

/// Pull a cursor sitting on a terminator (or past the end of the document)
/// back onto the last content cluster of its line.
pub(crate) fn onto_line(state: &BufferState<'_>) -> CursorState {
    let tree = state.tree();
    let pos = state.position();
    let line = tree.line_num_for_position(pos).min(tree.last_line());
    let start = tree.line_start_position(line);
    let content_end = tree.line_content_end(line);

    if pos >= start && pos < content_end {
        return state.cursor();
    }
    state
        .cursor()
        .moved_to(last_cluster_start(tree, start, content_end))
}

/// `$` / `0` — the end or start of the current line.
pub(crate) fn line_boundary(
    state: &BufferState<'_>,
    direction: Direction,
    include_end: bool,
) -> CursorState {
    let tree = state.tree();
    let line = tree.line_num_for_position(state.position());
    let start = tree.line_start_position(line);

    let target = match direction {
        Direction::Backward => start,
        Direction::Forward if include_end => tree.line_content_end(line),
        Direction::Forward => last_cluster_start(tree, start, tree.line_content_end(line)),
    };
    state.cursor().moved_to(target)
}

/// Skip spaces and tabs forward, stopping on the first other cluster or at
/// the end of the line.
pub(crate) fn non_whitespace_or_newline(state: &BufferState<'_>) -> CursorState {
    let tree = state.tree();
    let mut next = state.position();
    while let Some(cluster) = tree.grapheme_cluster_at(next) {
        if !is_blank(&cluster) {
            break;
        }
        next = tree.next_grapheme_cluster_boundary(next, Direction::Forward);
    }
    state.cursor().moved_to(next)
}

/// Horizontal whitespace: a space or a tab, nothing else.
fn is_blank(cluster: &str) -> bool {
    matches!(cluster, " " | "\t")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
