//! Property tests: invariants every locator must keep on arbitrary text.

use n_motion::{BufferState, CursorState, Direction, Locator, TextTree};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("a"),
            Just("b"),
            Just(" "),
            Just("\t"),
            Just("\n"),
            Just("\r\n"),
            Just("e\u{301}"),
            Just("中"),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Backward)]
}

fn locator_strategy() -> impl Strategy<Value = Locator> {
    prop_oneof![
        (direction_strategy(), 0..10usize, any::<bool>())
            .prop_map(|(d, n, inc)| Locator::char_in_line(d, n, inc)),
        Just(Locator::onto_line()),
        (direction_strategy(), 0..10usize).prop_map(|(d, n)| Locator::relative_line_start(d, n)),
        (direction_strategy(), 0..10usize).prop_map(|(d, n)| Locator::relative_line(d, n)),
        (direction_strategy(), any::<bool>()).prop_map(|(d, inc)| Locator::line_boundary(d, inc)),
        Just(Locator::non_whitespace_or_newline()),
        (0..20usize).prop_map(Locator::line_num),
        Just(Locator::last_line()),
    ]
}

/// Every grapheme cluster boundary of the tree, in order.
fn boundaries(tree: &TextTree) -> Vec<usize> {
    let mut out = vec![0];
    let mut pos = 0;
    while pos < tree.len_chars() {
        pos = tree.next_grapheme_cluster_boundary(pos, Direction::Forward);
        out.push(pos);
    }
    out
}

/// Pick a cluster boundary from `seed`.
fn boundary_at(tree: &TextTree, seed: usize) -> usize {
    let all = boundaries(tree);
    all[seed % all.len()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn lands_on_cluster_boundary_in_document(
        text in text_strategy(),
        seed in any::<usize>(),
        offset in 0..6usize,
        locator in locator_strategy(),
    ) {
        let tree = TextTree::from_text(&text);
        let start = CursorState::with_logical_offset(boundary_at(&tree, seed), offset);
        let next = locator.locate(&BufferState::new(&tree, start));
        prop_assert!(next.position <= tree.len_chars());
        prop_assert!(boundaries(&tree).contains(&next.position));
    }

    #[test]
    fn locate_is_deterministic(
        text in text_strategy(),
        seed in any::<usize>(),
        locator in locator_strategy(),
    ) {
        let tree = TextTree::from_text(&text);
        let state = BufferState::new(&tree, CursorState::new(boundary_at(&tree, seed)));
        prop_assert_eq!(locator.locate(&state), locator.locate(&state));
    }

    #[test]
    fn onto_line_is_idempotent(text in text_strategy(), pos in 0..60usize) {
        let tree = TextTree::from_text(&text);
        let once = Locator::onto_line().locate(&BufferState::new(&tree, CursorState::new(pos)));
        let twice = Locator::onto_line().locate(&BufferState::new(&tree, once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn non_vertical_motion_resets_or_keeps_offset(
        text in text_strategy(),
        seed in any::<usize>(),
        offset in 1..6usize,
        locator in locator_strategy(),
    ) {
        prop_assume!(!locator.is_vertical());
        let tree = TextTree::from_text(&text);
        let start = CursorState::with_logical_offset(boundary_at(&tree, seed), offset);
        let next = locator.locate(&BufferState::new(&tree, start));
        if next.position == start.position {
            prop_assert_eq!(next.logical_offset, offset);
        } else {
            prop_assert_eq!(next.logical_offset, 0);
        }
    }

    #[test]
    fn down_then_up_restores_column(
        parts in prop::collection::vec(prop_oneof![Just("x"), Just("\t"), Just("中")], 1..10),
        lines in 2..6usize,
        tab_width in 1..9u8,
        seed in any::<usize>(),
        extra in 0..4usize,
    ) {
        // Identical lines share one visual layout, tabs and wide clusters
        // included, so moving down and back up must be lossless. A remembered
        // column only survives on the last cluster of a line.
        let line = parts.concat();
        let text = vec![line; lines].join("\n");
        let tree = TextTree::from_text(&text);
        let content_end = tree.line_content_end(0);
        let starts: Vec<usize> = boundaries(&tree)
            .into_iter()
            .take_while(|&pos| pos < content_end)
            .collect();
        let start = if extra > 0 {
            CursorState::with_logical_offset(starts[starts.len() - 1], extra)
        } else {
            CursorState::new(starts[seed % starts.len()])
        };
        let count = lines - 1;

        let down = Locator::relative_line(Direction::Forward, count)
            .locate(&BufferState::new(&tree, start).with_tab_width(tab_width));
        let back = Locator::relative_line(Direction::Backward, count)
            .locate(&BufferState::new(&tree, down).with_tab_width(tab_width));
        prop_assert_eq!(back, start);
    }

    #[test]
    fn huge_line_targets_clamp(text in text_strategy(), pos in 0..60usize) {
        let tree = TextTree::from_text(&text);
        let state = BufferState::new(&tree, CursorState::new(pos.min(tree.len_chars())));
        let last_start = tree.line_start_position(tree.last_line());

        prop_assert_eq!(Locator::line_num(usize::MAX).locate(&state).position, last_start);
        prop_assert_eq!(
            Locator::relative_line_start(Direction::Forward, usize::MAX).locate(&state).position,
            last_start
        );
        prop_assert_eq!(
            Locator::relative_line_start(Direction::Backward, usize::MAX).locate(&state).position,
            0
        );
    }
}
