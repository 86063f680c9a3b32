//! Property-based tests for the board controller
//!
//! These tests use proptest to verify invariants across many random boards.

#[cfg(test)]
mod tests {
    use crate::board::{apply_drag, reorder, workflow_groups, DragEvent, Location};
    use crate::schemas::{Card, Column};
    use proptest::prelude::*;

    // ===== STRATEGY HELPERS =====

    /// Generate an optional workflow id from a small pool so runs form
    fn any_workflow_id() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some("wf-a".to_string())),
            Just(Some("wf-b".to_string())),
        ]
    }

    /// Generate a column with up to 5 cards
    fn any_column(index: usize) -> impl Strategy<Value = Column> {
        (0usize..5, any_workflow_id()).prop_map(move |(cards, workflow_id)| {
            Column::new(format!("col-{}", index), format!("Step {}", index + 1))
                .with_cards(
                    (0..cards)
                        .map(|i| Card::new(format!("card-{}-{}", index, i), format!("Card {}", i)))
                        .collect(),
                )
                .with_workflow(workflow_id)
        })
    }

    /// Generate a board of 0..8 columns
    fn any_board() -> impl Strategy<Value = Vec<Column>> {
        (0usize..8).prop_flat_map(|n| (0..n).map(any_column).collect::<Vec<_>>())
    }

    /// Generate a non-empty list together with two valid indices
    fn list_with_indices() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
        (1usize..10).prop_flat_map(|n| (prop::collection::vec(any::<u32>(), n), 0..n, 0..n))
    }

    fn total_cards(columns: &[Column]) -> usize {
        columns.iter().map(|c| c.cards.len()).sum()
    }

    // ===== REORDER LAWS =====

    proptest! {
        /// Property: moving back with source and destination swapped restores the order
        #[test]
        fn test_reorder_inverse((list, from, to) in list_with_indices()) {
            let moved = reorder(&list, from, to).unwrap();
            let restored = reorder(&moved, to, from).unwrap();
            prop_assert_eq!(restored, list);
        }

        /// Property: reorder is a permutation
        #[test]
        fn test_reorder_preserves_elements((list, from, to) in list_with_indices()) {
            let mut moved = reorder(&list, from, to).unwrap();
            let mut original = list.clone();
            moved.sort_unstable();
            original.sort_unstable();
            prop_assert_eq!(moved, original);
        }

        /// Property: the moved element lands at the destination index
        #[test]
        fn test_reorder_lands_at_destination((list, from, to) in list_with_indices()) {
            let moved = reorder(&list, from, to).unwrap();
            prop_assert_eq!(moved[to], list[from]);
        }
    }

    // ===== CARD MOVES =====

    proptest! {
        /// Property: total card count is invariant under any accepted move
        #[test]
        fn test_card_move_conserves_cards(
            board in any_board(),
            src in 0usize..8,
            dst in 0usize..8,
            src_index in 0usize..6,
            dst_index in 0usize..6,
        ) {
            prop_assume!(src < board.len() && dst < board.len());
            let event = DragEvent::card(
                Location::new(board[src].id.clone(), src_index),
                Location::new(board[dst].id.clone(), dst_index),
            );
            if let Some(next) = apply_drag(&board, &event) {
                prop_assert_eq!(total_cards(&next), total_cards(&board));
                prop_assert_eq!(next.len(), board.len());
                if src != dst {
                    prop_assert_eq!(next[src].cards.len(), board[src].cards.len() - 1);
                    prop_assert_eq!(next[dst].cards.len(), board[dst].cards.len() + 1);
                    prop_assert_eq!(&next[dst].cards[dst_index], &board[src].cards[src_index]);
                }
            }
        }

        /// Property: columns not involved in a move are untouched
        #[test]
        fn test_card_move_leaves_other_columns(
            board in any_board(),
            src in 0usize..8,
            dst in 0usize..8,
        ) {
            prop_assume!(src < board.len() && dst < board.len());
            prop_assume!(!board[src].cards.is_empty());
            let event = DragEvent::card(
                Location::new(board[src].id.clone(), 0),
                Location::new(board[dst].id.clone(), 0),
            );
            if let Some(next) = apply_drag(&board, &event) {
                for (i, column) in next.iter().enumerate() {
                    if i != src && i != dst {
                        prop_assert_eq!(column, &board[i]);
                    }
                }
            }
        }

        /// Property: apply_drag never mutates its input
        #[test]
        fn test_apply_drag_never_mutates(board in any_board(), from in 0usize..8, to in 0usize..8) {
            let original = board.clone();
            let _ = apply_drag(&board, &DragEvent::column("board", from, to));
            prop_assert_eq!(board, original);
        }
    }

    // ===== WORKFLOW GROUPING =====

    proptest! {
        /// Property: groups are contiguous, non-overlapping, and cover every column once
        #[test]
        fn test_groups_cover_columns(board in any_board()) {
            let groups = workflow_groups(&board);
            let mut next_start = 1;
            for group in &groups {
                prop_assert_eq!(group.start, next_start);
                prop_assert!(group.end > group.start);
                next_start = group.end;
            }
            prop_assert_eq!(next_start, board.len() + 1);
        }

        /// Property: group count equals the number of maximal runs of equal workflow id
        #[test]
        fn test_group_count_matches_runs(board in any_board()) {
            let runs = board
                .windows(2)
                .filter(|w| w[0].workflow_id != w[1].workflow_id)
                .count()
                + usize::from(!board.is_empty());
            prop_assert_eq!(workflow_groups(&board).len(), runs);
        }

        /// Property: every column in a group carries the group's workflow id
        #[test]
        fn test_group_members_share_workflow(board in any_board()) {
            for group in workflow_groups(&board) {
                prop_assert!(group.is_well_formed());
                let (first, last) = (group.first_index().unwrap(), group.last_index().unwrap());
                for column in &board[first..=last] {
                    prop_assert_eq!(&column.workflow_id, &group.workflow_id);
                }
            }
        }
    }
}
