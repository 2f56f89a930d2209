use crate::tests::{list, project};
use crate::{BoardPosition, BoardSnapshot, ListId};

use proptest::prelude::*;

/// Board with one list per entry of `sizes`, ids 1..=N, task ids unique
fn board(sizes: &[usize]) -> BoardSnapshot {
    let lists = sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| {
            let list_id = i as u32 + 1;
            let task_ids: Vec<String> = (0..size).map(|n| format!("l{list_id}-t{n}")).collect();
            let task_refs: Vec<&str> = task_ids.iter().map(String::as_str).collect();
            list(list_id, &task_refs)
        })
        .collect();
    BoardSnapshot::from_project(project(lists))
}

/// Pick a valid move from raw random numbers, if the board has any task
fn pick_move(
    snapshot: &BoardSnapshot,
    source_seed: usize,
    destination_list_seed: usize,
    destination_index: usize,
) -> Option<(BoardPosition, BoardPosition)> {
    let occupied: Vec<_> = snapshot.lists().iter().filter(|l| !l.is_empty()).collect();
    if occupied.is_empty() {
        return None;
    }

    let source_list = occupied[source_seed % occupied.len()];
    let source = BoardPosition::new(source_list.id, source_seed % source_list.len());
    let destination_list = &snapshot.lists()[destination_list_seed % snapshot.lists().len()];
    let destination = BoardPosition::new(destination_list.id, destination_index);
    Some((source, destination))
}

// =========================================================================
// Property-Based Tests - Move invariants
// =========================================================================

proptest! {
    #[test]
    fn given_any_move_when_applied_then_every_list_is_densely_indexed(
        sizes in prop::collection::vec(0usize..6, 1..5),
        source_seed in 0usize..100,
        destination_list_seed in 0usize..100,
        destination_index in 0usize..8,
    ) {
        let snapshot = board(&sizes);
        if let Some((source, destination)) =
            pick_move(&snapshot, source_seed, destination_list_seed, destination_index)
        {
            let task_id = snapshot.list(source.list_id).unwrap().tasks[source.index].id.clone();
            let applied = snapshot.apply_move(&task_id, source, destination).unwrap();

            prop_assert!(applied.snapshot.is_densely_indexed());
            prop_assert_eq!(applied.snapshot.task_count(), snapshot.task_count());

            let moved = applied.snapshot.task(&task_id).unwrap();
            prop_assert_eq!(moved.list_id, destination.list_id);
            prop_assert_eq!(moved.index_number, applied.index_number);
            prop_assert!(applied.index_number <= destination.index);
        }
    }

    #[test]
    fn given_move_sequence_when_applied_then_invariants_hold_throughout(
        sizes in prop::collection::vec(1usize..5, 2..5),
        moves in prop::collection::vec((0usize..50, 0usize..50, 0usize..6), 1..10),
    ) {
        let mut snapshot = board(&sizes);
        let total = snapshot.task_count();

        for (source_seed, destination_list_seed, destination_index) in moves {
            let Some((source, destination)) =
                pick_move(&snapshot, source_seed, destination_list_seed, destination_index)
            else {
                continue;
            };
            let task_id = snapshot.list(source.list_id).unwrap().tasks[source.index].id.clone();
            snapshot = snapshot.apply_move(&task_id, source, destination).unwrap().snapshot;

            prop_assert!(snapshot.is_densely_indexed());
            prop_assert_eq!(snapshot.task_count(), total);
        }

        let list_ids: Vec<ListId> = snapshot.lists().iter().map(|l| l.id).collect();
        let expected: Vec<ListId> = (1..=sizes.len() as u32).map(ListId).collect();
        prop_assert_eq!(list_ids, expected);
    }
}
