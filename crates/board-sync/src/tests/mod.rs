mod envelope;

use board_core::{BoardSnapshot, ListId};

/// Task ids of one list, in display order
pub(crate) fn task_ids(snapshot: &BoardSnapshot, list_id: u32) -> Vec<String> {
    snapshot
        .list(ListId(list_id))
        .map(|list| list.tasks.iter().map(|t| t.id.to_string()).collect())
        .unwrap_or_default()
}
