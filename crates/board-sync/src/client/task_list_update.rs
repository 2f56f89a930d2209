use board_core::ListId;

use serde::Serialize;

/// Body of `PATCH /tasks/{id}/update-list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListUpdate {
    pub list_id: ListId,
    pub index_number: usize,
}
