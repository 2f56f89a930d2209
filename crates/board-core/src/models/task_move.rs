use crate::{BoardPosition, TaskId};

use serde::{Deserialize, Serialize};

/// The result of a drag gesture: which task, where it was, and where it was
/// dropped. `destination` is `None` when the drop landed outside every list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMove {
    pub task_id: TaskId,
    pub source: BoardPosition,
    pub destination: Option<BoardPosition>,
}

impl TaskMove {
    pub fn new(task_id: impl Into<TaskId>, source: BoardPosition, destination: BoardPosition) -> Self {
        Self {
            task_id: task_id.into(),
            source,
            destination: Some(destination),
        }
    }

    /// A drag that was dropped outside any list
    pub fn cancelled(task_id: impl Into<TaskId>, source: BoardPosition) -> Self {
        Self {
            task_id: task_id.into(),
            source,
            destination: None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.destination.is_none()
    }

    /// Dropped back onto the slot it came from
    pub fn is_same_position(&self) -> bool {
        self.destination == Some(self.source)
    }
}
