use crate::{ListId, Task};

use serde::{Deserialize, Serialize};

/// A fixed workflow column holding an ordered sequence of tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(id: impl Into<ListId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Stamp every task with this list's id and its zero-based position.
    /// Returns true if any task was changed.
    pub fn reindex(&mut self) -> bool {
        let mut changed = false;
        for (position, task) in self.tasks.iter_mut().enumerate() {
            if task.index_number != position || task.list_id != self.id {
                task.index_number = position;
                task.list_id = self.id;
                changed = true;
            }
        }
        changed
    }

    /// Check the dense ordering invariant without modifying anything
    pub fn is_densely_indexed(&self) -> bool {
        self.tasks
            .iter()
            .enumerate()
            .all(|(position, task)| task.index_number == position && task.list_id == self.id)
    }
}
