//! The client-held copy of a project's board.
//!
//! A `BoardSnapshot` is never edited in place. Every move produces a new
//! snapshot value, so a reader holding the previous one (a render in progress)
//! never sees a half-applied splice.

use crate::{
    BoardPosition, CoreError, ListId, Member, Project, ProjectId, Result as CoreResult, Task,
    TaskId, TaskList, UserId,
};

use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    project_id: ProjectId,
    project_name: String,
    leader_id: UserId,
    members: Vec<Member>,
    lists: Vec<TaskList>,
}

/// A move that was applied to a snapshot, with the placement to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedMove {
    pub snapshot: BoardSnapshot,
    pub task_id: TaskId,
    pub source: BoardPosition,
    pub list_id: ListId,
    pub index_number: usize,
}

impl AppliedMove {
    /// Where the task ended up after clamping
    pub fn destination(&self) -> BoardPosition {
        BoardPosition::new(self.list_id, self.index_number)
    }

    /// The clamped drop landed back on the source slot
    pub fn is_unchanged(&self) -> bool {
        self.destination() == self.source
    }
}

impl BoardSnapshot {
    /// Build a snapshot from fetched project detail.
    ///
    /// Tasks are stamped with their owning list, the project id and their
    /// array position, so the dense ordering holds even if the server sent
    /// stale or sparse `indexNumber` values.
    pub fn from_project(project: Project) -> Self {
        let Project {
            id,
            name,
            leader_id,
            project_members,
            mut lists,
            ..
        } = project;

        for list in &mut lists {
            if list.reindex() {
                debug!("Normalized task order for list {} of project {}", list.id, id);
            }
            for task in &mut list.tasks {
                task.project_id = Some(id.clone());
            }
        }

        Self {
            project_id: id,
            project_name: name,
            leader_id,
            members: project_members,
            lists,
        }
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn leader_id(&self) -> &UserId {
        &self.leader_id
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn lists(&self) -> &[TaskList] {
        &self.lists
    }

    pub fn list(&self, id: ListId) -> Option<&TaskList> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.lists
            .iter()
            .flat_map(|l| l.tasks.iter())
            .find(|t| &t.id == id)
    }

    pub fn task_count(&self) -> usize {
        self.lists.iter().map(TaskList::len).sum()
    }

    /// Only the project leader may reorder the board
    pub fn can_reorder(&self, user_id: &UserId) -> bool {
        &self.leader_id == user_id
    }

    pub fn is_densely_indexed(&self) -> bool {
        self.lists.iter().all(TaskList::is_densely_indexed)
    }

    /// The "my tasks" projection: every list, restricted to tasks the user
    /// is assigned to. Positions in the projection are for display only.
    pub fn tasks_for_member(&self, user_id: &UserId) -> Vec<TaskList> {
        self.lists
            .iter()
            .map(|list| TaskList {
                id: list.id,
                name: list.name.clone(),
                tasks: list
                    .tasks
                    .iter()
                    .filter(|t| t.is_assigned_to(user_id))
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// Splice a task from `source` into `destination`, returning a new snapshot.
    ///
    /// The task is removed at `source.index` and inserted at
    /// `destination.index` (clamped to the destination length). Both lists
    /// are re-indexed densely.
    pub fn apply_move(
        &self,
        task_id: &TaskId,
        source: BoardPosition,
        destination: BoardPosition,
    ) -> CoreResult<AppliedMove> {
        let source_pos = self
            .list_position(source.list_id)
            .ok_or_else(|| CoreError::list_not_found(source.list_id))?;
        let destination_pos = self
            .list_position(destination.list_id)
            .ok_or_else(|| CoreError::list_not_found(destination.list_id))?;

        let source_list = &self.lists[source_pos];
        let found = source_list.tasks.get(source.index).ok_or_else(|| {
            CoreError::index_out_of_range(source.list_id, source.index, source_list.len())
        })?;
        if &found.id != task_id {
            return Err(CoreError::task_mismatch(
                task_id.clone(),
                found.id.clone(),
                source.list_id,
                source.index,
            ));
        }

        let mut lists = self.lists.clone();
        let task = lists[source_pos].tasks.remove(source.index);

        let destination_tasks = &mut lists[destination_pos].tasks;
        let index_number = destination.index.min(destination_tasks.len());
        destination_tasks.insert(index_number, task);

        lists[source_pos].reindex();
        lists[destination_pos].reindex();

        Ok(AppliedMove {
            snapshot: Self {
                lists,
                ..self.clone_metadata()
            },
            task_id: task_id.clone(),
            source,
            list_id: destination.list_id,
            index_number,
        })
    }

    fn list_position(&self, id: ListId) -> Option<usize> {
        self.lists.iter().position(|l| l.id == id)
    }

    fn clone_metadata(&self) -> Self {
        Self {
            project_id: self.project_id.clone(),
            project_name: self.project_name.clone(),
            leader_id: self.leader_id.clone(),
            members: self.members.clone(),
            lists: Vec::new(),
        }
    }
}
