use crate::{SyncResult, TaskListUpdate};

use board_core::{Project, ProjectId, TaskId};

use async_trait::async_trait;

/// The backend operations the synchronizer depends on.
///
/// `Client` is the HTTP implementation; tests substitute in-memory fakes.
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// `GET /projects/{id}`: full project detail with lists and tasks
    async fn fetch_project(&self, project_id: &ProjectId) -> SyncResult<Project>;

    /// `PATCH /tasks/{id}/update-list`: persist a task's list and position
    async fn update_task_list(&self, task_id: &TaskId, update: &TaskListUpdate) -> SyncResult<()>;
}
