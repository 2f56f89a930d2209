use crate::models::timestamp;
use crate::{ListId, Member, ProjectId, TaskId, UserId};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,

    // Placement
    pub list_id: ListId,
    #[serde(default)]
    pub index_number: usize,

    // Details
    #[serde(default, with = "timestamp")]
    pub deadline: Option<NaiveDateTime>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub task_members: Vec<Member>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, name: impl Into<String>, list_id: ListId) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            list_id,
            index_number: 0,
            deadline: None,
            description: None,
            task_members: Vec::new(),
            project_id: None,
        }
    }

    /// Check if the user is one of the task's assignees
    pub fn is_assigned_to(&self, user_id: &UserId) -> bool {
        self.task_members.iter().any(|m| m.user_id() == user_id)
    }
}
