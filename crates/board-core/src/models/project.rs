//! Project detail as returned by `GET /projects/{id}`.

use crate::models::timestamp;
use crate::{Member, ProjectId, TaskList, UserId};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Full project detail: metadata, members and every list with its tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub leader_id: UserId,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "timestamp")]
    pub deadline: Option<NaiveDateTime>,
    #[serde(default)]
    pub project_members: Vec<Member>,
    #[serde(default)]
    pub lists: Vec<TaskList>,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>, leader_id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            leader_id: leader_id.into(),
            description: None,
            deadline: None,
            project_members: Vec::new(),
            lists: Vec::new(),
        }
    }
}
