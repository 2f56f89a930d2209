mod models;
mod snapshot_properties;

use crate::{ListId, Member, Project, Task, TaskList, UserSummary};

/// Build a task with the given id in a list
pub(crate) fn task(id: &str, list_id: u32) -> Task {
    Task::new(id, format!("Task {id}"), ListId(list_id))
}

/// Build a list holding tasks with the given ids, in order
pub(crate) fn list(id: u32, task_ids: &[&str]) -> TaskList {
    let mut list = TaskList::new(id, format!("List {id}"));
    list.tasks = task_ids.iter().map(|t| task(t, id)).collect();
    list.reindex();
    list
}

pub(crate) fn member(id: &str) -> Member {
    Member {
        user: UserSummary {
            id: id.into(),
            name: format!("User {id}"),
            avatar: None,
        },
    }
}

/// Project "p1" led by "leader" with the given lists
pub(crate) fn project(lists: Vec<TaskList>) -> Project {
    let mut project = Project::new("p1", "Board", "leader");
    project.project_members = vec![member("leader"), member("dev")];
    project.lists = lists;
    project
}
