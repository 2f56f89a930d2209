pub mod error;
pub mod models;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::board_position::BoardPosition;
pub use models::ids::{ListId, ProjectId, TaskId, UserId};
pub use models::member::{Member, UserSummary};
pub use models::project::Project;
pub use models::task::Task;
pub use models::task_list::TaskList;
pub use models::task_move::TaskMove;
pub use snapshot::{AppliedMove, BoardSnapshot};
