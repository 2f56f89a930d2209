pub(crate) mod client;
pub(crate) mod envelope;
pub(crate) mod task_list_update;

pub use client::Client;
pub use task_list_update::TaskListUpdate;
