pub mod board_position;
pub mod ids;
pub mod member;
pub mod project;
pub mod task;
pub mod task_list;
pub mod task_move;

pub(crate) mod timestamp;
