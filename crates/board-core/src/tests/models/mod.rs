mod ids;
mod project;
mod task;
