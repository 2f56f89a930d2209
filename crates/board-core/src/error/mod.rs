use crate::{ListId, TaskId};

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("List {list_id} not found on the board {location}")]
    ListNotFound {
        list_id: ListId,
        location: ErrorLocation,
    },

    #[error("Index {index} is out of range for list {list_id} ({len} tasks) {location}")]
    IndexOutOfRange {
        list_id: ListId,
        index: usize,
        len: usize,
        location: ErrorLocation,
    },

    #[error("Task {expected} is not at {list_id}:{index} (found {found}) {location}")]
    TaskMismatch {
        expected: TaskId,
        found: TaskId,
        list_id: ListId,
        index: usize,
        location: ErrorLocation,
    },

    #[error("No board snapshot is loaded {location}")]
    NoSnapshot { location: ErrorLocation },
}

impl CoreError {
    #[track_caller]
    pub fn list_not_found(list_id: ListId) -> Self {
        CoreError::ListNotFound {
            list_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn index_out_of_range(list_id: ListId, index: usize, len: usize) -> Self {
        CoreError::IndexOutOfRange {
            list_id,
            index,
            len,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn task_mismatch(expected: TaskId, found: TaskId, list_id: ListId, index: usize) -> Self {
        CoreError::TaskMismatch {
            expected,
            found,
            list_id,
            index,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_snapshot() -> Self {
        CoreError::NoSnapshot {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
