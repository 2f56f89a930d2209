use crate::ListId;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A slot on the board: a list and a zero-based index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPosition {
    pub list_id: ListId,
    pub index: usize,
}

impl BoardPosition {
    pub fn new(list_id: impl Into<ListId>, index: usize) -> Self {
        Self {
            list_id: list_id.into(),
            index,
        }
    }
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.list_id, self.index)
    }
}
