use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Board synchronization behaviour
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Re-fetch the whole project after a move is confirmed by the server
    pub refresh_after_move: bool,
    /// User viewing the board. When set, only the project leader may reorder.
    pub viewer_id: Option<String>,
}

impl SyncConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.viewer_id.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(ConfigError::sync("sync.viewer_id cannot be empty when set"));
        }

        Ok(())
    }
}
