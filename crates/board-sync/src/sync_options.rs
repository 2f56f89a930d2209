use board_config::SyncConfig;
use board_core::UserId;

/// Runtime options for a `BoardSynchronizer`
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// When set, moves are only accepted from the project leader
    pub viewer_id: Option<UserId>,
    /// Re-fetch the project after every confirmed move
    pub refresh_after_move: bool,
}

impl From<&SyncConfig> for SyncOptions {
    fn from(config: &SyncConfig) -> Self {
        Self {
            viewer_id: config.viewer_id.as_deref().map(UserId::from),
            refresh_after_move: config.refresh_after_move,
        }
    }
}
