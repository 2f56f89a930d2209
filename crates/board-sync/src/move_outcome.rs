use crate::SyncError;

use board_core::CoreError;

/// Why a drag-end did not change the board
#[derive(Debug)]
pub enum IgnoreReason {
    /// Dropped outside every list
    Cancelled,
    /// Dropped back onto the slot it came from
    SamePosition,
    /// The viewer does not lead the project
    NotPermitted,
    /// The move does not fit the current snapshot
    InvalidMove(CoreError),
}

/// Terminal state of a move
#[derive(Debug)]
pub enum MoveOutcome {
    /// No state change and no network call
    Ignored(IgnoreReason),
    /// The server accepted the move; the optimistic state stands
    Confirmed,
    /// The server rejected the move; the board was re-fetched
    Resynced { cause: SyncError },
    /// The server rejected the move but the board switched project or was
    /// cleared before the re-fetch landed, so nothing was applied
    Abandoned { cause: SyncError },
}

impl MoveOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, MoveOutcome::Ignored(_))
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, MoveOutcome::Confirmed)
    }

    pub fn is_resynced(&self) -> bool {
        matches!(self, MoveOutcome::Resynced { .. })
    }

    pub fn is_abandoned(&self) -> bool {
        matches!(self, MoveOutcome::Abandoned { .. })
    }

    /// Short label for logs and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            MoveOutcome::Ignored(IgnoreReason::Cancelled) => "cancelled",
            MoveOutcome::Ignored(IgnoreReason::SamePosition) => "unchanged",
            MoveOutcome::Ignored(IgnoreReason::NotPermitted) => "not_permitted",
            MoveOutcome::Ignored(IgnoreReason::InvalidMove(_)) => "invalid",
            MoveOutcome::Confirmed => "confirmed",
            MoveOutcome::Resynced { .. } => "resynced",
            MoveOutcome::Abandoned { .. } => "abandoned",
        }
    }
}
