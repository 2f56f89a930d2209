//! board-sync
//!
//! Typed REST client for the board backend and the synchronizer that keeps
//! a client-held board snapshot consistent with it.

pub mod api;
pub mod client;
pub mod error;
pub mod move_outcome;
pub mod sync_options;
pub mod synchronizer;

#[cfg(test)]
mod tests;

pub use api::BoardApi;
pub use client::{Client, TaskListUpdate};
pub use error::{Result as SyncResult, SyncError};
pub use move_outcome::{IgnoreReason, MoveOutcome};
pub use sync_options::SyncOptions;
pub use synchronizer::{BoardSynchronizer, SnapshotReceiver};
