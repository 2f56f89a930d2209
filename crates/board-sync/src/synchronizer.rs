//! Board State Synchronizer.
//!
//! Owns the client copy of one project's board. Moves are applied locally
//! first (optimistic), then persisted with a single `update-list` call. When
//! that call fails the whole project is re-fetched instead of rolling back
//! the one move, since other moves or other users may have changed the board
//! in the meantime.
//!
//! Every full fetch takes a ticket. A fetch result is applied only if no
//! later-issued fetch has been applied already and the board still shows
//! the same project, so a resync is never replaced by an older response.
//! A fetch of the shown project that lands while another project is loading
//! is held back and applied if that load fails.

use crate::{
    BoardApi, IgnoreReason, MoveOutcome, SyncError, SyncOptions, SyncResult, TaskListUpdate,
};

use board_core::{BoardSnapshot, CoreError, Project, ProjectId, TaskMove};

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use tokio::sync::watch;

/// Receives every committed snapshot: loads, optimistic moves, resyncs and clears
pub type SnapshotReceiver = watch::Receiver<Option<Arc<BoardSnapshot>>>;

/// Per-move states, logged as each move progresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MovePhase {
    Idle,
    Computing,
    Committed,
    RemoteConfirmed,
    RemoteFailed,
    Resyncing,
    Resynced,
}

impl fmt::Display for MovePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MovePhase::Idle => "idle",
            MovePhase::Computing => "computing",
            MovePhase::Committed => "committed",
            MovePhase::RemoteConfirmed => "remote-confirmed",
            MovePhase::RemoteFailed => "remote-failed",
            MovePhase::Resyncing => "resyncing",
            MovePhase::Resynced => "resynced",
        };
        f.write_str(name)
    }
}

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchFate {
    Applied,
    /// A later fetch of the same project was applied first
    Superseded,
    /// Held for the shown project while another project loads
    Parked,
    /// The board was cleared or shows another project
    Dropped,
}

#[derive(Default)]
struct BoardState {
    /// Project the board is showing or loading
    requested: Option<ProjectId>,
    snapshot: Option<Arc<BoardSnapshot>>,
    issued_fetches: u64,
    applied_fetch: u64,
    latest_load: u64,
    parked: Option<(u64, Arc<BoardSnapshot>)>,
}

impl BoardState {
    fn issue_fetch(&mut self) -> u64 {
        self.issued_fetches += 1;
        self.issued_fetches
    }
}

pub struct BoardSynchronizer<A> {
    api: A,
    options: SyncOptions,
    state: Mutex<BoardState>,
    publisher: watch::Sender<Option<Arc<BoardSnapshot>>>,
}

impl<A: BoardApi> BoardSynchronizer<A> {
    pub fn new(api: A, options: SyncOptions) -> Self {
        let (publisher, _) = watch::channel(None);
        Self {
            api,
            options,
            state: Mutex::new(BoardState::default()),
            publisher,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Current snapshot for rendering, if a project is loaded
    pub fn snapshot(&self) -> Option<Arc<BoardSnapshot>> {
        self.state().snapshot.clone()
    }

    /// Project the board is showing or loading
    pub fn project_id(&self) -> Option<ProjectId> {
        self.state().requested.clone()
    }

    pub fn subscribe(&self) -> SnapshotReceiver {
        self.publisher.subscribe()
    }

    /// Fetch the full project and replace the snapshot with it.
    ///
    /// On failure the error is returned and nothing is retried. The board
    /// keeps showing its current project, updated only by a re-fetch of it
    /// that completed during the load. A successful response that arrives
    /// after a newer fetch has already been applied is discarded.
    pub async fn load(&self, project_id: &ProjectId) -> SyncResult<()> {
        let ticket = {
            let mut state = self.state();
            state.requested = Some(project_id.clone());
            let ticket = state.issue_fetch();
            state.latest_load = ticket;
            ticket
        };
        info!("Loading project {} (fetch #{})", project_id, ticket);

        match self.api.fetch_project(project_id).await {
            Ok(project) => {
                self.apply_fetch(ticket, project_id, project);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load project {}: {}", project_id, e);
                self.restore_shown(ticket, project_id);
                Err(SyncError::load(project_id, e))
            }
        }
    }

    /// Discard the board, e.g. when the view goes away.
    /// Fetches still in flight are ignored when they complete.
    pub fn clear(&self) {
        let mut state = self.state();
        if let Some(ref project_id) = state.requested {
            debug!("Clearing board for project {}", project_id);
        }
        let issued = state.issued_fetches;
        state.requested = None;
        state.applied_fetch = issued;
        state.parked = None;
        self.publish(&mut state, None);
    }

    /// A load failed: point the board back at what it shows, if no later
    /// load took over, and apply a fetch of it that was held meanwhile
    fn restore_shown(&self, ticket: u64, project_id: &ProjectId) {
        let mut state = self.state();
        if state.latest_load != ticket || state.requested.as_ref() != Some(project_id) {
            return;
        }

        let shown = state.snapshot.as_ref().map(|s| s.project_id().clone());
        state.requested = shown;

        if let Some((parked_ticket, parked)) = state.parked.take()
            && state.requested.as_ref() == Some(parked.project_id())
            && parked_ticket > state.applied_fetch
        {
            debug!(
                "Applying held fetch #{} of project {}",
                parked_ticket,
                parked.project_id()
            );
            state.applied_fetch = parked_ticket;
            self.publish(&mut state, Some(parked));
        }
    }

    /// Apply a drag-end.
    ///
    /// The new order is committed and published before the network call
    /// starts. A failed call triggers a full resync and reports
    /// `MoveOutcome::Resynced`, or `MoveOutcome::Abandoned` when the board
    /// switched project or was cleared before the resync landed. A `401` is
    /// returned as an error after the resync attempt so the session can be
    /// ended.
    pub async fn move_task(&self, task_move: &TaskMove) -> SyncResult<MoveOutcome> {
        if task_move.is_cancelled() {
            debug!("Drag of task {} ended outside the board", task_move.task_id);
            return Ok(MoveOutcome::Ignored(IgnoreReason::Cancelled));
        }

        if task_move.is_same_position() {
            debug!(
                "Task {} dropped back at {}",
                task_move.task_id, task_move.source
            );
            return Ok(MoveOutcome::Ignored(IgnoreReason::SamePosition));
        }

        let (project_id, update) = match self.commit_optimistic(task_move) {
            Ok(committed) => committed,
            Err(reason) => return Ok(MoveOutcome::Ignored(reason)),
        };

        match self.api.update_task_list(&task_move.task_id, &update).await {
            Ok(()) => {
                self.log_phase(task_move, MovePhase::Committed, MovePhase::RemoteConfirmed);

                if self.options.refresh_after_move
                    && let Err(e) = self.resync(&project_id).await
                {
                    warn!(
                        "Refresh after move of task {} failed: {}",
                        task_move.task_id, e
                    );
                }

                Ok(MoveOutcome::Confirmed)
            }
            Err(cause) => {
                warn!(
                    "Move of task {} to {}:{} was not persisted: {}",
                    task_move.task_id, update.list_id, update.index_number, cause
                );
                self.log_phase(task_move, MovePhase::Committed, MovePhase::RemoteFailed);
                self.log_phase(task_move, MovePhase::RemoteFailed, MovePhase::Resyncing);

                let resynced = self.resync(&project_id).await;

                if cause.is_unauthorized() {
                    if let Err(e) = resynced {
                        warn!("Resync of project {} failed: {}", project_id, e);
                    }
                    return Err(cause);
                }

                match resynced? {
                    FetchFate::Applied | FetchFate::Superseded => {
                        self.log_phase(task_move, MovePhase::Resyncing, MovePhase::Resynced);
                        Ok(MoveOutcome::Resynced { cause })
                    }
                    FetchFate::Parked | FetchFate::Dropped => {
                        warn!(
                            "Re-fetch of project {} after rejected move of task {} was not applied: board moved on",
                            project_id, task_move.task_id
                        );
                        Ok(MoveOutcome::Abandoned { cause })
                    }
                }
            }
        }
    }

    /// Splice the move into a new snapshot derived from the latest committed
    /// one and publish it. Returns what to persist.
    fn commit_optimistic(
        &self,
        task_move: &TaskMove,
    ) -> Result<(ProjectId, TaskListUpdate), IgnoreReason> {
        let Some(destination) = task_move.destination else {
            return Err(IgnoreReason::Cancelled);
        };

        let mut state = self.state();

        let Some(current) = state.snapshot.clone() else {
            let error = CoreError::no_snapshot();
            warn!("Ignoring move of task {}: {}", task_move.task_id, error);
            return Err(IgnoreReason::InvalidMove(error));
        };

        if let Some(ref viewer) = self.options.viewer_id
            && !current.can_reorder(viewer)
        {
            debug!(
                "Ignoring move of task {}: user {} does not lead project {}",
                task_move.task_id,
                viewer,
                current.project_id()
            );
            return Err(IgnoreReason::NotPermitted);
        }

        self.log_phase(task_move, MovePhase::Idle, MovePhase::Computing);

        let applied = current
            .apply_move(&task_move.task_id, task_move.source, destination)
            .map_err(|error| {
                warn!("Ignoring move of task {}: {}", task_move.task_id, error);
                IgnoreReason::InvalidMove(error)
            })?;

        if applied.is_unchanged() {
            debug!(
                "Task {} dropped past the end of its own list, stays at {}",
                task_move.task_id, task_move.source
            );
            return Err(IgnoreReason::SamePosition);
        }

        // Recovery must re-fetch the board the move was spliced into
        let project_id = current.project_id().clone();
        let update = TaskListUpdate {
            list_id: applied.list_id,
            index_number: applied.index_number,
        };

        self.publish(&mut state, Some(Arc::new(applied.snapshot)));
        self.log_phase(task_move, MovePhase::Computing, MovePhase::Committed);

        Ok((project_id, update))
    }

    /// Re-fetch the project the move was made on
    async fn resync(&self, project_id: &ProjectId) -> SyncResult<FetchFate> {
        let ticket = self.state().issue_fetch();
        debug!("Resyncing project {} (fetch #{})", project_id, ticket);

        let project = self
            .api
            .fetch_project(project_id)
            .await
            .map_err(|e| SyncError::load(project_id, e))?;

        Ok(self.apply_fetch(ticket, project_id, project))
    }

    /// Replace the snapshot with fetched data unless the fetch was superseded
    fn apply_fetch(&self, ticket: u64, project_id: &ProjectId, project: Project) -> FetchFate {
        let snapshot = Arc::new(BoardSnapshot::from_project(project));
        let mut state = self.state();

        if state.requested.as_ref() != Some(project_id) {
            let shown = state
                .snapshot
                .as_ref()
                .is_some_and(|s| s.project_id() == project_id);
            let newest = ticket > state.applied_fetch
                && state.parked.as_ref().is_none_or(|(held, _)| ticket > *held);

            if shown && newest {
                debug!(
                    "Holding fetch #{} of project {} while another project loads",
                    ticket, project_id
                );
                state.parked = Some((ticket, snapshot));
                return FetchFate::Parked;
            }

            debug!(
                "Discarding fetch #{} of project {}: board moved on",
                ticket, project_id
            );
            return FetchFate::Dropped;
        }

        if ticket <= state.applied_fetch {
            debug!(
                "Discarding stale fetch #{} of project {} (#{} already applied)",
                ticket, project_id, state.applied_fetch
            );
            return FetchFate::Superseded;
        }

        info!(
            "Project {} synchronized: {} lists, {} tasks",
            project_id,
            snapshot.lists().len(),
            snapshot.task_count()
        );
        state.applied_fetch = ticket;
        state.parked = None;
        self.publish(&mut state, Some(snapshot));
        FetchFate::Applied
    }

    fn publish(&self, state: &mut BoardState, snapshot: Option<Arc<BoardSnapshot>>) {
        state.snapshot = snapshot.clone();
        self.publisher.send_replace(snapshot);
    }

    fn log_phase(&self, task_move: &TaskMove, from: MovePhase, to: MovePhase) {
        debug!("Move of task {}: {} -> {}", task_move.task_id, from, to);
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
