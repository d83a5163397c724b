//! Application state.
//!
//! Mutated only by the reducer, on one logical thread: the runtime
//! dispatches events sequentially, so no locking is needed anywhere in the
//! shell.

use std::time::Duration;

use conecta_core::models::Event;

use crate::pending::{GRACE_PERIOD, PendingDeletions, TaskSeq};
use crate::routes::{Gate, Route, guard};
use crate::session::SessionState;

pub struct AppState {
    /// Process-wide session context (probe-once, invalidate on logout).
    pub session: SessionState,
    /// The route the surface is showing (or loading, or leaving).
    pub route: Route,
    /// The visible event collection for the current list view.
    pub events: Vec<Event>,
    /// Outstanding deferred deletions.
    pub pending: PendingDeletions,
    /// Id source for commit tasks.
    pub task_seq: TaskSeq,
    /// Grace period between a local delete and its remote commit. Fixed for
    /// every deletion; also the undo notice's duration.
    pub grace: Duration,
}

impl AppState {
    pub fn new(initial: Route) -> Self {
        Self {
            session: SessionState::Unknown,
            route: initial,
            events: Vec::new(),
            pending: PendingDeletions::default(),
            task_seq: TaskSeq::default(),
            grace: GRACE_PERIOD,
        }
    }

    /// The guard verdict for the current route under the current session.
    pub fn gate(&self) -> Gate {
        guard(self.route.access(), &self.session)
    }
}
