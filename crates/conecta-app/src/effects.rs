//! Effects returned by the reducer for the runtime to execute.
//!
//! The reducer never performs I/O or spawns tasks; it mutates state and
//! describes what should happen. Cancellation follows the same rule: the
//! reducer decides *when* by emitting `CancelTask` with the token, the
//! runtime calls `cancel()`.

use tokio_util::sync::CancellationToken;

use crate::notify::Notice;
use crate::pending::TaskId;
use crate::routes::Route;

/// Which event list a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventScope {
    /// Events open for joining (the home feed).
    Browse { limit: u32, offset: u32 },
    /// Events the user created.
    Created,
    /// Events the user joined.
    Joined,
}

#[derive(Debug)]
pub enum UiEffect {
    /// Probe the auth-status endpoint once.
    ResolveSession,

    /// Load an event list for the current view.
    LoadEvents { scope: EventScope },

    /// Start the grace-period timer for a pending deletion; when it elapses
    /// uncancelled, send the remote delete.
    ScheduleDeleteCommit {
        event_id: String,
        user_id: String,
        task: TaskId,
        token: CancellationToken,
    },

    /// Cancel an in-flight commit timer (undo, or superseded record).
    CancelTask { token: CancellationToken },

    /// Tell the router to swap views, replacing history.
    Redirect { to: Route },

    /// Surface a notification.
    Notify { notice: Notice },

    /// End the backend session.
    Logout,
}
