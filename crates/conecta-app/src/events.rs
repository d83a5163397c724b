//! Events consumed by the reducer.

use conecta_core::models::Event;

use crate::pending::TaskId;
use crate::routes::Route;
use crate::session::SessionState;

/// Everything that can happen to the app: user intents and async results.
/// The reducer is the only consumer.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// The auth-status probe resolved (or failed closed).
    SessionResolved { state: SessionState },
    /// The surface asked for a different view.
    NavigateTo { route: Route },
    /// A list load finished.
    EventsLoaded { result: Result<Vec<Event>, String> },
    /// The user asked to delete an event from the visible list.
    DeleteRequested { event_id: String },
    /// The user hit the undo affordance before the grace period elapsed.
    UndoRequested { event_id: String },
    /// A scheduled commit fired and sent (or attempted) the remote delete.
    DeleteCommitted { event_id: String, task: TaskId },
    /// The user asked to end the session.
    LogoutRequested,
    /// The logout request finished.
    LogoutFinished { result: Result<(), String> },
}
