//! Effect handlers: pure async functions returning the resulting event.
//!
//! Handlers perform I/O and timing only; they never touch state. The
//! runtime spawns them and routes their results through the inbox.

use std::sync::Arc;
use std::time::Duration;

use conecta_core::api::ApiClient;
use tokio_util::sync::CancellationToken;

use crate::effects::EventScope;
use crate::events::UiEvent;
use crate::pending::TaskId;

pub(crate) async fn load_events(
    api: Arc<ApiClient>,
    scope: EventScope,
    user_id: String,
) -> Option<UiEvent> {
    let result = match scope {
        EventScope::Browse { limit, offset } => api.list_events(limit, offset, &user_id).await,
        EventScope::Created => api.created_events(&user_id).await,
        EventScope::Joined => api.joined_events(&user_id).await,
    };
    Some(UiEvent::EventsLoaded {
        result: result.map_err(|error| format!("{error:#}")),
    })
}

/// The scheduled commit. Sleeps through the grace period; if the token is
/// cancelled first (undo or supersede) the remote delete is never sent and
/// nothing reports back. Otherwise exactly one DELETE goes out — a failure
/// is logged and absorbed, since the item is already gone locally and the
/// backend is the source of truth on the next full load.
pub(crate) async fn delete_commit(
    api: Arc<ApiClient>,
    event_id: String,
    user_id: String,
    task: TaskId,
    token: CancellationToken,
    grace: Duration,
) -> Option<UiEvent> {
    tokio::select! {
        () = token.cancelled() => None,
        () = tokio::time::sleep(grace) => {
            if let Err(error) = api.delete_event(&event_id, &user_id).await {
                tracing::warn!("delete commit for {event_id} failed: {error:#}");
            }
            Some(UiEvent::DeleteCommitted { event_id, task })
        }
    }
}

pub(crate) async fn logout(api: Arc<ApiClient>) -> Option<UiEvent> {
    Some(UiEvent::LogoutFinished {
        result: api.logout().await.map_err(|error| format!("{error:#}")),
    })
}
