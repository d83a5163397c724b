//! The reducer.
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects; nothing else touches `AppState`.

use tokio_util::sync::CancellationToken;

use crate::effects::{EventScope, UiEffect};
use crate::events::UiEvent;
use crate::notify::Notice;
use crate::routes::{Gate, Route};
use crate::state::AppState;

/// The main reducer function.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::SessionResolved { state: session } => {
            state.session = session;
            apply_gate(state)
        }
        UiEvent::NavigateTo { route } => {
            state.route = route;
            apply_gate(state)
        }
        UiEvent::EventsLoaded { result } => match result {
            Ok(events) => {
                state.events = events;
                vec![]
            }
            Err(error) => {
                tracing::warn!("event list load failed: {error}");
                vec![UiEffect::Notify {
                    notice: Notice::error("Erro ao buscar eventos"),
                }]
            }
        },
        UiEvent::DeleteRequested { event_id } => request_delete(state, &event_id),
        UiEvent::UndoRequested { event_id } => undo_delete(state, &event_id),
        UiEvent::DeleteCommitted { event_id, task } => {
            // Stale guard: a superseded commit must not discard the record
            // its replacement still owns.
            state.pending.finish_if_active(&event_id, task);
            vec![]
        }
        UiEvent::LogoutRequested => vec![UiEffect::Logout],
        UiEvent::LogoutFinished { result } => match result {
            Ok(()) => {
                state.session.invalidate();
                state.route = Route::Login;
                vec![UiEffect::Redirect { to: Route::Login }]
            }
            Err(error) => {
                tracing::warn!("logout failed: {error}");
                vec![UiEffect::Notify {
                    notice: Notice::error("Erro ao sair da sessão!"),
                }]
            }
        },
    }
}

/// Re-evaluates the guard for the current route.
///
/// `Loading` emits nothing: the surface shows its placeholder until the
/// probe resolves. A redirect both updates the state's route and tells the
/// router, then loads whatever the landing view needs.
fn apply_gate(state: &mut AppState) -> Vec<UiEffect> {
    match state.gate() {
        Gate::Loading => vec![],
        Gate::Render => load_effects(state),
        Gate::Redirect { to } => {
            state.route = to.clone();
            let mut effects = vec![UiEffect::Redirect { to }];
            // The redirect target always renders for this session state, so
            // this cannot recurse.
            effects.extend(load_effects(state));
            effects
        }
    }
}

/// List loads the current (rendered) route depends on.
fn load_effects(state: &AppState) -> Vec<UiEffect> {
    let scope = match state.route {
        Route::Home => EventScope::Browse {
            limit: 10,
            offset: 0,
        },
        Route::MyEvents => EventScope::Created,
        Route::ParticipatedEvents => EventScope::Joined,
        _ => return vec![],
    };
    vec![UiEffect::LoadEvents { scope }]
}

/// Removes the event from the visible collection immediately and schedules
/// the remote commit for after the grace period.
///
/// A repeat request for an id that is already pending supersedes the prior
/// record: its timer is cancelled before the new one is scheduled, so at
/// most one remote delete is ever issued per deletion.
fn request_delete(state: &mut AppState, event_id: &str) -> Vec<UiEffect> {
    let Some(user_id) = state.session.user_id().map(str::to_string) else {
        // Deletes are only reachable from guarded views.
        return vec![];
    };

    let snapshot = if let Some(index) = state.events.iter().position(|e| e.id == event_id) {
        state.events.remove(index)
    } else if let Some(existing) = state.pending.get(event_id) {
        // Already locally removed; restart the window with the same snapshot.
        existing.snapshot.clone()
    } else {
        return vec![];
    };

    let task = state.task_seq.next_id();
    let token = CancellationToken::new();

    let mut effects = Vec::new();
    if let Some(prior) = state.pending.begin(snapshot, task, token.clone()) {
        effects.push(UiEffect::CancelTask { token: prior });
    }
    effects.push(UiEffect::ScheduleDeleteCommit {
        event_id: event_id.to_string(),
        user_id,
        task,
        token,
    });
    effects.push(UiEffect::Notify {
        notice: Notice::deleted_event(event_id, state.grace),
    });
    effects
}

/// Cancels the scheduled commit and restores the snapshot.
///
/// The snapshot is appended; the original position is not preserved (an
/// accepted approximation). After the grace period the record is gone and
/// this is a no-op.
fn undo_delete(state: &mut AppState, event_id: &str) -> Vec<UiEffect> {
    let Some(record) = state.pending.take(event_id) else {
        return vec![];
    };
    state.events.push(record.snapshot);
    vec![UiEffect::CancelTask {
        token: record.token,
    }]
}
