//! Session state and the auth-status probe.
//!
//! One session context per process: resolved once at startup, injected into
//! every consumer, invalidated explicitly on logout. Nothing re-probes per
//! view.

use conecta_core::api::ApiClient;

use crate::events::UiEvent;

/// Authentication state derived from the backend probe.
///
/// `Unknown` exists only between startup and the probe response; once the
/// state is terminal it stays put until [`SessionState::invalidate`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// The probe has not resolved yet. Guards must not render anything
    /// route-specific in this state.
    #[default]
    Unknown,
    Authenticated {
        user_id: String,
    },
    Anonymous,
}

impl SessionState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Unknown)
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { user_id } => Some(user_id),
            _ => None,
        }
    }

    /// Drops any authenticated identity. Called on logout; consumers that
    /// need a fresh determination must probe again explicitly.
    pub fn invalidate(&mut self) {
        *self = SessionState::Anonymous;
    }
}

/// Probes the backend once and derives the session state.
///
/// Fail-closed: a network error, a non-OK status, a malformed body, or an
/// authenticated response missing the user id all resolve to `Anonymous`.
/// An unreachable auth service must never read as "logged in". Failures are
/// logged, never surfaced to the user.
pub async fn resolve(api: &ApiClient) -> SessionState {
    match api.auth_status().await {
        Ok(status) if status.authenticated => match status.user {
            Some(user) => SessionState::Authenticated { user_id: user.id },
            None => {
                tracing::warn!("auth status claimed authenticated without a user; failing closed");
                SessionState::Anonymous
            }
        },
        Ok(_) => SessionState::Anonymous,
        Err(error) => {
            tracing::warn!("auth status probe failed, treating session as anonymous: {error:#}");
            SessionState::Anonymous
        }
    }
}

/// Handler form of [`resolve`] for the runtime's inbox.
pub(crate) async fn resolve_session(api: std::sync::Arc<ApiClient>) -> UiEvent {
    UiEvent::SessionResolved {
        state: resolve(&api).await,
    }
}
