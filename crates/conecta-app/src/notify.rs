//! Collaborator seams: the notification surface and the router.
//!
//! The shell does not render anything. Whatever hosts it (a TUI, a test, a
//! plain CLI command) implements these two traits and wires notice actions
//! back into the event loop through an [`crate::runtime::AppHandle`].

use std::time::Duration;

use chrono::Local;

use crate::events::UiEvent;
use crate::routes::Route;

/// A dismissible notification.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    /// Secondary line, if any.
    pub body: Option<String>,
    /// Auto-dismiss timeout.
    pub duration: Duration,
    /// Optional action offered until the notice dismisses.
    pub action: Option<NoticeAction>,
}

/// An action attached to a notice. Triggering it before the notice
/// dismisses sends `event` back into the app loop.
#[derive(Debug, Clone)]
pub struct NoticeAction {
    pub label: String,
    pub event: UiEvent,
}

impl Notice {
    /// Plain error notice, five seconds like the product's error toasts.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            body: None,
            duration: Duration::from_secs(5),
            action: None,
        }
    }

    /// The undoable delete notice. Carries the grace period as its
    /// duration so the undo affordance disappears exactly when the commit
    /// fires, and the undo event as its action.
    pub fn deleted_event(event_id: &str, grace: Duration) -> Self {
        Self {
            message: "Evento deletado com sucesso!".to_string(),
            body: Some(format!("Deletado em {}", Local::now().format("%d/%m/%Y %H:%M:%S"))),
            duration: grace,
            action: Some(NoticeAction {
                label: "Desfazer".to_string(),
                event: UiEvent::UndoRequested {
                    event_id: event_id.to_string(),
                },
            }),
        }
    }
}

/// Notification surface contract.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Router contract: swap to a route, replacing history.
pub trait Router {
    fn replace(&self, route: &Route);
}
