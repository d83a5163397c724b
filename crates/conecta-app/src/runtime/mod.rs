//! App runtime - owns the API client, executes effects, drives the loop.
//!
//! All side effects happen here. The reducer stays pure and produces
//! effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async handlers send `UiEvent`s to `inbox_tx`; the host drains the inbox
//! (via [`AppRuntime::next_event`]) and feeds each event back through
//! [`AppRuntime::dispatch`]. State is therefore only ever mutated from the
//! dispatching call site — one logical thread, no locks.

mod handlers;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use conecta_core::api::ApiClient;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::notify::{Notifier, Router};
use crate::routes::Route;
use crate::session;
use crate::state::AppState;
use crate::update;

/// Sender half of the inbox, for surfaces that need to push events in
/// (e.g. a notice's undo action).
#[derive(Clone)]
pub struct AppHandle {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl AppHandle {
    pub fn send(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }
}

pub struct AppRuntime {
    pub state: AppState,
    api: Arc<ApiClient>,
    router: Box<dyn Router>,
    notifier: Box<dyn Notifier>,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
}

impl AppRuntime {
    /// Creates a runtime with the production grace period.
    pub fn new(
        api: Arc<ApiClient>,
        router: Box<dyn Router>,
        notifier: Box<dyn Notifier>,
        initial: Route,
    ) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(initial),
            api,
            router,
            notifier,
            inbox_tx,
            inbox_rx,
        }
    }

    /// Creates a runtime with a custom grace period. The period is still
    /// fixed for every deletion in this runtime's lifetime; tests shrink it
    /// to keep wall-clock time down.
    pub fn with_grace(
        api: Arc<ApiClient>,
        router: Box<dyn Router>,
        notifier: Box<dyn Notifier>,
        initial: Route,
        grace: Duration,
    ) -> Self {
        let mut runtime = Self::new(api, router, notifier, initial);
        runtime.state.grace = grace;
        runtime
    }

    pub fn handle(&self) -> AppHandle {
        AppHandle {
            tx: self.inbox_tx.clone(),
        }
    }

    /// Kicks off the one session probe for this runtime's lifetime.
    pub fn start(&mut self) {
        self.execute(UiEffect::ResolveSession);
    }

    /// Runs an event through the reducer and executes the effects.
    pub fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute(effect);
        }
    }

    /// Waits for the next async result. `None` only if every sender
    /// (including this runtime's own) were dropped, which cannot happen
    /// while the runtime is alive.
    pub async fn next_event(&mut self) -> Option<UiEvent> {
        self.inbox_rx.recv().await
    }

    /// Dispatches inbox events until `stop` matches one (the matching event
    /// is dispatched before returning it).
    pub async fn run_until(&mut self, stop: impl Fn(&UiEvent) -> bool) -> Option<UiEvent> {
        loop {
            let event = self.next_event().await?;
            let done = stop(&event);
            self.dispatch(event.clone());
            if done {
                return Some(event);
            }
        }
    }

    /// Spawns a handler; `Some` results land in the inbox.
    fn spawn<F>(&self, handler: F)
    where
        F: Future<Output = Option<UiEvent>> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            if let Some(event) = handler.await {
                let _ = tx.send(event);
            }
        });
    }

    /// Executes a single effect by dispatching to the appropriate handler.
    fn execute(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::ResolveSession => {
                let api = Arc::clone(&self.api);
                self.spawn(async move { Some(session::resolve_session(api).await) });
            }
            UiEffect::LoadEvents { scope } => {
                let Some(user_id) = self.state.session.user_id().map(str::to_string) else {
                    return;
                };
                let api = Arc::clone(&self.api);
                self.spawn(handlers::load_events(api, scope, user_id));
            }
            UiEffect::ScheduleDeleteCommit {
                event_id,
                user_id,
                task,
                token,
            } => {
                let api = Arc::clone(&self.api);
                let grace = self.state.grace;
                self.spawn(handlers::delete_commit(
                    api, event_id, user_id, task, token, grace,
                ));
            }
            UiEffect::CancelTask { token } => token.cancel(),
            UiEffect::Redirect { to } => self.router.replace(&to),
            UiEffect::Notify { notice } => self.notifier.notify(notice),
            UiEffect::Logout => {
                let api = Arc::clone(&self.api);
                self.spawn(handlers::logout(api));
            }
        }
    }
}
