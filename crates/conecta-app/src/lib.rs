//! Conecta application shell.
//!
//! The client-side logic that is worth getting right: session resolution,
//! route guarding, and the deferred-commit delete flow. The shape is the
//! usual Elm split: state is only mutated by the reducer
//! ([`update::update`]), which returns effects; the runtime executes them
//! (network, timers) and feeds results back through an inbox channel.
//!
//! Rendering, navigation, and notifications are collaborators, not
//! implementations: the [`notify::Router`] and [`notify::Notifier`] traits
//! are the seams where a real surface plugs in.

pub mod effects;
pub mod events;
pub mod notify;
pub mod pending;
pub mod routes;
pub mod runtime;
pub mod session;
pub mod state;
pub mod update;

pub use effects::{EventScope, UiEffect};
pub use events::UiEvent;
pub use notify::{Notice, NoticeAction, Notifier, Router};
pub use pending::{GRACE_PERIOD, PendingDeletions, TaskId, TaskSeq};
pub use routes::{Access, Gate, Route, guard};
pub use runtime::{AppHandle, AppRuntime};
pub use session::SessionState;
pub use state::AppState;
