//! Route table and the session guard.
//!
//! One guard, parametrized by the access requirement, replaces the usual
//! pair of private/public wrapper components. While the session is still
//! `Unknown` the only legal output is `Loading` — the wrapped view must not
//! flash, and neither may a redirect fire early.

use crate::session::SessionState;

/// Client routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    MyEvents,
    ParticipatedEvents,
    CreateEvent,
    About,
    Profile,
    EventDetails(String),
    EventRegistration(String),
    EditEvent(String),
}

impl Route {
    /// The access requirement the guard enforces for this route.
    pub fn access(&self) -> Access {
        match self {
            Route::Login | Route::Register => Access::RequiresAnon,
            _ => Access::RequiresAuth,
        }
    }

    /// The route's path, for surfaces that address views by URL.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Home => "/home".to_string(),
            Route::MyEvents => "/my-events".to_string(),
            Route::ParticipatedEvents => "/participated-events".to_string(),
            Route::CreateEvent => "/create-event".to_string(),
            Route::About => "/about".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::EventDetails(id) => format!("/event/{id}"),
            Route::EventRegistration(id) => format!("/event/{id}/register"),
            Route::EditEvent(id) => format!("/event/{id}/edit"),
        }
    }
}

/// What a route requires of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    RequiresAuth,
    RequiresAnon,
}

/// Guard verdict for a route under a given session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Session still unknown: show a placeholder, nothing else.
    Loading,
    /// Render the wrapped view.
    Render,
    /// Redirect, replacing history so back-navigation cannot loop into the
    /// guarded page.
    Redirect { to: Route },
}

/// Gates a view by access requirement and session state.
pub fn guard(access: Access, session: &SessionState) -> Gate {
    match (access, session) {
        (_, SessionState::Unknown) => Gate::Loading,
        (Access::RequiresAuth, SessionState::Authenticated { .. })
        | (Access::RequiresAnon, SessionState::Anonymous) => Gate::Render,
        (Access::RequiresAuth, SessionState::Anonymous) => Gate::Redirect { to: Route::Login },
        (Access::RequiresAnon, SessionState::Authenticated { .. }) => {
            Gate::Redirect { to: Route::Home }
        }
    }
}
