//! Command implementations and shared helpers.

pub mod auth;
pub mod config;
pub mod events;
pub mod profile;

use std::sync::Arc;

use anyhow::{Result, bail};
use conecta_app::{Access, Gate, SessionState, guard, session};
use conecta_core::api::ApiClient;
use conecta_core::config::Config;
use conecta_core::session_store::SessionStore;
use reqwest::cookie::Jar;

/// Builds the API client with the persisted session cookie loaded.
pub(crate) fn client_with_jar(config: &Config) -> Result<(Arc<ApiClient>, Arc<Jar>)> {
    let base = config.backend_url()?;
    let jar = Arc::new(Jar::default());
    SessionStore::load().apply_to_jar(&jar, &base);
    let api = Arc::new(ApiClient::with_jar(base, Arc::clone(&jar))?);
    Ok((api, jar))
}

/// Resolves the session once and gates the command like a guarded route.
///
/// Any probe failure resolves to anonymous (fail-closed), which here reads
/// as "not logged in" — never as an error of its own.
pub(crate) async fn authenticated(config: &Config) -> Result<(Arc<ApiClient>, String)> {
    let (api, _jar) = client_with_jar(config)?;
    let session = session::resolve(&api).await;
    if let Gate::Redirect { .. } = guard(Access::RequiresAuth, &session) {
        bail!("Você não está logado. Use `conecta login`.");
    }
    let SessionState::Authenticated { user_id } = session else {
        bail!("Sessão não resolvida");
    };
    Ok((api, user_id))
}
