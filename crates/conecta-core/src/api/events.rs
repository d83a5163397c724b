//! Event and registration endpoints.

use anyhow::{Result, bail};
use reqwest::{Method, StatusCode};
use serde::Serialize;

use super::ApiClient;
use crate::models::{Event, EventDraft, EventPatch, JoinOutcome, JoinRequest};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteEventBody<'a> {
    user_id: &'a str,
}

impl ApiClient {
    /// Lists events available to the user, newest first.
    pub async fn list_events(&self, limit: u32, offset: u32, user_id: &str) -> Result<Vec<Event>> {
        self.get_json(
            "/events",
            &[
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("userId", user_id.to_string()),
            ],
        )
        .await
    }

    /// Lists events the user created.
    pub async fn created_events(&self, user_id: &str) -> Result<Vec<Event>> {
        self.get_json(&format!("/user/events/{user_id}"), &[]).await
    }

    /// Lists events the user joined.
    pub async fn joined_events(&self, user_id: &str) -> Result<Vec<Event>> {
        self.get_json(&format!("/user/events/joined/{user_id}"), &[])
            .await
    }

    /// Creates an event.
    pub async fn create_event(&self, draft: &EventDraft) -> Result<()> {
        let response = self.send_json(Method::POST, "/event", draft).await?;
        Self::check_status(response, "/event")?;
        Ok(())
    }

    /// Applies a partial update to an event the user owns.
    pub async fn update_event(&self, event_id: &str, patch: &EventPatch) -> Result<()> {
        let path = format!("/user/event/{event_id}");
        let response = self.send_json(Method::PATCH, &path, patch).await?;
        Self::check_status(response, &path)?;
        Ok(())
    }

    /// Deletes an event the user owns. Idempotent server-side.
    pub async fn delete_event(&self, event_id: &str, user_id: &str) -> Result<()> {
        let path = format!("/user/event/{event_id}");
        let response = self
            .send_json(Method::DELETE, &path, &DeleteEventBody { user_id })
            .await?;
        Self::check_status(response, &path)?;
        Ok(())
    }

    /// Joins an event. A 409 means the user already holds a registration.
    pub async fn join_event(&self, event_id: &str, request: &JoinRequest) -> Result<JoinOutcome> {
        let path = format!("/event/{event_id}/join");
        let response = self.send_json(Method::POST, &path, request).await?;
        match response.status() {
            status if status.is_success() => Ok(JoinOutcome::Joined),
            StatusCode::CONFLICT => Ok(JoinOutcome::AlreadyJoined),
            status => bail!("{path} failed with status {status}"),
        }
    }
}
