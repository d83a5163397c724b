//! Authentication endpoints.

use anyhow::{Context, Result};
use reqwest::Method;

use super::ApiClient;
use crate::models::{AuthStatus, Credentials};

impl ApiClient {
    /// Probes the backend for the current session status.
    ///
    /// Exactly one request, no retries, no client-side timeout. Callers
    /// decide what a failure means; the session resolver treats every
    /// failure as anonymous.
    pub async fn auth_status(&self) -> Result<AuthStatus> {
        let response = self
            .http
            .get(self.endpoint("/api/auth/status"))
            .send()
            .await
            .context("GET /api/auth/status failed")?;
        Self::parse_json(response, "/api/auth/status").await
    }

    /// Logs in; on success the backend sets the session cookie on our jar.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .send_json(Method::POST, "/login", &Credentials { email, password })
            .await?;
        Self::check_status(response, "/login")?;
        Ok(())
    }

    /// Ends the backend session.
    pub async fn logout(&self) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("/logout"))
            .send()
            .await
            .context("POST /logout failed")?;
        Self::check_status(response, "/logout")?;
        Ok(())
    }
}
