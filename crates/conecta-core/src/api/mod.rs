//! HTTP client for the Conecta backend.
//!
//! One `ApiClient` per process, built around a shared cookie jar so the
//! backend's session cookie rides along on every request. The base URL is
//! always injected (config or env), which keeps tests pointed at a mock
//! server.

mod auth;
mod events;
mod users;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use reqwest::cookie::Jar;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    jar: Arc<Jar>,
}

impl ApiClient {
    /// Creates a client with a fresh cookie jar.
    pub fn new(base_url: Url) -> Result<Self> {
        Self::with_jar(base_url, Arc::new(Jar::default()))
    }

    /// Creates a client around an existing cookie jar (persisted sessions).
    ///
    /// With `CONECTA_BLOCK_REAL_API=1` (set by test harnesses), refuses any
    /// base URL that is not loopback, so a misconfigured test can never talk
    /// to a real backend.
    pub fn with_jar(base_url: Url, jar: Arc<Jar>) -> Result<Self> {
        if std::env::var("CONECTA_BLOCK_REAL_API").is_ok_and(|v| v == "1")
            && !matches!(base_url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"))
        {
            bail!(
                "CONECTA_BLOCK_REAL_API=1 but base URL is not loopback: {base_url}\n\
                 Point CONECTA_BACKEND_URL at a mock server."
            );
        }

        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            jar,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn cookie_jar(&self) -> &Arc<Jar> {
        &self.jar
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .http
            .get(self.endpoint(path))
            .query(query)
            .send()
            .await
            .with_context(|| format!("GET {path} failed"))?;
        Self::parse_json(response, path).await
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        let label = method.as_str().to_string();
        self.http
            .request(method, self.endpoint(path))
            .json(body)
            .send()
            .await
            .with_context(|| format!("{label} {path} failed"))
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(
        response: reqwest::Response,
        path: &str,
    ) -> Result<T> {
        let response = Self::check_status(response, path)?;
        response
            .json()
            .await
            .with_context(|| format!("Invalid response body from {path}"))
    }

    pub(crate) fn check_status(
        response: reqwest::Response,
        path: &str,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            bail!("{path} failed with status {status}");
        }
        Ok(response)
    }
}
