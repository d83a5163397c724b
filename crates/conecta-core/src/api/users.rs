//! User account and profile endpoints.

use anyhow::Result;
use reqwest::Method;

use super::ApiClient;
use crate::models::{NewUser, ProfilePatch, UserProfile};

impl ApiClient {
    /// Registers a new user account.
    pub async fn register(&self, user: &NewUser) -> Result<()> {
        let response = self.send_json(Method::POST, "/user", user).await?;
        Self::check_status(response, "/user")?;
        Ok(())
    }

    /// Fetches a user's profile.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.get_json(&format!("/user/{user_id}"), &[]).await
    }

    /// Applies a partial profile update.
    pub async fn update_profile(&self, user_id: &str, patch: &ProfilePatch) -> Result<()> {
        let path = format!("/user/{user_id}");
        let response = self.send_json(Method::PATCH, &path, patch).await?;
        Self::check_status(response, &path)?;
        Ok(())
    }
}
