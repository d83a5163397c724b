//! Wire types for the Conecta backend.
//!
//! The backend speaks two dialects: resources it returns are snake_case
//! (with a `username` quirk on profiles), request bodies it accepts are
//! camelCase. All of that mapping lives here, on serde attributes; the rest
//! of the workspace only ever sees the Rust field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Publicity {
    #[serde(rename = "PUBLIC")]
    Public,
    #[serde(rename = "PRIVATE")]
    Private,
}

/// Event format. The wire constants are the backend's Portuguese tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventFormat {
    #[serde(rename = "PRESENCIAL")]
    InPerson,
    #[serde(rename = "ONLINE")]
    Online,
}

/// An event as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub event_name: String,
    pub event_details: String,
    pub event_date: DateTime<Utc>,
    /// Duration in minutes.
    pub duration: u32,
    pub duration_unit: String,
    pub event_local: String,
    pub event_publicity: Publicity,
    pub event_format: EventFormat,
    pub max_participants: u32,
    pub price: f64,
    /// Only present on private events the caller owns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
}

/// Auth-status probe response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
}

/// Login request body.
#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub job_title: String,
    pub company: String,
    pub password: String,
}

/// A user profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "username")]
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image_url: String,
    pub job_title: String,
    pub company: String,
}

/// Partial profile update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Event creation request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub user_id: String,
    pub event_name: String,
    pub event_details: String,
    pub event_date: DateTime<Utc>,
    /// Duration in minutes.
    pub duration: u32,
    pub duration_unit: String,
    pub event_format: EventFormat,
    pub event_local: String,
    pub event_publicity: Publicity,
    pub price: f64,
    pub max_participants: u32,
}

/// Partial event update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_format: Option<EventFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_local: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_publicity: Option<Publicity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
}

/// Event join request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub agreed_to_terms: bool,
    /// Required when the event is private.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
}

/// Outcome of a join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    AlreadyJoined,
}
