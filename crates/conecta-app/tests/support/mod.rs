//! Shared fixtures for the app shell integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use conecta_app::{Notice, Notifier, Route, Router};
use conecta_core::api::ApiClient;
use wiremock::MockServer;

pub fn client_for(server: &MockServer) -> Arc<ApiClient> {
    let base: url::Url = server.uri().parse().unwrap();
    Arc::new(ApiClient::new(base).unwrap())
}

/// Router that records every replace call.
#[derive(Clone, Default)]
pub struct RecordingRouter {
    pub replaced: Arc<Mutex<Vec<Route>>>,
}

impl Router for RecordingRouter {
    fn replace(&self, route: &Route) {
        self.replaced.lock().unwrap().push(route.clone());
    }
}

/// Notifier that records every notice.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub notices: Arc<Mutex<Vec<Notice>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

pub fn event_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": "u1",
        "event_name": format!("Event {id}"),
        "event_details": "",
        "event_date": "2026-09-01T18:30:00Z",
        "duration": 60,
        "duration_unit": "horas",
        "event_local": "Online",
        "event_publicity": "PUBLIC",
        "event_format": "ONLINE",
        "max_participants": 0,
        "price": 0.0
    })
}
