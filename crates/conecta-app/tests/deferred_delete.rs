//! Integration tests for the deferred-commit delete flow.
//!
//! Real timers against a mock backend, with the grace period shrunk to keep
//! wall-clock time down. Request counts are asserted through wiremock
//! expectations: undo means zero DELETEs, a quiet grace period means
//! exactly one.

mod support;

use std::time::Duration;

use conecta_app::{AppRuntime, Route, SessionState, UiEvent};
use support::{RecordingNotifier, RecordingRouter, client_for, event_json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

async fn runtime_with_created_events(
    server: &MockServer,
    events: &[&str],
    grace: Duration,
) -> AppRuntime {
    let body: Vec<_> = events.iter().map(|id| event_json(id)).collect();
    Mock::given(method("GET"))
        .and(path("/user/events/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;

    let mut runtime = AppRuntime::with_grace(
        client_for(server),
        Box::new(RecordingRouter::default()),
        Box::new(RecordingNotifier::default()),
        Route::MyEvents,
        grace,
    );
    runtime.dispatch(UiEvent::SessionResolved {
        state: SessionState::Authenticated {
            user_id: "u1".to_string(),
        },
    });
    tokio::time::timeout(
        WAIT,
        runtime.run_until(|event| matches!(event, UiEvent::EventsLoaded { .. })),
    )
    .await
    .expect("list should load");
    runtime
}

#[tokio::test]
async fn test_commit_sends_exactly_one_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/user/event/e1"))
        .and(body_json(serde_json::json!({ "userId": "u1" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut runtime =
        runtime_with_created_events(&server, &["e1", "e2"], Duration::from_millis(100)).await;

    runtime.dispatch(UiEvent::DeleteRequested {
        event_id: "e1".to_string(),
    });
    // Removal is synchronous; no await between the request and this check.
    assert_eq!(runtime.state.events.len(), 1);
    assert!(!runtime.state.events.iter().any(|e| e.id == "e1"));

    tokio::time::timeout(
        WAIT,
        runtime.run_until(|event| matches!(event, UiEvent::DeleteCommitted { .. })),
    )
    .await
    .expect("commit should fire");

    assert!(runtime.state.pending.is_empty());
    assert!(!runtime.state.events.iter().any(|e| e.id == "e1"));
    server.verify().await;
}

#[tokio::test]
async fn test_undo_within_grace_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/user/event/e1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut runtime =
        runtime_with_created_events(&server, &["e1"], Duration::from_millis(400)).await;

    runtime.dispatch(UiEvent::DeleteRequested {
        event_id: "e1".to_string(),
    });
    assert!(runtime.state.events.is_empty());

    // Undo well inside the window.
    tokio::time::sleep(Duration::from_millis(100)).await;
    runtime.dispatch(UiEvent::UndoRequested {
        event_id: "e1".to_string(),
    });

    assert_eq!(runtime.state.events.len(), 1);
    assert_eq!(runtime.state.events[0].id, "e1");
    assert!(runtime.state.pending.is_empty());

    // Let the original deadline pass; the cancelled timer must stay silent.
    tokio::time::sleep(Duration::from_millis(600)).await;
    server.verify().await;
}

#[tokio::test]
async fn test_repeat_delete_issues_at_most_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/user/event/e1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut runtime =
        runtime_with_created_events(&server, &["e1"], Duration::from_millis(200)).await;

    runtime.dispatch(UiEvent::DeleteRequested {
        event_id: "e1".to_string(),
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    // Second request for the same id inside the window: supersedes, never
    // stacks a second timer.
    runtime.dispatch(UiEvent::DeleteRequested {
        event_id: "e1".to_string(),
    });

    tokio::time::timeout(
        WAIT,
        runtime.run_until(|event| matches!(event, UiEvent::DeleteCommitted { .. })),
    )
    .await
    .expect("superseding commit should fire");

    // Give the (cancelled) first timer's deadline time to pass too.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(runtime.state.pending.is_empty());
    server.verify().await;
}

#[tokio::test]
async fn test_distinct_deletes_each_commit_once() {
    let server = MockServer::start().await;
    for id in ["e1", "e2"] {
        Mock::given(method("DELETE"))
            .and(path(format!("/user/event/{id}")))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut runtime =
        runtime_with_created_events(&server, &["e1", "e2", "e3"], Duration::from_millis(100)).await;

    runtime.dispatch(UiEvent::DeleteRequested {
        event_id: "e1".to_string(),
    });
    assert_eq!(runtime.state.events.len(), 2);
    runtime.dispatch(UiEvent::DeleteRequested {
        event_id: "e2".to_string(),
    });
    assert_eq!(runtime.state.events.len(), 1);
    assert_eq!(runtime.state.events[0].id, "e3");

    for _ in 0..2 {
        tokio::time::timeout(
            WAIT,
            runtime.run_until(|event| matches!(event, UiEvent::DeleteCommitted { .. })),
        )
        .await
        .expect("both commits should fire");
    }
    server.verify().await;
}

#[tokio::test]
async fn test_commit_failure_is_absorbed() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/user/event/e1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut runtime =
        runtime_with_created_events(&server, &["e1"], Duration::from_millis(100)).await;

    runtime.dispatch(UiEvent::DeleteRequested {
        event_id: "e1".to_string(),
    });
    tokio::time::timeout(
        WAIT,
        runtime.run_until(|event| matches!(event, UiEvent::DeleteCommitted { .. })),
    )
    .await
    .expect("commit should still report");

    // The failure is not reconciled into the list; the item stays removed.
    assert!(runtime.state.events.is_empty());
    assert!(runtime.state.pending.is_empty());
    server.verify().await;
}
