//! Pending-deletion records for the deferred-commit delete flow.
//!
//! Each record holds the snapshot needed to restore the item, the
//! cancellation token for its scheduled commit, and the task id that keeps
//! a superseded commit from finishing against a stale record. At most one
//! record per event id is ever outstanding: registering a new one hands the
//! prior token back to the caller to cancel.

use std::collections::HashMap;
use std::time::Duration;

use conecta_core::models::Event;
use tokio_util::sync::CancellationToken;

/// Delay between a local delete and its remote commit. The undo
/// notification uses the same value as its auto-dismiss timeout, so the
/// affordance never outlives the window it controls.
pub const GRACE_PERIOD: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug)]
pub struct PendingDeletion {
    pub snapshot: Event,
    pub token: CancellationToken,
    pub task: TaskId,
}

/// Arena of outstanding deletions, keyed by event id.
#[derive(Debug, Default)]
pub struct PendingDeletions {
    records: HashMap<String, PendingDeletion>,
}

impl PendingDeletions {
    /// Registers a pending deletion. If a record for the same id is already
    /// outstanding it is superseded and its token is returned — the caller
    /// must cancel it before the new commit is scheduled, so two timers
    /// never run for one id.
    pub fn begin(
        &mut self,
        snapshot: Event,
        task: TaskId,
        token: CancellationToken,
    ) -> Option<CancellationToken> {
        self.records
            .insert(
                snapshot.id.clone(),
                PendingDeletion {
                    snapshot,
                    token,
                    task,
                },
            )
            .map(|prior| prior.token)
    }

    pub fn get(&self, event_id: &str) -> Option<&PendingDeletion> {
        self.records.get(event_id)
    }

    /// Takes the record out for an undo. `None` once the grace period has
    /// elapsed and the commit discarded the record — a late undo is a no-op.
    pub fn take(&mut self, event_id: &str) -> Option<PendingDeletion> {
        self.records.remove(event_id)
    }

    /// Discards the record after its commit reported, but only if the
    /// reporting task still owns it. A commit that was superseded finds a
    /// newer task id here and must not touch the record.
    pub fn finish_if_active(&mut self, event_id: &str, task: TaskId) -> bool {
        let active = self
            .records
            .get(event_id)
            .is_some_and(|record| record.task == task);
        if active {
            self.records.remove(event_id);
        }
        active
    }

    pub fn contains(&self, event_id: &str) -> bool {
        self.records.contains_key(event_id)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use conecta_core::models::{EventFormat, Publicity};

    use super::*;

    fn event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            user_id: Some("u1".to_string()),
            event_name: format!("Event {id}"),
            event_details: String::new(),
            event_date: Utc::now(),
            duration: 60,
            duration_unit: "horas".to_string(),
            event_local: "Online".to_string(),
            event_publicity: Publicity::Public,
            event_format: EventFormat::Online,
            max_participants: 0,
            price: 0.0,
            access_code: None,
        }
    }

    #[test]
    fn test_begin_supersedes_prior_record() {
        let mut pending = PendingDeletions::default();
        let first = CancellationToken::new();
        let second = CancellationToken::new();

        assert!(
            pending
                .begin(event("e1"), TaskId(0), first.clone())
                .is_none()
        );
        let superseded = pending.begin(event("e1"), TaskId(1), second).unwrap();
        // The prior token comes back so the caller can cancel its timer.
        superseded.cancel();
        assert!(first.is_cancelled());

        // Only the newer record survives.
        assert_eq!(pending.get("e1").unwrap().task, TaskId(1));
    }

    #[test]
    fn test_take_removes_record() {
        let mut pending = PendingDeletions::default();
        pending.begin(event("e1"), TaskId(0), CancellationToken::new());

        let record = pending.take("e1").unwrap();
        assert_eq!(record.snapshot.id, "e1");
        assert!(pending.take("e1").is_none());
    }

    #[test]
    fn test_finish_guards_stale_task() {
        let mut pending = PendingDeletions::default();
        pending.begin(event("e1"), TaskId(0), CancellationToken::new());
        pending.begin(event("e1"), TaskId(1), CancellationToken::new());

        // The superseded commit must not discard the active record.
        assert!(!pending.finish_if_active("e1", TaskId(0)));
        assert!(pending.contains("e1"));

        assert!(pending.finish_if_active("e1", TaskId(1)));
        assert!(pending.is_empty());
    }

    #[test]
    fn test_distinct_ids_do_not_interfere() {
        let mut pending = PendingDeletions::default();
        assert!(
            pending
                .begin(event("e1"), TaskId(0), CancellationToken::new())
                .is_none()
        );
        assert!(
            pending
                .begin(event("e2"), TaskId(1), CancellationToken::new())
                .is_none()
        );
        assert!(pending.contains("e1"));
        assert!(pending.contains("e2"));
    }
}
