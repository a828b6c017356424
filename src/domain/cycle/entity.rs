//! Cycle entity - one timed work session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CycleId, CycleStatus, StateMachine, Timestamp};

/// One timed work session.
///
/// # Invariants
///
/// - `start_date` is set at creation and never changes
/// - At most one of `interrupted_date` / `finished_date` is ever set
/// - Once a terminal date is set, the cycle is never mutated again
///
/// The terminal-date invariants hold because the reducer is the only writer: it sets
/// each terminal date exactly once, on the cycle that is currently active,
/// and an active cycle has neither date set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Unique identifier, generated at creation.
    id: CycleId,

    /// Free-text label for the work being done.
    task: String,

    /// Planned duration in minutes.
    minutes_amount: u32,

    /// When the cycle started.
    start_date: Timestamp,

    /// Set only if the cycle was interrupted before completion.
    interrupted_date: Option<Timestamp>,

    /// Set only if the cycle ran to completion.
    finished_date: Option<Timestamp>,
}

impl Cycle {
    /// Creates a new running cycle with a fresh id.
    pub fn new(task: impl Into<String>, minutes_amount: u32, start_date: Timestamp) -> Self {
        Self {
            id: CycleId::new(),
            task: task.into(),
            minutes_amount,
            start_date,
            interrupted_date: None,
            finished_date: None,
        }
    }

    /// Reconstitutes a cycle from externally persisted data.
    ///
    /// Persistence itself is the surrounding application's concern; this
    /// only rebuilds the value without generating a new id.
    pub fn reconstitute(
        id: CycleId,
        task: String,
        minutes_amount: u32,
        start_date: Timestamp,
        interrupted_date: Option<Timestamp>,
        finished_date: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            task,
            minutes_amount,
            start_date,
            interrupted_date,
            finished_date,
        }
    }

    /// Returns the cycle id.
    pub fn id(&self) -> CycleId {
        self.id
    }

    /// Returns the task label.
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Returns the planned duration in minutes.
    pub fn minutes_amount(&self) -> u32 {
        self.minutes_amount
    }

    /// Returns when the cycle started.
    pub fn start_date(&self) -> Timestamp {
        self.start_date
    }

    /// Returns when the cycle was interrupted, if it was.
    pub fn interrupted_date(&self) -> Option<Timestamp> {
        self.interrupted_date
    }

    /// Returns when the cycle finished, if it did.
    pub fn finished_date(&self) -> Option<Timestamp> {
        self.finished_date
    }

    /// Lifecycle status derived from the terminal dates.
    pub fn status(&self) -> CycleStatus {
        if self.interrupted_date.is_some() {
            CycleStatus::Interrupted
        } else if self.finished_date.is_some() {
            CycleStatus::Finished
        } else {
            CycleStatus::Running
        }
    }

    /// Returns true if the cycle reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Returns a copy of this cycle marked as interrupted.
    ///
    /// Only the reducer calls this, and only on the active cycle.
    pub(crate) fn with_interrupted_at(&self, interrupted_at: Timestamp) -> Self {
        Self {
            interrupted_date: Some(interrupted_at),
            ..self.clone()
        }
    }

    /// Returns a copy of this cycle marked as finished.
    ///
    /// Only the reducer calls this, and only on the active cycle.
    pub(crate) fn with_finished_at(&self, finished_at: Timestamp) -> Self {
        Self {
            finished_date: Some(finished_at),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cycle() -> Cycle {
        Cycle::new("Write report", 25, Timestamp::from_unix_secs(1000))
    }

    #[test]
    fn new_cycle_is_running() {
        let cycle = test_cycle();
        assert_eq!(cycle.status(), CycleStatus::Running);
        assert!(!cycle.is_terminal());
    }

    #[test]
    fn new_cycle_has_no_terminal_dates() {
        let cycle = test_cycle();
        assert!(cycle.interrupted_date().is_none());
        assert!(cycle.finished_date().is_none());
    }

    #[test]
    fn new_cycle_keeps_task_and_minutes() {
        let cycle = test_cycle();
        assert_eq!(cycle.task(), "Write report");
        assert_eq!(cycle.minutes_amount(), 25);
    }

    #[test]
    fn new_cycles_get_unique_ids() {
        let a = test_cycle();
        let b = test_cycle();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn interrupted_cycle_derives_interrupted_status() {
        let cycle = test_cycle().with_interrupted_at(Timestamp::from_unix_secs(2000));
        assert_eq!(cycle.status(), CycleStatus::Interrupted);
        assert!(cycle.is_terminal());
        assert!(cycle.finished_date().is_none());
    }

    #[test]
    fn finished_cycle_derives_finished_status() {
        let cycle = test_cycle().with_finished_at(Timestamp::from_unix_secs(2000));
        assert_eq!(cycle.status(), CycleStatus::Finished);
        assert!(cycle.is_terminal());
        assert!(cycle.interrupted_date().is_none());
    }

    #[test]
    fn closing_a_cycle_preserves_identity_and_start() {
        let cycle = test_cycle();
        let closed = cycle.with_interrupted_at(Timestamp::from_unix_secs(2000));
        assert_eq!(closed.id(), cycle.id());
        assert_eq!(closed.start_date(), cycle.start_date());
        assert_eq!(closed.task(), cycle.task());
    }

    #[test]
    fn reconstitute_preserves_all_fields() {
        let id = CycleId::new();
        let start = Timestamp::from_unix_secs(1000);
        let finished = Timestamp::from_unix_secs(2500);

        let cycle = Cycle::reconstitute(id, "Review PR".to_string(), 15, start, None, Some(finished));

        assert_eq!(cycle.id(), id);
        assert_eq!(cycle.task(), "Review PR");
        assert_eq!(cycle.minutes_amount(), 15);
        assert_eq!(cycle.start_date(), start);
        assert_eq!(cycle.finished_date(), Some(finished));
        assert_eq!(cycle.status(), CycleStatus::Finished);
    }

    #[test]
    fn cycle_serializes_optional_dates() {
        let cycle = test_cycle();
        let json = serde_json::to_value(&cycle).unwrap();
        assert_eq!(json["task"], "Write report");
        assert!(json["interrupted_date"].is_null());
        assert!(json["finished_date"].is_null());
    }
}
