//! CycleStore - the single owning component for cycle state.

use std::sync::Arc;

use tracing::debug;

use crate::domain::cycle::{cycles_reducer, Cycle, CycleAction, CycleEvent, CyclesState};
use crate::domain::foundation::{CycleId, ValidationError};
use crate::ports::{Clock, SystemClock};

/// Holds the current [`CyclesState`] and funnels every mutation through
/// the reducer. Exactly one logical thread of control owns a store at a
/// time; `&mut self` serializes all transitions.
///
/// The store also tracks the seconds elapsed for the active cycle. That
/// counter lives outside the reducer: an external periodic caller advances
/// it through [`set_seconds_passed`](CycleStore::set_seconds_passed), and
/// creating a new cycle resets it to zero.
pub struct CycleStore {
    state: CyclesState,
    amount_seconds_passed: u32,
    clock: Arc<dyn Clock>,
    events: Vec<CycleEvent>,
}

impl CycleStore {
    /// Creates an empty store backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store with a caller-supplied time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: CyclesState::new(),
            amount_seconds_passed: 0,
            clock,
            events: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the current state snapshot.
    pub fn state(&self) -> &CyclesState {
        &self.state
    }

    /// Returns the cycles in insertion order.
    pub fn cycles(&self) -> &[Arc<Cycle>] {
        self.state.cycles()
    }

    /// Returns the currently active cycle, if any.
    pub fn active_cycle(&self) -> Option<&Arc<Cycle>> {
        self.state.active_cycle()
    }

    /// Returns the id of the currently active cycle, if any.
    pub fn active_cycle_id(&self) -> Option<CycleId> {
        self.state.active_cycle_id()
    }

    /// Returns the seconds elapsed for the active cycle.
    pub fn amount_seconds_passed(&self) -> u32 {
        self.amount_seconds_passed
    }

    /// Overwrites the elapsed-seconds counter.
    ///
    /// Called by the external tick source once per unit time; the counter
    /// is not synchronized with transitions beyond the reset on create.
    pub fn set_seconds_passed(&mut self, seconds: u32) {
        self.amount_seconds_passed = seconds;
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<CycleEvent> {
        std::mem::take(&mut self.events)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts a new work cycle and makes it the active one.
    ///
    /// Validation happens here, before the action is constructed; the
    /// reducer itself accepts any values. Resets the elapsed-seconds
    /// counter so the new cycle starts from zero.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `task` is empty or whitespace
    /// - `NotPositive` if `minutes_amount` is zero
    pub fn create_new_cycle(
        &mut self,
        task: impl Into<String>,
        minutes_amount: u32,
    ) -> Result<CycleId, ValidationError> {
        let task = task.into();
        if task.trim().is_empty() {
            return Err(ValidationError::empty_field("task"));
        }
        if minutes_amount == 0 {
            return Err(ValidationError::not_positive("minutes_amount", minutes_amount));
        }

        let action = CycleAction::CreateCycle {
            task,
            minutes_amount,
        };
        self.state = cycles_reducer(&self.state, &action, self.clock.now());
        self.amount_seconds_passed = 0;

        let cycle = self
            .state
            .active_cycle()
            .expect("create transition always activates the new cycle");
        let cycle_id = cycle.id();
        self.events.push(CycleEvent::Created {
            cycle_id,
            task: cycle.task().to_string(),
            started_at: cycle.start_date(),
        });

        debug!(%cycle_id, minutes_amount, "created new cycle");
        Ok(cycle_id)
    }

    /// Interrupts the currently active cycle.
    ///
    /// A no-op when no cycle is active; no event is recorded then.
    pub fn interrupt_current_cycle(&mut self) {
        self.close_current_cycle(CycleAction::InterruptCurrentCycle);
    }

    /// Marks the currently active cycle as finished.
    ///
    /// A no-op when no cycle is active; no event is recorded then.
    pub fn mark_current_cycle_as_finished(&mut self) {
        self.close_current_cycle(CycleAction::MarkCurrentCycleAsFinished);
    }

    fn close_current_cycle(&mut self, action: CycleAction) {
        let target = self.state.active_cycle().map(|cycle| cycle.id());
        self.state = cycles_reducer(&self.state, &action, self.clock.now());

        let Some(cycle_id) = target else {
            debug!(?action, "no active cycle; transition ignored");
            return;
        };

        // Read the terminal date back from the closed cycle so the event
        // carries exactly what the reducer recorded.
        let closed = self.find_cycle(cycle_id);
        match action {
            CycleAction::InterruptCurrentCycle => {
                if let Some(interrupted_at) = closed.and_then(|c| c.interrupted_date()) {
                    self.events.push(CycleEvent::Interrupted {
                        cycle_id,
                        interrupted_at,
                    });
                    debug!(%cycle_id, "interrupted active cycle");
                }
            }
            CycleAction::MarkCurrentCycleAsFinished => {
                if let Some(finished_at) = closed.and_then(|c| c.finished_date()) {
                    self.events.push(CycleEvent::Finished {
                        cycle_id,
                        finished_at,
                    });
                    debug!(%cycle_id, "finished active cycle");
                }
            }
            CycleAction::CreateCycle { .. } => {}
        }
    }

    fn find_cycle(&self, id: CycleId) -> Option<&Arc<Cycle>> {
        self.state.cycles().iter().find(|cycle| cycle.id() == id)
    }
}

impl Default for CycleStore {
    fn default() -> Self {
        Self::new()
    }
}
