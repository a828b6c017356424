//! The pure reducer mapping (state, action, now) to the next state.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;

use super::{Cycle, CycleAction, CyclesState};

/// Computes the next [`CyclesState`] from the current one and a requested
/// transition.
///
/// The caller supplies `now`, so the only internal nondeterminism is the
/// fresh id generated on create. The input state is never mutated and no
/// transition can fail: interrupting or finishing with no matching active
/// cycle returns the state unchanged.
pub fn cycles_reducer(state: &CyclesState, action: &CycleAction, now: Timestamp) -> CyclesState {
    match action {
        CycleAction::CreateCycle {
            task,
            minutes_amount,
        } => {
            // The previous active cycle, if any, is intentionally left
            // Running and merely loses the active marker.
            let cycle = Cycle::new(task.clone(), *minutes_amount, now);
            let active_cycle_id = Some(cycle.id());
            let mut cycles = state.cycles.clone();
            cycles.push(Arc::new(cycle));
            CyclesState {
                cycles,
                active_cycle_id,
            }
        }
        CycleAction::InterruptCurrentCycle => {
            close_active(state, |cycle| cycle.with_interrupted_at(now))
        }
        CycleAction::MarkCurrentCycleAsFinished => {
            close_active(state, |cycle| cycle.with_finished_at(now))
        }
    }
}

/// Closes the active cycle and clears the active marker.
///
/// Untouched cycles keep their previous `Arc` identity. A missing or
/// unmatched active id yields the input state unchanged.
fn close_active(state: &CyclesState, close: impl FnOnce(&Cycle) -> Cycle) -> CyclesState {
    let Some(active_id) = state.active_cycle_id else {
        return state.clone();
    };
    let Some(index) = state.cycles.iter().position(|c| c.id() == active_id) else {
        return state.clone();
    };

    let mut cycles = state.cycles.clone();
    cycles[index] = Arc::new(close(&cycles[index]));
    CyclesState {
        cycles,
        active_cycle_id: None,
    }
}
