//! CyclesState - the aggregate the reducer evolves.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CycleId;

use super::Cycle;

/// Ordered collection of cycles plus the currently active one.
///
/// # Invariants
///
/// - `cycles` is append-only; entries are never removed or reordered
/// - If `active_cycle_id` is set, exactly one cycle carries that id and
///   that cycle has no terminal date
///
/// Cycles are held behind `Arc` so that a transition can reuse the
/// untouched entries of the previous state: only the aggregate container
/// and the single mutated cycle get a new identity, and references to the
/// previous state stay valid for change detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CyclesState {
    pub(super) cycles: Vec<Arc<Cycle>>,
    pub(super) active_cycle_id: Option<CycleId>,
}

impl CyclesState {
    /// Creates an empty state with no active cycle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cycles in insertion order.
    pub fn cycles(&self) -> &[Arc<Cycle>] {
        &self.cycles
    }

    /// Returns the number of cycles.
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Returns the id of the currently active cycle, if any.
    pub fn active_cycle_id(&self) -> Option<CycleId> {
        self.active_cycle_id
    }

    /// Returns the currently active cycle, if any.
    ///
    /// Returns `None` when no cycle is active or when no cycle matches the
    /// active id. The latter cannot occur under the invariants above, but
    /// an unmatched id must never panic.
    pub fn active_cycle(&self) -> Option<&Arc<Cycle>> {
        let active_id = self.active_cycle_id?;
        self.cycles.iter().find(|cycle| cycle.id() == active_id)
    }
}
