//! Actions - the closed set of transitions the reducer understands.

use serde::{Deserialize, Serialize};

/// A requested transition over the cycle collection.
///
/// One variant per transition, each carrying only the fields it needs.
/// Interrupt and finish take no payload: they operate on whatever cycle
/// the state currently marks as active. Action kinds outside this enum
/// are unrepresentable, so there is no default branch to fall through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CycleAction {
    /// Start a new work cycle and make it the active one.
    CreateCycle { task: String, minutes_amount: u32 },

    /// Interrupt the currently active cycle, if any.
    InterruptCurrentCycle,

    /// Mark the currently active cycle as finished, if any.
    MarkCurrentCycleAsFinished,
}
