//! Cycle domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CycleId, Timestamp};

/// Events recorded as the cycle collection moves forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CycleEvent {
    /// A new cycle was created and became the active one.
    Created {
        cycle_id: CycleId,
        task: String,
        started_at: Timestamp,
    },

    /// The active cycle was interrupted before completion.
    Interrupted {
        cycle_id: CycleId,
        interrupted_at: Timestamp,
    },

    /// The active cycle ran to completion.
    Finished {
        cycle_id: CycleId,
        finished_at: Timestamp,
    },
}
