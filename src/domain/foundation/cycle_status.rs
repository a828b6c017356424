//! CycleStatus enum for the lifecycle of a single work cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a work cycle.
///
/// Not stored on the cycle itself: derived from which terminal date, if
/// any, has been set. A cycle with neither date is Running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    #[default]
    Running,
    Interrupted,
    Finished,
}

impl CycleStatus {
    /// Returns true if the cycle is still running.
    pub fn is_running(&self) -> bool {
        matches!(self, CycleStatus::Running)
    }
}

impl StateMachine for CycleStatus {
    /// Valid transitions:
    /// - Running -> Interrupted
    /// - Running -> Finished
    fn can_transition_to(&self, target: &CycleStatus) -> bool {
        use CycleStatus::*;
        matches!((self, target), (Running, Interrupted) | (Running, Finished))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CycleStatus::*;
        match self {
            Running => vec![Interrupted, Finished],
            Interrupted | Finished => vec![],
        }
    }
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CycleStatus::Running => "Running",
            CycleStatus::Interrupted => "Interrupted",
            CycleStatus::Finished => "Finished",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_running() {
        assert_eq!(CycleStatus::default(), CycleStatus::Running);
    }

    #[test]
    fn is_running_works_correctly() {
        assert!(CycleStatus::Running.is_running());
        assert!(!CycleStatus::Interrupted.is_running());
        assert!(!CycleStatus::Finished.is_running());
    }

    #[test]
    fn running_can_transition_to_interrupted() {
        assert!(CycleStatus::Running.can_transition_to(&CycleStatus::Interrupted));
    }

    #[test]
    fn running_can_transition_to_finished() {
        assert!(CycleStatus::Running.can_transition_to(&CycleStatus::Finished));
    }

    #[test]
    fn interrupted_is_terminal() {
        assert!(CycleStatus::Interrupted.is_terminal());
        assert!(!CycleStatus::Interrupted.can_transition_to(&CycleStatus::Running));
        assert!(!CycleStatus::Interrupted.can_transition_to(&CycleStatus::Finished));
    }

    #[test]
    fn finished_is_terminal() {
        assert!(CycleStatus::Finished.is_terminal());
        assert!(!CycleStatus::Finished.can_transition_to(&CycleStatus::Running));
        assert!(!CycleStatus::Finished.can_transition_to(&CycleStatus::Interrupted));
    }

    #[test]
    fn running_is_not_terminal() {
        assert!(!CycleStatus::Running.is_terminal());
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", CycleStatus::Running), "Running");
        assert_eq!(format!("{}", CycleStatus::Interrupted), "Interrupted");
        assert_eq!(format!("{}", CycleStatus::Finished), "Finished");
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&CycleStatus::Running).unwrap(),
            "\"running\""
        );
        assert_eq!(
            serde_json::to_string(&CycleStatus::Interrupted).unwrap(),
            "\"interrupted\""
        );
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let status: CycleStatus = serde_json::from_str("\"finished\"").unwrap();
        assert_eq!(status, CycleStatus::Finished);
    }
}
