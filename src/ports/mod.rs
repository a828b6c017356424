//! Ports - Interfaces for external dependencies.
//!
//! The core never reads the system clock on its own terms: the `Clock`
//! port makes "now" a caller-supplied value, so transitions stay
//! deterministic under test.

mod clock;

pub use clock::{Clock, SystemClock};
