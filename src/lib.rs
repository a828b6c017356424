//! Focus Cycles - State-management core for a Pomodoro-style cycle tracker.
//!
//! This crate implements the state machine that governs a collection of
//! timed work sessions: creating cycles, interrupting them before
//! completion, and marking them as finished. Rendering, persistence, and
//! the wall-clock timer that drives elapsed seconds are all external
//! collaborators that read from and dispatch into this core.

pub mod application;
pub mod domain;
pub mod ports;
