//! Cycle module - Timed work sessions and the reducer that evolves them.
//!
//! A Cycle is one timed work session with a lifecycle of
//! Running -> Interrupted or Running -> Finished. The collection of cycles
//! only ever changes through [`cycles_reducer`], a pure function over the
//! current [`CyclesState`] and a [`CycleAction`].

mod action;
mod entity;
mod events;
mod reducer;
mod state;

pub use action::CycleAction;
pub use entity::Cycle;
pub use events::CycleEvent;
pub use reducer::cycles_reducer;
pub use state::CyclesState;
