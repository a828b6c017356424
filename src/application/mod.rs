//! Application layer - the store that owns and evolves cycle state.

mod store;

pub use store::CycleStore;
