//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `cycle` - Cycle entity, collection state, actions, and the pure reducer

pub mod cycle;
pub mod foundation;
