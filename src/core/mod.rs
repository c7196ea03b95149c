//! Core machine definitions.
//!
//! This module contains the building blocks the machine is made of:
//! - `State` descriptors with enter/exit hooks
//! - `Guard` conjunctions of conditions
//! - `Transition` edges and how they execute
//! - `Registry` tiers and the `Tiers` view over them
//! - Bounded `StateHistory` tracking

mod error;
mod guard;
mod history;
mod registry;
mod state;
mod transition;

pub use error::DefinitionError;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use registry::{Registry, Tiers};
pub use state::State;
pub use transition::Transition;
