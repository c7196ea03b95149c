//! Errors raised while constructing machines and dispatching events.

use crate::builder::BuildError;
use crate::callback::CallbackError;
use crate::core::DefinitionError;
use thiserror::Error;

/// Errors surfaced by machine construction and event dispatch.
///
/// Dispatch errors are detected before any hook runs, so a failed
/// dispatch leaves the current state unchanged. Errors raised inside
/// hooks, actions and guards come back as `Callback`.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The initial state resolved at construction was empty.
    ///
    /// Definitions with fewer than two states or without an initial state
    /// never get this far: `StateMachineBuilder::build` rejects them with
    /// a [`BuildError`] for which `is_invalid_configuration()` holds, and
    /// it converts into `MachineError::Build`.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Cannot {event} from {state}")]
    InvalidTransition { event: String, state: String },

    #[error("Guard is not satisfied for '{event}' from {state}")]
    GuardNotSatisfied { event: String, state: String },

    #[error("More than one transition ({count}) was allowed for '{event}' from {state}")]
    ForkedTransition {
        event: String,
        state: String,
        count: usize,
    },

    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Callback(#[from] CallbackError),
}
