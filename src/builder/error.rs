//! Build errors for machine definitions and transitions.

use crate::core::DefinitionError;
use thiserror::Error;

/// Errors that can occur when building machine definitions and transitions.
///
/// `TooFewStates` and `MissingInitialState` make up the invalid
/// configuration class: a machine needs at least two states and an
/// initial state before any instance can exist.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Invalid configuration: at least two states are required, found {count}")]
    TooFewStates { count: usize },

    #[error("Invalid configuration: initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("Transition event name is empty")]
    MissingEvent,

    #[error("Transition '{event}' has no source state. Call .from(name)")]
    MissingFromState { event: String },

    #[error("Transition '{event}' has no target state. Call .to(name)")]
    MissingToState { event: String },

    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

impl BuildError {
    /// Whether this is one of the invalid configuration errors.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::TooFewStates { .. } | Self::MissingInitialState)
    }
}
