//! Errors raised while registering states and transitions.

use thiserror::Error;

/// Errors from resolving or registering definitions in a registry tier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("State '{name}' is already defined")]
    DuplicateState { name: String },

    #[error("Unknown state '{name}'")]
    UnknownState { name: String },
}
