//! Machine types and instances.
//!
//! - `MachineDefinition`: the frozen shared tier of a machine type
//! - `StateMachine`: one instance, with its own tier and current state
//! - `MachineError`: construction and dispatch failures

mod definition;
mod error;
mod state_machine;

pub use definition::{InitialState, MachineDefinition};
pub use error::MachineError;
pub use state_machine::StateMachine;
