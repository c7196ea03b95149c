//! Turnstile: an embeddable finite state machine engine
//!
//! A machine type is declared once with [`StateMachineBuilder`]: named
//! states with enter/exit hooks, and transitions labeled by event names
//! with optional guards and actions. Each instance created from the
//! resulting [`MachineDefinition`] keeps its own current state and may be
//! extended with states and transitions of its own.
//!
//! # Core Concepts
//!
//! - **State**: a name plus optional enter/exit hooks
//! - **Transition**: an event leading from source states to a target
//! - **Guard**: conditions that must all hold for a transition to fire
//! - **Callback**: an inline closure or the name of a host method
//!
//! Dispatch is synchronous: firing an event selects exactly one
//! applicable, guard-satisfied transition, notifies the host, runs the
//! exit hook, moves to the target, runs its enter hook and then the
//! transition action.
//!
//! # Example
//!
//! ```rust
//! use turnstile::{CallbackError, EventArgs, Methods, State, StateMachineBuilder, TransitionBuilder};
//! use serde_json::Value;
//!
//! #[derive(Default)]
//! struct Switch {
//!     on_count: u32,
//! }
//!
//! impl Methods for Switch {
//!     fn call_method(&mut self, name: &str, _args: &EventArgs) -> Option<Result<Value, CallbackError>> {
//!         match name {
//!             "inc_on" => {
//!                 self.on_count += 1;
//!                 Some(Ok(Value::Null))
//!             }
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let definition = StateMachineBuilder::<Switch>::new()
//!     .state(State::new("off"))
//!     .state(State::new("on").on_enter("inc_on"))
//!     .initial("off")
//!     .transition(TransitionBuilder::new("toggle").from("off").to("on"))
//!     .transition(TransitionBuilder::new("toggle").from("on").to("off"))
//!     .build()
//!     .unwrap();
//!
//! let mut switch = definition.instantiate(Switch::default()).unwrap();
//! switch.fire("toggle").unwrap();
//!
//! assert!(switch.is("on"));
//! assert_eq!(switch.context().on_count, 1);
//! ```

pub mod builder;
pub mod callback;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::callback::{
    Action, ActionInvoker, Callback, CallbackError, CallbackList, Condition, EventArgs, Hook,
    Methods,
};
pub use crate::core::{
    DefinitionError, Guard, State, StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT,
};
pub use crate::machine::{InitialState, MachineDefinition, MachineError, StateMachine};
