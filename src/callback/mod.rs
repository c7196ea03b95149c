//! Hooks, actions and guards as callback references.
//!
//! A callback is either an inline closure with a declared arity or the
//! name of a method exposed by the machine's host data through
//! [`Methods`]. [`ActionInvoker`] resolves and runs them.

mod args;
mod error;
mod invoker;
mod methods;
mod reference;

pub use args::EventArgs;
pub use error::{BoxError, CallbackError};
pub use invoker::ActionInvoker;
pub use methods::Methods;
pub use reference::{Action, Callback, CallbackList, CallbackOutput, Condition, Hook};
