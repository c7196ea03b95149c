//! Named-method lookup on the machine's host data.

use crate::callback::args::EventArgs;
use crate::callback::error::CallbackError;
use serde_json::Value;

/// Capability a machine's host data exposes to the engine.
///
/// Callbacks given as a method name (`Callback::method("inc_on")`) are
/// resolved here at invocation time. Returning `None` means the host has
/// no method by that name.
///
/// # Example
///
/// ```rust
/// use turnstile::{CallbackError, EventArgs, Methods};
/// use serde_json::Value;
///
/// #[derive(Default)]
/// struct Switch {
///     on_count: u32,
///     locked: bool,
/// }
///
/// impl Methods for Switch {
///     fn call_method(
///         &mut self,
///         name: &str,
///         _args: &EventArgs,
///     ) -> Option<Result<Value, CallbackError>> {
///         match name {
///             "inc_on" => self.on_count += 1,
///             "is_unlocked" => return Some(Ok(Value::Bool(!self.locked))),
///             _ => return None,
///         }
///         Some(Ok(Value::Null))
///     }
/// }
///
/// let mut switch = Switch::default();
/// assert!(switch.call_method("inc_on", &EventArgs::new()).is_some());
/// assert!(switch.call_method("missing", &EventArgs::new()).is_none());
/// assert_eq!(switch.on_count, 1);
/// ```
pub trait Methods {
    /// Call the method `name` with the event arguments.
    ///
    /// Hooks and guards receive an empty argument list; transition actions
    /// receive the arguments the event was fired with. Methods that take no
    /// arguments simply ignore `args`.
    fn call_method(&mut self, name: &str, args: &EventArgs) -> Option<Result<Value, CallbackError>> {
        let _ = (name, args);
        None
    }

    /// Observer notified before a transition leaves `from` for `to`.
    ///
    /// Default implementation does nothing.
    fn changing_state(&mut self, from: &str, to: &str) -> Result<(), CallbackError> {
        let _ = (from, to);
        Ok(())
    }
}

/// Machines that carry no host data.
impl Methods for () {}
