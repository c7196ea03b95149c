//! Resolution and invocation of callback references.

use crate::callback::args::EventArgs;
use crate::callback::error::CallbackError;
use crate::callback::methods::Methods;
use crate::callback::reference::{Callback, CallbackList, CallbackOutput};
use crate::machine::StateMachine;
use tracing::trace;

/// Runs callbacks against one machine.
///
/// Inline callables are called with the arity they were declared with.
/// Method references are looked up on the host data and always receive
/// the arguments; the host decides whether to use them.
pub struct ActionInvoker<'m, C: Methods + 'static> {
    machine: &'m mut StateMachine<C>,
}

impl<'m, C: Methods + 'static> ActionInvoker<'m, C> {
    pub fn new(machine: &'m mut StateMachine<C>) -> Self {
        Self { machine }
    }

    /// Invoke every callback of an optional list, in order.
    pub fn run(
        &mut self,
        callbacks: Option<&CallbackList<C, ()>>,
        args: &EventArgs,
    ) -> Result<(), CallbackError> {
        let Some(callbacks) = callbacks else {
            return Ok(());
        };

        for callback in callbacks.iter() {
            self.invoke(callback, args)?;
        }
        Ok(())
    }

    /// Invoke a single callback and convert its result.
    pub fn invoke<R>(&mut self, callback: &Callback<C, R>, args: &EventArgs) -> Result<R, CallbackError>
    where
        R: CallbackOutput,
    {
        trace!(
            machine = %self.machine.id(),
            callback = callback.label(),
            args = args.len(),
            "invoking callback"
        );

        match callback {
            Callback::Machine(f) => f(&mut *self.machine),
            Callback::MachineWithArgs(f) => f(&mut *self.machine, args),
            Callback::Bare(f) => f(),
            Callback::Method(name) => {
                let value = self
                    .machine
                    .context_mut()
                    .call_method(name, args)
                    .ok_or_else(|| CallbackError::MethodNotFound { name: name.clone() })??;
                R::from_method(name, value)
            }
        }
    }
}
