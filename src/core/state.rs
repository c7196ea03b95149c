//! State descriptors.
//!
//! A state is a name plus optional enter and exit hooks. Descriptors are
//! immutable once registered and shared behind `Arc` by every transition
//! that references them.

use crate::callback::{ActionInvoker, CallbackError, EventArgs, Hook, Methods};
use crate::machine::StateMachine;
use std::fmt;

/// One named state of a machine.
///
/// # Example
///
/// ```rust
/// use turnstile::{Callback, State, StateMachine};
///
/// let open: State<()> = State::new("open")
///     .on_enter(Callback::new(|_m: &mut StateMachine<()>| println!("opened")))
///     .on_exit("log_exit");
///
/// assert_eq!(open.name(), "open");
/// assert!(open.enter_hook().is_some());
/// assert!(open.exit_hook().is_some());
/// ```
pub struct State<C: Methods + 'static> {
    name: String,
    on_enter: Option<Hook<C>>,
    on_exit: Option<Hook<C>>,
}

impl<C: Methods + 'static> State<C> {
    /// Create a state without hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_enter: None,
            on_exit: None,
        }
    }

    /// Hook run each time the machine enters this state.
    pub fn on_enter(mut self, hook: impl Into<Hook<C>>) -> Self {
        self.on_enter = non_empty(hook.into());
        self
    }

    /// Hook run each time the machine leaves this state.
    pub fn on_exit(mut self, hook: impl Into<Hook<C>>) -> Self {
        self.on_exit = non_empty(hook.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enter_hook(&self) -> Option<&Hook<C>> {
        self.on_enter.as_ref()
    }

    pub fn exit_hook(&self) -> Option<&Hook<C>> {
        self.on_exit.as_ref()
    }

    pub(crate) fn run_enter(&self, machine: &mut StateMachine<C>) -> Result<(), CallbackError> {
        ActionInvoker::new(machine).run(self.on_enter.as_ref(), &EventArgs::new())
    }

    pub(crate) fn run_exit(&self, machine: &mut StateMachine<C>) -> Result<(), CallbackError> {
        ActionInvoker::new(machine).run(self.on_exit.as_ref(), &EventArgs::new())
    }
}

fn non_empty<C: Methods + 'static>(hook: Hook<C>) -> Option<Hook<C>> {
    (!hook.is_empty()).then_some(hook)
}

impl<C: Methods + 'static> fmt::Debug for State<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("on_enter", &self.on_enter)
            .field("on_exit", &self.on_exit)
            .finish()
    }
}
