//! Transitions between states.

use crate::callback::{ActionInvoker, CallbackError, EventArgs, Hook, Methods};
use crate::core::guard::Guard;
use crate::core::state::State;
use crate::machine::StateMachine;
use std::fmt;
use std::sync::Arc;

/// One edge of the machine: an event leading from a set of source states
/// to a destination, with an optional action and guard.
///
/// Transitions are built from a [`TransitionBuilder`](crate::builder::TransitionBuilder)
/// and resolved against a registry; they are immutable afterwards.
pub struct Transition<C: Methods + 'static> {
    event: String,
    from: Vec<Arc<State<C>>>,
    to: Arc<State<C>>,
    action: Option<Hook<C>>,
    guard: Guard<C>,
}

impl<C: Methods + 'static> Transition<C> {
    pub(crate) fn new(
        event: String,
        from: Vec<Arc<State<C>>>,
        to: Arc<State<C>>,
        action: Option<Hook<C>>,
        guard: Guard<C>,
    ) -> Self {
        Self {
            event,
            from,
            to,
            action,
            guard,
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    /// Names of the source states.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.from.iter().map(|state| state.name())
    }

    pub fn target(&self) -> &State<C> {
        &self.to
    }

    pub fn guard(&self) -> &Guard<C> {
        &self.guard
    }

    pub fn action(&self) -> Option<&Hook<C>> {
        self.action.as_ref()
    }

    /// Check whether `state` is one of the source states.
    ///
    /// States are matched by name so an instance-level state overriding a
    /// shared one is still a valid source.
    pub fn is_applicable_from(&self, state: &State<C>) -> bool {
        self.from.iter().any(|source| source.name() == state.name())
    }

    /// Move the machine along this edge.
    ///
    /// Runs the exit hook of the current state, points the machine at the
    /// destination, runs its enter hook, then runs the action with the
    /// event arguments. Guards are checked by the caller.
    ///
    /// Both states are looked up by name on the machine, so hooks of an
    /// instance state shadowing a shared one are the ones that run.
    pub fn execute(
        &self,
        machine: &mut StateMachine<C>,
        args: &EventArgs,
    ) -> Result<(), CallbackError> {
        let leaving = machine
            .state_named(machine.current_state())
            .unwrap_or_else(|| machine.current());
        leaving.run_exit(machine)?;

        let target = machine
            .state_named(self.to.name())
            .unwrap_or_else(|| Arc::clone(&self.to));
        machine.set_current(Arc::clone(&target));
        target.run_enter(machine)?;

        ActionInvoker::new(machine).run(self.action.as_ref(), args)
    }
}

impl<C: Methods + 'static> fmt::Debug for Transition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("event", &self.event)
            .field("from", &self.sources().collect::<Vec<_>>())
            .field("to", &self.to.name())
            .field("action", &self.action)
            .field("guard", &self.guard)
            .finish()
    }
}
