//! Machine instances and event dispatch.

use crate::builder::TransitionBuilder;
use crate::callback::{EventArgs, Methods};
use crate::core::{
    DefinitionError, Registry, State, StateHistory, StateTransition, Tiers, Transition,
};
use crate::machine::definition::MachineDefinition;
use crate::machine::error::MachineError;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// A live machine: current state, instance tier and the host's data.
///
/// Instances never share mutable state. The shared tier comes from the
/// [`MachineDefinition`] and is only read; `add_state` and
/// `add_transition` write to this instance's own tier.
pub struct StateMachine<C: Methods + 'static> {
    id: Uuid,
    definition: MachineDefinition<C>,
    local: Registry<C>,
    current: Arc<State<C>>,
    history: StateHistory,
    context: C,
}

impl<C: Methods + 'static> StateMachine<C> {
    /// Create an instance in its initial state.
    ///
    /// The initial state is resolved once, then its enter hook runs
    /// exactly once before the instance is returned.
    pub fn new(definition: &MachineDefinition<C>, context: C) -> Result<Self, MachineError> {
        let shared = definition.registry();
        let initial = definition.initial().resolve(&context);
        if initial.is_empty() {
            return Err(MachineError::InvalidConfiguration {
                reason: "initial state resolved to an empty name".to_string(),
            });
        }
        let current = shared
            .state(&initial)
            .cloned()
            .ok_or(DefinitionError::UnknownState { name: initial })?;

        let mut machine = Self {
            id: Uuid::new_v4(),
            definition: definition.clone(),
            local: Registry::new(),
            current: Arc::clone(&current),
            history: StateHistory::with_limit(definition.history_limit()),
            context,
        };

        current.run_enter(&mut machine)?;

        debug!(
            machine = %machine.id,
            definition = machine.definition.name(),
            state = machine.current_state(),
            "machine instantiated"
        );
        Ok(machine)
    }

    /// Unique id of this instance.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn definition(&self) -> &MachineDefinition<C> {
        &self.definition
    }

    /// Name of the current state.
    pub fn current_state(&self) -> &str {
        self.current.name()
    }

    pub(crate) fn current(&self) -> Arc<State<C>> {
        Arc::clone(&self.current)
    }

    pub(crate) fn set_current(&mut self, state: Arc<State<C>>) {
        self.current = state;
    }

    /// The definition of `name` this instance uses: its own state if it
    /// added one with that name, the shared one otherwise.
    pub(crate) fn state_named(&self, name: &str) -> Option<Arc<State<C>>> {
        self.tiers().lookup_state(name).ok().cloned()
    }

    /// True iff the machine is currently in `state`.
    pub fn is(&self, state: &str) -> bool {
        self.current_state() == state
    }

    /// Names of every state known to this instance, shared and local.
    pub fn states(&self) -> Vec<&str> {
        self.tiers()
            .all_states()
            .into_iter()
            .map(|state| state.name())
            .collect()
    }

    /// Names of every event this instance responds to.
    pub fn events(&self) -> Vec<&str> {
        self.tiers().event_names()
    }

    /// Whether firing `event` could ever succeed on this instance.
    pub fn has_event(&self, event: &str) -> bool {
        self.tiers().transitions_for(event).next().is_some()
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Host data owned by this instance.
    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    fn tiers(&self) -> Tiers<'_, C> {
        Tiers::new(Some(self.definition.registry()), &self.local)
    }

    /// Add a state to this instance only.
    ///
    /// The state may shadow a shared state of the same name; redefining a
    /// state already added to this instance fails.
    pub fn add_state(&mut self, state: State<C>) -> Result<(), MachineError> {
        let state = self.local.define_state(state)?;
        debug!(machine = %self.id, state = state.name(), "instance state added");
        Ok(())
    }

    /// Add a transition to this instance only.
    ///
    /// Source and target names resolve against this instance's states
    /// first, then the shared ones.
    pub fn add_transition(&mut self, transition: TransitionBuilder<C>) -> Result<(), MachineError> {
        let transition = self
            .local
            .define_transition(transition.build()?, Some(self.definition.registry()))?;
        debug!(
            machine = %self.id,
            event = transition.event(),
            to = transition.target().name(),
            "instance transition added"
        );
        Ok(())
    }

    /// Dispatch `event` without arguments.
    pub fn fire(&mut self, event: &str) -> Result<(), MachineError> {
        self.fire_with(event, EventArgs::new())
    }

    /// Dispatch `event`, passing `args` to the transition's action.
    ///
    /// Exactly one transition must be applicable from the current state
    /// and have a satisfied guard. The change observer runs first, then the
    /// exit hook of the current state, the enter hook of the target and
    /// the action.
    pub fn fire_with(&mut self, event: &str, args: impl Into<EventArgs>) -> Result<(), MachineError> {
        let args = args.into();
        let transition = self.select(event)?;

        let from = self.current_state().to_string();
        let to = transition.target().name().to_string();

        self.context.changing_state(&from, &to)?;
        transition.execute(self, &args)?;

        debug!(machine = %self.id, event, from = %from, to = %to, "transition completed");
        self.history.push(StateTransition {
            event: event.to_string(),
            from,
            to,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Resolve the single transition `event` fires from the current state.
    fn select(&mut self, event: &str) -> Result<Arc<Transition<C>>, MachineError> {
        let candidates: Vec<Arc<Transition<C>>> = self
            .tiers()
            .transitions_for(event)
            .filter(|transition| transition.is_applicable_from(&self.current))
            .cloned()
            .collect();

        if candidates.is_empty() {
            debug!(machine = %self.id, event, state = self.current_state(), "no transition from state");
            return Err(MachineError::InvalidTransition {
                event: event.to_string(),
                state: self.current_state().to_string(),
            });
        }

        let mut allowed = Vec::with_capacity(candidates.len());
        for transition in candidates {
            if transition.guard().is_satisfied(self)? {
                allowed.push(transition);
            }
        }

        match allowed.len() {
            0 => {
                debug!(machine = %self.id, event, state = self.current_state(), "guard rejected transition");
                Err(MachineError::GuardNotSatisfied {
                    event: event.to_string(),
                    state: self.current_state().to_string(),
                })
            }
            1 => Ok(allowed.remove(0)),
            count => Err(MachineError::ForkedTransition {
                event: event.to_string(),
                state: self.current_state().to_string(),
                count,
            }),
        }
    }
}

impl<C: Methods + fmt::Debug + 'static> fmt::Debug for StateMachine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("id", &self.id)
            .field("definition", &self.definition.name())
            .field("current", &self.current_state())
            .field("local", &self.local)
            .field("context", &self.context)
            .finish()
    }
}
