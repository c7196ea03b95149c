//! Builder for constructing machine definitions.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::callback::Methods;
use crate::core::{DefinitionError, Registry, State, DEFAULT_HISTORY_LIMIT};
use crate::machine::{InitialState, MachineDefinition};
use tracing::debug;

/// Builder for machine definitions with a fluent API.
///
/// The builder collects every state and transition of a machine type and
/// `build()` validates them and freezes them into the shared tier.
pub struct StateMachineBuilder<C: Methods + 'static> {
    name: String,
    states: Vec<State<C>>,
    transitions: Vec<TransitionBuilder<C>>,
    initial: Option<InitialState<C>>,
    history_limit: usize,
}

impl<C: Methods + 'static> StateMachineBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: "machine".to_string(),
            states: Vec::new(),
            transitions: Vec::new(),
            initial: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Name the machine type, used in logs.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a state.
    pub fn state(mut self, state: State<C>) -> Self {
        self.states.push(state);
        self
    }

    /// Add several states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = State<C>>,
    {
        self.states.extend(states);
        self
    }

    /// Set the initial state by name (required, unless `initial_with` is used).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(InitialState::Named(name.into()));
        self
    }

    /// Compute the initial state from the host data when an instance is created.
    pub fn initial_with<F>(mut self, resolve: F) -> Self
    where
        F: Fn(&C) -> String + Send + Sync + 'static,
    {
        self.initial = Some(InitialState::resolved(resolve));
        self
    }

    /// Cap the number of transitions each instance keeps in its history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Add a transition.
    pub fn transition(mut self, transition: TransitionBuilder<C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<TransitionBuilder<C>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Validate the definitions and freeze them into a machine definition.
    pub fn build(self) -> Result<MachineDefinition<C>, BuildError> {
        let mut registry = Registry::new();
        for state in self.states {
            registry.define_state(state)?;
        }

        if registry.state_count() < 2 {
            return Err(BuildError::TooFewStates {
                count: registry.state_count(),
            });
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        if let InitialState::Named(name) = &initial {
            if name.is_empty() {
                return Err(BuildError::MissingInitialState);
            }
            if registry.state(name).is_none() {
                return Err(DefinitionError::UnknownState { name: name.clone() }.into());
            }
        }

        for transition in self.transitions {
            registry.define_transition(transition.build()?, None)?;
        }

        debug!(
            machine = %self.name,
            states = registry.state_count(),
            transitions = registry.transition_count(),
            history_limit = self.history_limit,
            "machine definition built"
        );

        Ok(MachineDefinition::new(self.name, registry, initial, self.history_limit))
    }
}

impl<C: Methods + 'static> Default for StateMachineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_states() -> StateMachineBuilder<()> {
        StateMachineBuilder::new()
            .state(State::new("looking"))
            .state(State::new("falling"))
    }

    #[test]
    fn builder_requires_two_states() {
        let result = StateMachineBuilder::<()>::new()
            .state(State::new("looking"))
            .initial("looking")
            .build();

        let error = result.unwrap_err();
        assert_eq!(error, BuildError::TooFewStates { count: 1 });
        assert!(error.is_invalid_configuration());
    }

    #[test]
    fn builder_validates_required_initial_state() {
        let result = two_states().build();

        assert_eq!(result.unwrap_err(), BuildError::MissingInitialState);
    }

    #[test]
    fn empty_initial_name_is_missing() {
        let result = two_states().initial("").build();

        assert_eq!(result.unwrap_err(), BuildError::MissingInitialState);
    }

    #[test]
    fn initial_state_must_exist() {
        let result = two_states().initial("flying").build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::Definition(DefinitionError::UnknownState {
                name: "flying".to_string()
            })
        );
    }

    #[test]
    fn redefining_a_state_is_rejected() {
        let result = two_states()
            .state(State::new("looking"))
            .initial("looking")
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::Definition(DefinitionError::DuplicateState {
                name: "looking".to_string()
            })
        );
    }

    #[test]
    fn transitions_must_reference_defined_states() {
        let result = two_states()
            .initial("looking")
            .transition(TransitionBuilder::new("land").from("falling").to("squashed"))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Definition(DefinitionError::UnknownState { .. }))
        ));
    }

    #[test]
    fn fluent_api_builds_definition() {
        let definition = two_states()
            .named("jumper")
            .initial("looking")
            .transition(TransitionBuilder::new("jump").from("looking").to("falling"))
            .build()
            .unwrap();

        assert_eq!(definition.name(), "jumper");
        assert_eq!(definition.states(), vec!["looking", "falling"]);
        assert_eq!(definition.events(), vec!["jump"]);
        assert_eq!(definition.history_limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn history_limit_is_carried_to_the_definition() {
        let definition = two_states().initial("looking").history_limit(16).build().unwrap();

        assert_eq!(definition.history_limit(), 16);
    }

    #[test]
    fn machine_without_transitions_is_valid() {
        let definition = two_states().initial("falling").build();
        assert!(definition.is_ok());
    }
}
